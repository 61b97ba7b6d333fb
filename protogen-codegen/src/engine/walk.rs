use protogen_schema::SchemaNode;

use crate::Result;

/// Callbacks for a depth-first schema walk.
///
/// `ancestors` lists the path from the root down to, but excluding, `node`.
pub trait SchemaVisitor {
    fn enter(&mut self, node: &SchemaNode, ancestors: &[&SchemaNode]) -> Result<()>;

    fn exit(&mut self, _node: &SchemaNode, _ancestors: &[&SchemaNode]) -> Result<()> {
        Ok(())
    }
}

/// Walk `root` depth first: `enter` before a node's children, `exit` after.
///
/// The first error aborts the walk.
pub fn walk<V: SchemaVisitor + ?Sized>(root: &SchemaNode, visitor: &mut V) -> Result<()> {
    let mut ancestors = Vec::new();
    visit(root, visitor, &mut ancestors)
}

fn visit<'a, V: SchemaVisitor + ?Sized>(
    node: &'a SchemaNode,
    visitor: &mut V,
    ancestors: &mut Vec<&'a SchemaNode>,
) -> Result<()> {
    visitor.enter(node, ancestors)?;
    ancestors.push(node);
    for child in &node.children {
        visit(child, visitor, ancestors)?;
    }
    ancestors.pop();
    visitor.exit(node, ancestors)
}
