use indexmap::IndexMap;
use protogen_schema::{NodeKind, SchemaNode, SchemaTree};

use crate::{
    Error, Result,
    generation::AssetKey,
    index::{SchemaIndex, Scope},
    options::GeneratorOptions,
    strategy::{FieldContext, build_field, enum_decl, enum_member, message_class},
    unit::CompilationUnit,
};

use super::{
    frame::{EnumFrame, FrameTag, GenerationFrame, MessageFrame, VariantFrame},
    reduce::{reduce_required, reducible},
    stack::ReductionStack,
    walk::{SchemaVisitor, walk},
};

/// Frames a node pushed on enter and reductions it performed on exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBalance {
    /// Node kind and name, e.g. `enum 'Polarity'`.
    pub node: String,
    pub pushed: usize,
    pub reduced: usize,
}

impl NodeBalance {
    /// Frames this node leaves for an ancestor to reduce.
    pub fn outstanding(&self) -> isize {
        self.pushed as isize - self.reduced as isize
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self.outstanding(), 0 | 1)
    }
}

/// Result of one traversal: every completed unit keyed by its asset key.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    pub units: IndexMap<AssetKey, CompilationUnit>,
    /// One record per visited node, in exit order.
    pub balance: Vec<NodeBalance>,
}

/// Walk the tree and reduce it into compilation units.
///
/// A fresh [`SchemaIndex`] is built for every call; nothing is cached
/// between schemas.
pub fn generate_units(tree: &SchemaTree, options: &GeneratorOptions) -> Result<Traversal> {
    let index = SchemaIndex::build(tree.root(), &options.naming)?;
    tracing::debug!(types = index.len(), "indexed schema");

    let mut visitor = CodegenVisitor {
        index: &index,
        options,
        stack: ReductionStack::seeded(),
        scopes: Vec::new(),
        pending: Vec::new(),
        balance: Vec::new(),
    };
    walk(tree.root(), &mut visitor)?;

    let root = visitor.stack.into_root()?;
    tracing::debug!(units = root.units.len(), "traversal complete");
    Ok(Traversal {
        units: root.units,
        balance: visitor.balance,
    })
}

struct CodegenVisitor<'a> {
    index: &'a SchemaIndex,
    options: &'a GeneratorOptions,
    stack: ReductionStack,
    scopes: Vec<Scope>,
    /// Pushes made by each node on the current path.
    pending: Vec<usize>,
    balance: Vec<NodeBalance>,
}

impl CodegenVisitor<'_> {
    fn scope(&self, node: &SchemaNode) -> Result<&Scope> {
        self.scopes.last().ok_or_else(|| {
            Error::schema(describe(node), "declared outside of a package")
        })
    }

    /// Push `frame` if the current top may receive it, else the tree is malformed.
    fn open(&mut self, node: &SchemaNode, frame: GenerationFrame) -> Result<usize> {
        let tag = frame.tag();
        let parent = self.stack.top().unwrap_or(FrameTag::Root);
        if !reducible(tag, parent) {
            return Err(Error::schema(
                describe(node),
                format!("a {tag} cannot be declared inside a {parent}"),
            ));
        }
        self.stack.push(frame);
        Ok(1)
    }

    fn frame_for(&self, node: &SchemaNode) -> Result<Option<GenerationFrame>> {
        let naming = &self.options.naming;
        let frame = match &node.kind {
            NodeKind::Package { .. } => None,
            NodeKind::Enum { name } => {
                let scope = self.scope(node)?;
                Some(GenerationFrame::Enum(EnumFrame {
                    namespace: scope.namespace.clone(),
                    decl: enum_decl(name, scope, naming),
                }))
            }
            NodeKind::EnumField { name, ordinal } => Some(GenerationFrame::EnumMember(
                enum_member(name, *ordinal, naming),
            )),
            NodeKind::Message { name } => {
                let scope = self.scope(node)?;
                let class = message_class(name, scope, naming);
                let mut frame = MessageFrame::new(&scope.namespace, class);
                frame.usings.push(self.options.runtime_namespace.clone());
                Some(GenerationFrame::Message(frame))
            }
            NodeKind::FieldVariant { name } => {
                Some(GenerationFrame::Variant(VariantFrame::new(name)))
            }
            NodeKind::Field(field) => {
                let ctx = FieldContext {
                    index: self.index,
                    options: self.options,
                    scope: self.scope(node)?,
                };
                Some(GenerationFrame::Field(build_field(field, &ctx)?))
            }
        };
        Ok(frame)
    }
}

impl SchemaVisitor for CodegenVisitor<'_> {
    fn enter(&mut self, node: &SchemaNode, _ancestors: &[&SchemaNode]) -> Result<()> {
        let pushed = match self.frame_for(node)? {
            Some(frame) => self.open(node, frame)?,
            None => 0,
        };

        match &node.kind {
            NodeKind::Package { path } => {
                self.scopes.push(Scope::package(path, &self.options.naming));
            }
            NodeKind::Message { name } => {
                let inner = self.scope(node)?.message(name, &self.options.naming);
                self.scopes.push(inner);
            }
            _ => {}
        }

        self.pending.push(pushed);
        Ok(())
    }

    fn exit(&mut self, node: &SchemaNode, _ancestors: &[&SchemaNode]) -> Result<()> {
        let pushed = self
            .pending
            .pop()
            .ok_or_else(|| Error::protocol(format!("exit without enter for {}", describe(node))))?;

        let before = self.stack.reductions();
        if pushed > 0 {
            let tag = self
                .stack
                .top()
                .ok_or_else(|| Error::protocol("stack emptied during traversal"))?;
            reduce_required(&mut self.stack, tag)?;
        }
        if matches!(node.kind, NodeKind::Package { .. } | NodeKind::Message { .. }) {
            self.scopes.pop();
        }

        let record = NodeBalance {
            node: describe(node),
            pushed,
            reduced: self.stack.reductions() - before,
        };
        if !record.is_balanced() {
            return Err(Error::protocol(format!(
                "{} pushed {} frame(s) but reduced {}",
                record.node, record.pushed, record.reduced
            )));
        }
        self.balance.push(record);
        Ok(())
    }
}

fn describe(node: &SchemaNode) -> String {
    format!("{} '{}'", node.kind.kind_name(), node.name())
}
