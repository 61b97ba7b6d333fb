//! The reduction table: which frame folds into which, and how.

use crate::{Error, Result};

use super::{
    frame::{FrameTag, GenerationFrame},
    stack::{Fold, ReductionStack},
};

/// One row of the reduction table.
#[derive(Debug, Clone, Copy)]
pub struct Reduction {
    pub child: FrameTag,
    pub parent: FrameTag,
    pub fold: Fold,
}

const fn row(child: FrameTag, parent: FrameTag, fold: Fold) -> Reduction {
    Reduction {
        child,
        parent,
        fold,
    }
}

pub const REDUCTIONS: &[Reduction] = &[
    row(FrameTag::EnumMember, FrameTag::Enum, fold_enum_member),
    row(FrameTag::Field, FrameTag::Message, fold_field_into_message),
    row(FrameTag::Field, FrameTag::Variant, fold_field_into_variant),
    row(FrameTag::Variant, FrameTag::Message, fold_variant),
    row(FrameTag::Enum, FrameTag::Message, fold_nested_enum),
    row(FrameTag::Enum, FrameTag::Root, fold_enum_into_root),
    row(FrameTag::Message, FrameTag::Message, fold_nested_message),
    row(FrameTag::Message, FrameTag::Root, fold_message_into_root),
];

/// Whether a `child` frame may sit directly above a `parent` frame.
pub fn reducible(child: FrameTag, parent: FrameTag) -> bool {
    REDUCTIONS
        .iter()
        .any(|r| r.child == child && r.parent == parent)
}

/// Fold the top frame, tagged `child`, into whatever frame is below it.
///
/// Unlike [`ReductionStack::reduce`], a missing table row is an error here.
pub fn reduce_required(stack: &mut ReductionStack, child: FrameTag) -> Result<()> {
    for reduction in REDUCTIONS.iter().filter(|r| r.child == child) {
        if stack.reduce(reduction.child, reduction.parent, reduction.fold)? {
            return Ok(());
        }
    }
    Err(Error::protocol(format!(
        "no reduction for {} over {}",
        stack.top().map_or("nothing".to_string(), |t| t.to_string()),
        stack.below_top().map_or("nothing".to_string(), |t| t.to_string()),
    )))
}

fn mismatch(parent: &GenerationFrame, child: &GenerationFrame) -> Error {
    Error::protocol(format!(
        "fold called with {} over {}",
        child.tag(),
        parent.tag()
    ))
}

fn fold_enum_member(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Enum(frame), GenerationFrame::EnumMember(member)) => {
            frame.decl.members.push(member);
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_field_into_message(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Message(message), GenerationFrame::Field(field)) => {
            message.add_field(field);
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_field_into_variant(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Variant(variant), GenerationFrame::Field(field)) => {
            variant.fields.push(field);
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_variant(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Message(message), GenerationFrame::Variant(variant)) => {
            for mut field in variant.fields {
                if field.property.doc.is_none() {
                    field.property.doc = Some(format!("Member of oneof `{}`.", variant.name));
                }
                message.add_field(field);
            }
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_nested_enum(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Message(message), GenerationFrame::Enum(frame)) => {
            message.nested.push(frame.into_unit());
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_enum_into_root(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Root(root), GenerationFrame::Enum(frame)) => {
            root.mint(frame.into_unit());
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_nested_message(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Message(outer), GenerationFrame::Message(inner)) => {
            outer.nested.extend(inner.into_units());
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

fn fold_message_into_root(parent: &mut GenerationFrame, child: GenerationFrame) -> Result<()> {
    match (parent, child) {
        (GenerationFrame::Root(root), GenerationFrame::Message(message)) => {
            for unit in message.into_units() {
                root.mint(unit);
            }
            Ok(())
        }
        (parent, child) => Err(mismatch(parent, &child)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::frame::{EnumFrame, MessageFrame, VariantFrame},
        unit::{ClassDecl, EnumDecl, EnumMember},
    };

    #[test]
    fn test_table_has_no_duplicate_rows() {
        for (i, a) in REDUCTIONS.iter().enumerate() {
            for b in &REDUCTIONS[i + 1..] {
                assert!(
                    !(a.child == b.child && a.parent == b.parent),
                    "{} over {} listed twice",
                    a.child,
                    a.parent
                );
            }
        }
    }

    #[test]
    fn test_nothing_reduces_into_leaves() {
        for leaf in [FrameTag::Field, FrameTag::EnumMember] {
            assert!(REDUCTIONS.iter().all(|r| r.parent != leaf));
        }
        assert!(REDUCTIONS.iter().all(|r| r.child != FrameTag::Root));
    }

    #[test]
    fn test_reducible() {
        assert!(reducible(FrameTag::Field, FrameTag::Variant));
        assert!(!reducible(FrameTag::Variant, FrameTag::Root));
        assert!(!reducible(FrameTag::EnumMember, FrameTag::Message));
    }

    #[test]
    fn test_reduce_required_enum_into_root() {
        let mut stack = ReductionStack::seeded();
        stack.push(GenerationFrame::Enum(EnumFrame {
            namespace: "Demo".into(),
            decl: EnumDecl::new("Color").member(EnumMember::new("Red", 0)),
        }));

        reduce_required(&mut stack, FrameTag::Enum).unwrap();
        let root = stack.into_root().unwrap();
        assert_eq!(root.units.len(), 1);
        let unit = root.units.values().next().unwrap();
        assert_eq!(unit.qualified_name(), "Demo.Color");
    }

    #[test]
    fn test_reduce_required_without_row_fails() {
        let mut stack = ReductionStack::seeded();
        stack.push(GenerationFrame::Variant(VariantFrame::new("choice")));

        let err = reduce_required(&mut stack, FrameTag::Variant).unwrap_err();
        assert!(matches!(err, Error::ReductionProtocol { .. }));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_fold_rejects_wrong_frames() {
        let mut parent = GenerationFrame::Message(MessageFrame::new("Demo", ClassDecl::new("M")));
        let child = GenerationFrame::EnumMember(EnumMember::new("Red", 0));
        assert!(fold_enum_member(&mut parent, child).is_err());
    }

    #[test]
    fn test_message_into_root_mints_every_unit() {
        let mut message = MessageFrame::new("Demo", ClassDecl::new("Outer"));
        message.nested.push(
            EnumFrame {
                namespace: "Demo.OuterTypes".into(),
                decl: EnumDecl::new("Inner"),
            }
            .into_unit(),
        );

        let mut stack = ReductionStack::seeded();
        stack.push(GenerationFrame::Message(message));
        reduce_required(&mut stack, FrameTag::Message).unwrap();

        let root = stack.into_root().unwrap();
        let names: Vec<String> = root.units.values().map(|u| u.qualified_name()).collect();
        assert_eq!(names, vec!["Demo.Outer", "Demo.OuterTypes.Inner"]);
    }
}
