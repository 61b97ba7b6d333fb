use protogen_schema::ScalarKind;

use crate::unit::TypeRef;

/// C# spelling of a scalar kind.
pub fn csharp_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Double => "double",
        ScalarKind::Float => "float",
        ScalarKind::Int32 | ScalarKind::SInt32 | ScalarKind::SFixed32 => "int",
        ScalarKind::Int64 | ScalarKind::SInt64 | ScalarKind::SFixed64 => "long",
        ScalarKind::UInt32 | ScalarKind::Fixed32 => "uint",
        ScalarKind::UInt64 | ScalarKind::Fixed64 => "ulong",
        ScalarKind::Bool => "bool",
        ScalarKind::String => "string",
        ScalarKind::Bytes => "byte[]",
    }
}

pub fn scalar_ref(kind: ScalarKind) -> TypeRef {
    TypeRef::named(csharp_type(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_and_fixed_share_types() {
        assert_eq!(csharp_type(ScalarKind::SInt32), csharp_type(ScalarKind::Int32));
        assert_eq!(csharp_type(ScalarKind::SFixed64), "long");
        assert_eq!(csharp_type(ScalarKind::Fixed32), "uint");
        assert_eq!(csharp_type(ScalarKind::Fixed64), "ulong");
    }

    #[test]
    fn test_every_kind_has_a_type() {
        for kind in ScalarKind::ALL {
            assert!(!csharp_type(kind).is_empty());
        }
    }
}
