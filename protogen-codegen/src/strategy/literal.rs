//! Default value literals.
//!
//! Conversion is an ordered table keyed by scalar kind. Kinds missing from
//! the table have no literal form and are rejected.

use protogen_core::csharp_string_literal;
use protogen_schema::ScalarKind;
use thiserror::Error;

type LiteralFn = fn(&str) -> Option<String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("no literal conversion for scalar kind '{0}'")]
    Unsupported(ScalarKind),
    #[error("'{raw}' is not a valid {kind} value")]
    Invalid { kind: ScalarKind, raw: String },
}

pub const LITERAL_TABLE: &[(ScalarKind, LiteralFn)] = &[
    (ScalarKind::Bool, bool_literal),
    (ScalarKind::Int32, int32_literal),
    (ScalarKind::SInt32, int32_literal),
    (ScalarKind::SFixed32, int32_literal),
    (ScalarKind::Int64, int64_literal),
    (ScalarKind::SInt64, int64_literal),
    (ScalarKind::SFixed64, int64_literal),
    (ScalarKind::UInt32, uint32_literal),
    (ScalarKind::Fixed32, uint32_literal),
    (ScalarKind::UInt64, uint64_literal),
    (ScalarKind::Fixed64, uint64_literal),
    (ScalarKind::Float, float_literal),
    (ScalarKind::Double, double_literal),
    (ScalarKind::String, string_literal),
];

/// Convert a raw default value into a C# literal expression.
pub fn literal(kind: ScalarKind, raw: &str) -> Result<String, LiteralError> {
    let (_, convert) = LITERAL_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .ok_or(LiteralError::Unsupported(kind))?;
    convert(raw).ok_or_else(|| LiteralError::Invalid {
        kind,
        raw: raw.to_string(),
    })
}

/// The literal used when a field declares no default.
pub fn zero_literal(kind: ScalarKind) -> Result<String, LiteralError> {
    let raw = match kind {
        ScalarKind::Bool => "false",
        ScalarKind::String | ScalarKind::Bytes => "",
        _ => "0",
    };
    literal(kind, raw)
}

fn bool_literal(raw: &str) -> Option<String> {
    match raw.trim() {
        "true" => Some("true".to_string()),
        "false" => Some("false".to_string()),
        _ => None,
    }
}

fn int32_literal(raw: &str) -> Option<String> {
    raw.trim().parse::<i32>().ok().map(|v| v.to_string())
}

fn int64_literal(raw: &str) -> Option<String> {
    raw.trim().parse::<i64>().ok().map(|v| format!("{v}L"))
}

fn uint32_literal(raw: &str) -> Option<String> {
    raw.trim().parse::<u32>().ok().map(|v| format!("{v}U"))
}

fn uint64_literal(raw: &str) -> Option<String> {
    raw.trim().parse::<u64>().ok().map(|v| format!("{v}UL"))
}

fn float_literal(raw: &str) -> Option<String> {
    let v = raw.trim().parse::<f32>().ok()?;
    Some(if v.is_nan() {
        "float.NaN".to_string()
    } else if v == f32::INFINITY {
        "float.PositiveInfinity".to_string()
    } else if v == f32::NEG_INFINITY {
        "float.NegativeInfinity".to_string()
    } else {
        // Debug formatting is the shortest text that parses back to `v`.
        format!("{v:?}f")
    })
}

fn double_literal(raw: &str) -> Option<String> {
    let v = raw.trim().parse::<f64>().ok()?;
    Some(if v.is_nan() {
        "double.NaN".to_string()
    } else if v == f64::INFINITY {
        "double.PositiveInfinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "double.NegativeInfinity".to_string()
    } else {
        format!("{v:?}")
    })
}

fn string_literal(raw: &str) -> Option<String> {
    Some(csharp_string_literal(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_suffixes() {
        assert_eq!(literal(ScalarKind::Int32, "-7").unwrap(), "-7");
        assert_eq!(literal(ScalarKind::SFixed64, "42").unwrap(), "42L");
        assert_eq!(literal(ScalarKind::Fixed32, "3").unwrap(), "3U");
        assert_eq!(
            literal(ScalarKind::UInt64, "18446744073709551615").unwrap(),
            "18446744073709551615UL"
        );
    }

    #[test]
    fn test_float_named_constants() {
        assert_eq!(literal(ScalarKind::Double, "inf").unwrap(), "double.PositiveInfinity");
        assert_eq!(literal(ScalarKind::Double, "-inf").unwrap(), "double.NegativeInfinity");
        assert_eq!(literal(ScalarKind::Double, "nan").unwrap(), "double.NaN");
        assert_eq!(literal(ScalarKind::Float, "inf").unwrap(), "float.PositiveInfinity");
        assert_eq!(literal(ScalarKind::Float, "-inf").unwrap(), "float.NegativeInfinity");
        assert_eq!(literal(ScalarKind::Float, "nan").unwrap(), "float.NaN");
    }

    #[test]
    fn test_float_round_trip_precision() {
        assert_eq!(literal(ScalarKind::Double, "0.1").unwrap(), "0.1");
        assert_eq!(literal(ScalarKind::Double, "10").unwrap(), "10.0");
        assert_eq!(literal(ScalarKind::Double, "1e-9").unwrap(), "1e-9");
        assert_eq!(literal(ScalarKind::Float, "0.25").unwrap(), "0.25f");

        let text = literal(ScalarKind::Double, "0.30000000000000004").unwrap();
        assert_eq!(text.parse::<f64>().unwrap(), 0.30000000000000004);
    }

    #[test]
    fn test_bool_and_string() {
        assert_eq!(literal(ScalarKind::Bool, "true").unwrap(), "true");
        assert_eq!(literal(ScalarKind::String, "a\"b").unwrap(), "\"a\\\"b\"");
    }

    #[test]
    fn test_bytes_unsupported() {
        assert_eq!(
            literal(ScalarKind::Bytes, "abc"),
            Err(LiteralError::Unsupported(ScalarKind::Bytes))
        );
        assert_eq!(
            zero_literal(ScalarKind::Bytes),
            Err(LiteralError::Unsupported(ScalarKind::Bytes))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            literal(ScalarKind::Int32, "4294967296"),
            Err(LiteralError::Invalid { .. })
        ));
        assert!(matches!(
            literal(ScalarKind::Bool, "yes"),
            Err(LiteralError::Invalid { .. })
        ));
    }

    #[test]
    fn test_zero_literals() {
        assert_eq!(zero_literal(ScalarKind::Bool).unwrap(), "false");
        assert_eq!(zero_literal(ScalarKind::Int64).unwrap(), "0L");
        assert_eq!(zero_literal(ScalarKind::Double).unwrap(), "0.0");
        assert_eq!(zero_literal(ScalarKind::String).unwrap(), "\"\"");
    }

    #[test]
    fn test_table_covers_all_but_bytes() {
        for kind in ScalarKind::ALL {
            let present = LITERAL_TABLE.iter().any(|(k, _)| *k == kind);
            assert_eq!(present, kind != ScalarKind::Bytes, "{kind}");
        }
    }
}
