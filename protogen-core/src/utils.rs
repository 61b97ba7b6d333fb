//! Shared string utilities for code generation.

/// Uppercase the first character, leaving the rest untouched (e.g., "polarity" -> "Polarity").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "max_time_in_seconds" -> "MaxTimeInSeconds").
///
/// Segments written entirely in uppercase are title-cased first, so
/// "POLARITY_TRUE" becomes "PolarityTrue" rather than "POLARITYTRUE".
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let is_shouting = part.chars().any(|c| c.is_alphabetic())
                && !part.chars().any(|c| c.is_lowercase());
            if is_shouting {
                capitalize(&part.to_lowercase())
            } else {
                capitalize(part)
            }
        })
        .collect()
}

/// Quote and escape a string as a C# regular string literal.
pub fn csharp_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("Hello"), "Hello");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("max_time_in_seconds"), "MaxTimeInSeconds");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("POLARITY_TRUE"), "PolarityTrue");
        assert_eq!(to_pascal_case("use_lns_only_2"), "UseLnsOnly2");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_csharp_string_literal() {
        assert_eq!(csharp_string_literal("abc"), r#""abc""#);
        assert_eq!(csharp_string_literal(r#"a"b"#), r#""a\"b""#);
        assert_eq!(csharp_string_literal("a\\b"), r#""a\\b""#);
        assert_eq!(csharp_string_literal("line\n"), r#""line\n""#);
        assert_eq!(csharp_string_literal(""), r#""""#);
    }
}
