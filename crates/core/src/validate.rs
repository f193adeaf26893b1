//! Line validation for delimited numeric records
//!
//! A well-formed line is semicolon-delimited; every non-empty field is
//! either a bare run of decimal digits or one in a single pair of double
//! quotes. Whitespace around fields carries no meaning.

/// Field delimiter for the record format
pub const DELIMITER: char = ';';

/// Check whether a raw line is eligible for processing.
///
/// Empty and whitespace-only lines are rejected. Splitting retains empty
/// trailing fields; a single malformed field rejects the whole line.
pub fn is_valid_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    line.split(DELIMITER).all(is_valid_field)
}

fn is_valid_field(field: &str) -> bool {
    let field = field.trim();
    if field.is_empty() {
        return true;
    }
    let digits = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(field);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Normalize a field for matching: trim, strip one pair of enclosing
/// double quotes if present, trim again.
///
/// An empty result means the field carries no join information.
pub fn normalize_field(field: &str) -> &str {
    let field = field.trim();
    match field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.trim(),
        None => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace_lines() {
        assert!(!is_valid_line(""));
        assert!(!is_valid_line("   "));
        assert!(!is_valid_line("\t"));
    }

    #[test]
    fn test_accepts_bare_and_quoted_numbers() {
        assert!(is_valid_line("1;2;3"));
        assert!(is_valid_line("\"1\";2"));
        assert!(is_valid_line("\"123\";\"456\""));
        assert!(is_valid_line("42"));
    }

    #[test]
    fn test_accepts_empty_fields() {
        assert!(is_valid_line("1;;3"));
        assert!(is_valid_line("1;2;"));
        assert!(is_valid_line(";;1"));
    }

    #[test]
    fn test_whitespace_around_fields_is_insignificant() {
        assert!(is_valid_line(" 1 ; 2 "));
        assert!(is_valid_line("  \"7\"  ;8"));
    }

    #[test]
    fn test_rejects_non_numeric_fields() {
        assert!(!is_valid_line("abc;1"));
        assert!(!is_valid_line("1;2x"));
        assert!(!is_valid_line("1.5;2"));
        assert!(!is_valid_line("-1;2"));
    }

    #[test]
    fn test_rejects_malformed_quoting() {
        assert!(!is_valid_line("\"1;2"));
        assert!(!is_valid_line("1\";2"));
        assert!(!is_valid_line("\"\";2"));
        assert!(!is_valid_line("\"\"1\"\";2"));
        assert!(!is_valid_line("\" 1 \";2"));
    }

    #[test]
    fn test_one_bad_field_rejects_the_line() {
        assert!(!is_valid_line("1;2;three;4"));
    }

    #[test]
    fn test_normalize_strips_one_quote_pair() {
        assert_eq!(normalize_field("7"), "7");
        assert_eq!(normalize_field("\"7\""), "7");
        assert_eq!(normalize_field("  \"7\"  "), "7");
        assert_eq!(normalize_field("\"\"7\"\""), "\"7\"");
    }

    #[test]
    fn test_normalize_handles_stray_quotes() {
        assert_eq!(normalize_field("\"7"), "\"7");
        assert_eq!(normalize_field("7\""), "7\"");
        assert_eq!(normalize_field("\""), "\"");
    }

    #[test]
    fn test_normalize_empty_fields() {
        assert_eq!(normalize_field(""), "");
        assert_eq!(normalize_field("   "), "");
        assert_eq!(normalize_field("\"\""), "");
    }
}
