//! Small string helpers shared by the record parser and catalog lookups.

/// Separator between fields of a course line.
pub const FIELD_DELIMITER: char = ',';

/// Whitespace as understood by C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Canonical form of a course identifier: trimmed and ASCII-uppercased.
///
/// Both stored identifiers and lookup keys go through this function, so
/// `" csci200 "` and `"CSCI200"` always compare equal.
pub fn normalize_identifier(raw: &str) -> String {
    trim(raw).to_ascii_uppercase()
}

/// Split a line on [`FIELD_DELIMITER`] and trim every field.
///
/// A delimiter at the very end of the line does not open a new field, so
/// `"a,b,"` yields two fields while `"a,,b"` yields three.
pub fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).map(trim).collect();
    if line.ends_with(FIELD_DELIMITER) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_c_whitespace() {
        assert_eq!(trim("  \t CSCI100\r\n"), "CSCI100");
        assert_eq!(trim("\x0b\x0cx\x0c"), "x");
        assert_eq!(trim("   "), "");
        assert_eq!(trim("a b"), "a b");
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier(" csci200 "), "CSCI200");
        assert_eq!(normalize_identifier("Math201"), "MATH201");
        // only ASCII letters change case
        assert_eq!(normalize_identifier("é101"), "é101");
    }

    #[test]
    fn test_split_fields_trims_each_field() {
        assert_eq!(
            split_fields("CSCI200, Data Structures ,CSCI101,  MATH201"),
            vec!["CSCI200", "Data Structures", "CSCI101", "MATH201"]
        );
    }

    #[test]
    fn test_split_fields_keeps_inner_empty_fields() {
        assert_eq!(split_fields("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_fields("a, ,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_fields_trailing_delimiter() {
        assert_eq!(split_fields("a,"), vec!["a"]);
        assert_eq!(split_fields("a,b,"), vec!["a", "b"]);
        assert_eq!(split_fields("a,,"), vec!["a", ""]);
        assert_eq!(split_fields(","), vec![""]);
    }

    #[test]
    fn test_split_fields_empty_line() {
        assert!(split_fields("").is_empty());
        assert_eq!(split_fields("single"), vec!["single"]);
    }
}
