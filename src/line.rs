//! Line classification and key/value extraction.
//!
//! Every input line is looked at in isolation: there is no lookahead and no
//! state other than the current section, which lives in
//! [`DocumentBuilder`](crate::DocumentBuilder).
//!
//! Classification runs in a fixed order:
//!
//! 1. Empty (after trimming) or starting with `#` → [`Line::Blank`] / [`Line::Comment`]
//! 2. Cut at the first `#`, then trim
//! 3. `[...]` → [`Line::Section`], name taken verbatim between the brackets
//! 4. Contains `=` → [`Line::KeyValue`] (after [`extract_field`])
//! 5. Anything else → [`Line::Unrecognized`]
//!
//! ## Examples
//!
//! ```rust
//! use flat_toml::{classify, Line};
//!
//! assert_eq!(classify("[server]"), Line::Section("server"));
//! assert_eq!(
//!     classify("port = 8080 # default port"),
//!     Line::KeyValue { key: "port", value: "8080" }
//! );
//! assert_eq!(classify("just some text"), Line::Unrecognized);
//! ```

use crate::text::{strip_comment, strip_quotes, COMMENT};

/// The shape of a single input line.
///
/// Borrowed slices point into the line passed to [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    /// `[name]` header. The name is not trimmed or validated.
    Section(&'a str),
    /// `key = value` with both sides trimmed and one quote pair removed.
    KeyValue { key: &'a str, value: &'a str },
    /// Anything else. Carries nothing; the line is dropped.
    Unrecognized,
}

impl Line<'_> {
    /// Returns `true` if the line contributes nothing to the document.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Line::Blank | Line::Comment | Line::Unrecognized)
    }
}

/// Classifies one raw line (without its trailing newline).
#[must_use]
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(COMMENT) {
        return Line::Comment;
    }

    let content = strip_comment(raw).trim();

    if content.len() >= 2 && content.starts_with('[') && content.ends_with(']') {
        return Line::Section(&content[1..content.len() - 1]);
    }

    match content.split_once('=') {
        Some((raw_key, raw_value)) => match extract_field(raw_key, raw_value) {
            Some((key, value)) => Line::KeyValue { key, value },
            None => Line::Unrecognized,
        },
        None => Line::Unrecognized,
    }
}

/// Trims a raw key and value and strips one layer of quotes from the value.
///
/// Returns `None` when the key is empty after trimming; such a line carries
/// no usable entry.
///
/// ```rust
/// use flat_toml::extract_field;
///
/// assert_eq!(extract_field(" name ", " \"localhost\" "), Some(("name", "localhost")));
/// assert_eq!(extract_field("   ", "orphan"), None);
/// ```
#[must_use]
pub fn extract_field<'a>(raw_key: &'a str, raw_value: &'a str) -> Option<(&'a str, &'a str)> {
    let key = raw_key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, strip_quotes(raw_value.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t"), Line::Blank);
        assert_eq!(classify("# heading"), Line::Comment);
        assert_eq!(classify("    # indented"), Line::Comment);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(classify("[server]"), Line::Section("server"));
        assert_eq!(classify("  [server]  "), Line::Section("server"));
        assert_eq!(classify("[server] # main"), Line::Section("server"));
    }

    #[test]
    fn test_section_name_is_verbatim() {
        assert_eq!(classify("[ spaced out ]"), Line::Section(" spaced out "));
        assert_eq!(classify("[a.b.c]"), Line::Section("a.b.c"));
        assert_eq!(classify("[]"), Line::Section(""));
    }

    #[test]
    fn test_lone_bracket_is_not_a_header() {
        assert_eq!(classify("["), Line::Unrecognized);
        assert_eq!(classify("]"), Line::Unrecognized);
    }

    #[test]
    fn test_key_value() {
        assert_eq!(
            classify("name = \"localhost\""),
            Line::KeyValue {
                key: "name",
                value: "localhost"
            }
        );
        assert_eq!(
            classify("port=8080"),
            Line::KeyValue {
                key: "port",
                value: "8080"
            }
        );
    }

    #[test]
    fn test_splits_on_first_equals() {
        assert_eq!(
            classify("url = a=b=c"),
            Line::KeyValue {
                key: "url",
                value: "a=b=c"
            }
        );
    }

    #[test]
    fn test_comment_truncates_inside_quotes() {
        assert_eq!(
            classify("color = \"#ff0000\""),
            Line::KeyValue {
                key: "color",
                value: "\""
            }
        );
    }

    #[test]
    fn test_trailing_carriage_return_trimmed() {
        assert_eq!(classify("[server]\r"), Line::Section("server"));
        assert_eq!(
            classify("  key = v \r"),
            Line::KeyValue {
                key: "key",
                value: "v"
            }
        );
        assert_eq!(classify("\t\r"), Line::Blank);
    }

    #[test]
    fn test_header_wins_over_equals() {
        assert_eq!(classify("[a=b]"), Line::Section("a=b"));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("just some text"), Line::Unrecognized);
        assert_eq!(classify("= value"), Line::Unrecognized);
        assert!(classify("[broken").is_skipped());
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(
            classify("key ="),
            Line::KeyValue {
                key: "key",
                value: ""
            }
        );
        assert_eq!(
            classify("key = \"\""),
            Line::KeyValue {
                key: "key",
                value: ""
            }
        );
    }
}
