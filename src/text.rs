//! Small string helpers shared by the line classifier and field extractor.

/// Comment marker. Everything from its first occurrence to the end of the
/// line is dropped, quoted or not.
pub const COMMENT: char = '#';

/// Cuts `line` at the first [`COMMENT`] marker.
///
/// The cut is positional: a `#` inside a quoted value truncates too.
///
/// ```rust
/// use flat_toml::text::strip_comment;
///
/// assert_eq!(strip_comment("port = 8080 # default"), "port = 8080 ");
/// assert_eq!(strip_comment("name = \"a#b\""), "name = \"a");
/// ```
#[inline]
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Removes exactly one pair of surrounding double quotes, if present.
///
/// Inner quotes and backslashes are left untouched.
///
/// ```rust
/// use flat_toml::text::strip_quotes;
///
/// assert_eq!(strip_quotes("\"localhost\""), "localhost");
/// assert_eq!(strip_quotes("\"\"a\"\""), "\"a\"");
/// assert_eq!(strip_quotes("\""), "\"");
/// ```
#[inline]
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
