//! The parsed document model.
//!
//! A [`Document`] maps section names to [`Section`]s, and a section maps keys
//! to string values. Both levels iterate in lexicographic order of their
//! names, never in source order, so two documents with the same entries
//! always print and export identically.
//!
//! Documents are built by a [`DocumentBuilder`] and are read-only afterwards.
//!
//! ## Merge semantics
//!
//! - Writing an existing `(section, key)` pair replaces the value.
//! - Opening a header that was already seen continues the same section.
//! - A header with no entries under it never shows up in the document.
//!
//! ```rust
//! use flat_toml::from_str;
//!
//! let doc = from_str("[server]\nhost = \"localhost\"\n[server]\ntimeout = 30\n");
//! let server = doc.section("server").unwrap();
//! assert_eq!(server.get("host"), Some("localhost"));
//! assert_eq!(server.get("timeout"), Some("30"));
//! assert_eq!(doc.sections().count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the implicit section holding entries that precede any header.
pub const DEFAULT_SECTION: &str = "";

/// Key/value pairs of one section, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(BTreeMap<String, String>);

impl Section {
    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` has a value in this section.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the keys in lexicographic order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns the entries in lexicographic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A parsed document: sections ordered by name.
///
/// # Examples
///
/// ```rust
/// use flat_toml::from_str;
///
/// let doc = from_str("top = 1\n[b]\ny = 2\n[a]\nx = 1\n");
/// let names: Vec<_> = doc.sections().map(|(name, _)| name.as_str()).collect();
/// assert_eq!(names, vec!["", "a", "b"]);
/// assert_eq!(doc.get("", "top"), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(BTreeMap<String, Section>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document(BTreeMap::new())
    }

    /// Returns the section called `name`, if it holds at least one entry.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.0.get(name)
    }

    /// Looks up a single value.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Returns the sections in lexicographic order.
    pub fn sections(&self) -> btree_map::Iter<'_, String, Section> {
        self.0.iter()
    }

    /// Returns every `(section, key, value)` triple, sections outer and keys
    /// inner, both in lexicographic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.0.iter().flat_map(|(section, entries)| {
            entries
                .iter()
                .map(move |(key, value)| (section.as_str(), key.as_str(), value.as_str()))
        })
    }

    /// Returns the total number of entries across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Section::len).sum()
    }

    /// Returns `true` if the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn apply(&mut self, section: &str, key: &str, value: &str) -> Option<String> {
        match self.0.get_mut(section) {
            Some(entries) => entries.insert(key.to_string(), value.to_string()),
            None => {
                let mut entries = Section::default();
                entries.insert(key.to_string(), value.to_string());
                self.0.insert(section.to_string(), entries);
                None
            }
        }
    }
}

/// Human-readable dump: a `[name]` line per named section, its entries as
/// `key = value`, and a blank line after every section.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in &self.0 {
            if name != DEFAULT_SECTION {
                writeln!(f, "[{}]", name)?;
            }
            for (key, value) in section {
                writeln!(f, "{} = {}", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Accumulates classified lines into a [`Document`].
///
/// Carries the current-section cursor for one parsing pass. The cursor starts
/// at [`DEFAULT_SECTION`].
///
/// # Examples
///
/// ```rust
/// use flat_toml::DocumentBuilder;
///
/// let mut builder = DocumentBuilder::new();
/// builder.apply("debug", "false");
/// builder.set_section("server");
/// builder.apply("port", "80");
/// builder.apply("port", "8080");
/// builder.set_section("empty");
///
/// let doc = builder.finish();
/// assert_eq!(doc.get("", "debug"), Some("false"));
/// assert_eq!(doc.get("server", "port"), Some("8080"));
/// assert!(doc.section("empty").is_none());
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
    current_section: String,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `name`. Creates nothing by itself.
    pub fn set_section(&mut self, name: &str) {
        self.current_section.clear();
        self.current_section.push_str(name);
    }

    /// Inserts or overwrites `key` in the current section, creating the
    /// section on first use. Returns the replaced value, if any.
    pub fn apply(&mut self, key: &str, value: &str) -> Option<String> {
        self.document.apply(&self.current_section, key, value)
    }

    /// Returns the name of the section subsequent entries go to.
    #[must_use]
    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Ends the pass and hands out the finished document.
    #[must_use]
    pub fn finish(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(steps: &[(&str, &str, &str)]) -> Document {
        let mut builder = DocumentBuilder::new();
        for (section, key, value) in steps {
            builder.set_section(section);
            builder.apply(key, value);
        }
        builder.finish()
    }

    #[test]
    fn test_last_write_wins() {
        let mut builder = DocumentBuilder::new();
        assert_eq!(builder.apply("k", "1"), None);
        assert_eq!(builder.apply("k", "2"), Some("1".to_string()));
        let doc = builder.finish();
        assert_eq!(doc.get("", "k"), Some("2"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_sections_sorted_not_inserted() {
        let doc = build(&[("zeta", "a", "1"), ("alpha", "b", "2"), ("mid", "c", "3")]);
        let names: Vec<_> = doc.sections().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_keys_sorted_not_inserted() {
        let doc = build(&[("s", "b", "2"), ("s", "a", "1"), ("s", "c", "3")]);
        let keys: Vec<_> = doc.section("s").unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_entries_order() {
        let doc = build(&[("b", "y", "2"), ("a", "z", "3"), ("a", "x", "1")]);
        let entries: Vec<_> = doc.entries().collect();
        assert_eq!(
            entries,
            vec![("a", "x", "1"), ("a", "z", "3"), ("b", "y", "2")]
        );
    }

    #[test]
    fn test_set_section_without_entries_creates_nothing() {
        let mut builder = DocumentBuilder::new();
        builder.set_section("empty");
        assert_eq!(builder.current_section(), "empty");
        let doc = builder.finish();
        assert!(doc.is_empty());
        assert!(doc.section("empty").is_none());
    }

    #[test]
    fn test_display_dump() {
        let doc = build(&[("", "debug", "true"), ("db", "host", "local")]);
        assert_eq!(doc.to_string(), "debug = true\n\n[db]\nhost = local\n\n");
    }
}
