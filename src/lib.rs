//! # flat_toml
//!
//! A parser for a flat, section-only TOML dialect, with CSV export.
//!
//! ## What is the dialect?
//!
//! Line-oriented text with `[section]` headers and `key = value` pairs. Every
//! value is a string. There are no nested tables, arrays, multi-line strings,
//! typed values or escape sequences. See [`format`] for the full rules.
//!
//! ```text
//! # Global settings
//! title = "Example"
//!
//! [server]
//! host = "localhost"
//! port = 8080 # default port
//! ```
//!
//! ## Key Features
//!
//! - **Single pass**: one line at a time, no lookahead, no backtracking
//! - **Best effort**: lines that fit no rule are dropped silently
//! - **Deterministic**: sections and keys iterate in lexicographic order, so
//!   exports are byte-identical for equal documents
//! - **Last write wins**: repeated keys overwrite, repeated headers merge
//!
//! ## Quick Start
//!
//! ```rust
//! use flat_toml::{from_str, to_csv_string};
//!
//! let doc = from_str("[a]\nx=1\n[b]\ny=2\n");
//! assert_eq!(doc.get("a", "x"), Some("1"));
//!
//! let csv = to_csv_string(&doc);
//! assert_eq!(csv, "section,key,value\na,x,1\nb,y,2\n");
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use flat_toml::{diagram, from_path, write_csv_file};
//!
//! # fn main() -> flat_toml::Result<()> {
//! let doc = from_path("config.toml")?;
//! write_csv_file("config.csv", &doc)?;
//! diagram::write_state_diagram_file("parser.dot")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Other formats via serde
//!
//! [`Document`] serializes as a map of maps, so any serde format works:
//!
//! ```rust
//! let doc = flat_toml::from_str("[db]\nuser = admin");
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"{"db":{"user":"admin"}}"#);
//! ```

pub mod csv;
pub mod diagram;
pub mod document;
pub mod error;
pub mod format;
pub mod line;
pub mod options;
pub mod parser;
pub mod text;

pub use csv::CsvSerializer;
pub use document::{Document, DocumentBuilder, Section, DEFAULT_SECTION};
pub use error::{Error, Result};
pub use line::{classify, extract_field, Line};
pub use options::{CsvOptions, Delimiter, Quoting};
pub use parser::{parse_path, parse_reader, parse_str};

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::debug;

/// Parses a document from a string.
///
/// Never fails: lines that fit no rule are dropped.
///
/// # Examples
///
/// ```rust
/// use flat_toml::from_str;
///
/// let doc = from_str("name = \"localhost\"\nport = 8080");
/// assert_eq!(doc.get("", "name"), Some("localhost"));
/// assert_eq!(doc.get("", "port"), Some("8080"));
/// ```
#[must_use]
pub fn from_str(s: &str) -> Document {
    parse_str(s)
}

/// Parses a document from a buffered reader.
///
/// # Examples
///
/// ```rust
/// use flat_toml::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new("[a]\nx = 1\n")).unwrap();
/// assert_eq!(doc.get("a", "x"), Some("1"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::BufRead>(reader: R) -> Result<Document> {
    parse_reader(reader)
}

/// Opens and parses the file at `path`.
///
/// # Errors
///
/// Returns [`Error::SourceUnreadable`] if the file cannot be opened, or
/// [`Error::Read`] if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    parse_path(path)
}

/// Renders `document` as CSV with default options.
#[must_use]
pub fn to_csv_string(document: &Document) -> String {
    to_csv_string_with_options(document, &CsvOptions::default())
}

/// Renders `document` as CSV with custom options.
#[must_use]
pub fn to_csv_string_with_options(document: &Document, options: &CsvOptions) -> String {
    CsvSerializer::new(options.clone()).serialize(document)
}

/// Writes `document` as CSV to `writer`, row by row.
///
/// # Examples
///
/// ```rust
/// use flat_toml::{from_str, to_csv_writer};
///
/// let doc = from_str("[a]\nx = 1");
/// let mut buffer = Vec::new();
/// to_csv_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"section,key,value\na,x,1\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Write`] if writing fails. Rows written before the failure
/// stay on the destination.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_csv_writer<W: io::Write>(mut writer: W, document: &Document) -> Result<()> {
    csv::write_document(&mut writer, document, &CsvOptions::default())
}

/// Writes `document` as CSV to `writer` with custom options.
///
/// # Errors
///
/// Returns [`Error::Write`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_csv_writer_with_options<W: io::Write>(
    mut writer: W,
    document: &Document,
    options: &CsvOptions,
) -> Result<()> {
    csv::write_document(&mut writer, document, options)
}

/// Creates (or truncates) `path` and writes `document` to it as CSV.
///
/// # Errors
///
/// Returns [`Error::DestinationUnwritable`] if the file cannot be created and
/// [`Error::Write`] if writing fails afterwards, in which case the file may
/// hold a prefix of the rows.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_csv_file(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    write_csv_file_with_options(path, document, &CsvOptions::default())
}

/// Like [`write_csv_file`], with custom options.
///
/// # Errors
///
/// See [`write_csv_file`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_csv_file_with_options(
    path: impl AsRef<Path>,
    document: &Document,
    options: &CsvOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|e| Error::destination_unwritable(path, &e.to_string()))?;
    csv::write_document(&mut BufWriter::new(file), document, options)?;
    debug!(path = %path.display(), rows = document.len(), "csv written");
    Ok(())
}
