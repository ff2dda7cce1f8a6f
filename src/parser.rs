//! Single-pass parsing of flat TOML text.
//!
//! The parser walks the input once, in source order. Each line is
//! [classified](crate::classify) and the result is folded into a
//! [`DocumentBuilder`], which carries the only state of the pass: the name of
//! the current section.
//!
//! Lines the dialect does not understand are dropped without a diagnostic.
//!
//! ## Usage
//!
//! ```rust
//! use flat_toml::from_str;
//!
//! let doc = from_str("[a]\nx=1\n[b]\ny=2\n");
//! assert_eq!(doc.get("a", "x"), Some("1"));
//! assert_eq!(doc.get("b", "y"), Some("2"));
//! ```

use crate::line::{classify, Line};
use crate::{Document, DocumentBuilder, Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Folds one raw line into `builder`. `number` is 1-based and only used for
/// tracing.
pub fn apply_line(builder: &mut DocumentBuilder, number: usize, raw: &str) {
    match classify(raw) {
        Line::Blank | Line::Comment => {}
        Line::Section(name) => {
            debug!(line = number, section = name, "entering section");
            builder.set_section(name);
        }
        Line::KeyValue { key, value } => {
            builder.apply(key, value);
        }
        Line::Unrecognized => {
            trace!(line = number, "discarding unrecognized line");
        }
    }
}

/// Parses a complete document held in memory.
#[must_use]
pub fn parse_str(input: &str) -> Document {
    let mut builder = DocumentBuilder::new();
    for (idx, raw) in input.lines().enumerate() {
        apply_line(&mut builder, idx + 1, raw);
    }
    finish(builder)
}

/// Parses a document from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns [`Error::Read`] if a line cannot be read (including invalid
/// UTF-8). No partial document is returned.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Document> {
    let mut builder = DocumentBuilder::new();
    let mut buf = String::new();
    let mut number = 0;

    loop {
        buf.clear();
        number += 1;
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| Error::read(number, &e.to_string()))?;
        if read == 0 {
            break;
        }
        let raw = buf.strip_suffix('\n').unwrap_or(&buf);
        apply_line(&mut builder, number, raw);
    }

    Ok(finish(builder))
}

/// Opens `path` and parses it.
///
/// # Errors
///
/// Returns [`Error::SourceUnreadable`] if the file cannot be opened, and
/// [`Error::Read`] if reading fails part way through.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::source_unreadable(path, &e.to_string()))?;
    debug!(path = %path.display(), "parsing");
    parse_reader(BufReader::new(file))
}

fn finish(builder: DocumentBuilder) -> Document {
    let document = builder.finish();
    debug!(
        sections = document.sections().count(),
        entries = document.len(),
        "parse complete"
    );
    document
}
