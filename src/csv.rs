//! CSV export.
//!
//! A document is written as a `section,key,value` header followed by one row
//! per entry, sections outer and keys inner, both in lexicographic order.
//! Exporting the same document twice yields identical bytes.
//!
//! With the default [`Quoting::Raw`] fields are written verbatim: a value
//! holding a comma or a double quote produces a row that CSV readers will not
//! split back into three fields. [`Quoting::Rfc4180`] quotes such fields.
//!
//! ```rust
//! use flat_toml::{from_str, to_csv_string};
//!
//! let doc = from_str("[b]\ny=2\n[a]\nx=1\n");
//! assert_eq!(to_csv_string(&doc), "section,key,value\na,x,1\nb,y,2\n");
//! ```
//!
//! ## Partial output
//!
//! Rows are handed to the destination one at a time. If a write fails part
//! way through, rows already written are left in place; nothing is rolled
//! back.

use crate::options::{CsvOptions, Quoting};
use crate::{Document, Error, Result};
use std::io::{self, Write};

/// Column names of the header row.
pub const HEADER: [&str; 3] = ["section", "key", "value"];

/// Renders documents as delimited rows.
///
/// # Examples
///
/// ```rust
/// use flat_toml::{from_str, CsvOptions, CsvSerializer, Quoting};
///
/// let doc = from_str("greeting = \"hello, world\"");
/// let serializer = CsvSerializer::new(CsvOptions::new().with_quoting(Quoting::Rfc4180));
/// assert_eq!(
///     serializer.serialize(&doc),
///     "section,key,value\n,greeting,\"hello, world\"\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvSerializer {
    options: CsvOptions,
}

impl CsvSerializer {
    pub fn new(options: CsvOptions) -> Self {
        CsvSerializer { options }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Renders the whole document into a string.
    #[must_use]
    pub fn serialize(&self, document: &Document) -> String {
        // Rough guess: three short fields per row.
        let mut output = String::with_capacity(32 * (document.len() + 1));
        if self.options.header {
            self.push_record(&mut output, HEADER);
        }
        for (section, key, value) in document.entries() {
            self.push_record(&mut output, [section, key, value]);
        }
        output
    }

    /// Writes the document row by row.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error reported by `writer`. Rows written before
    /// the failure remain on the destination.
    pub fn serialize_to<W: Write>(&self, writer: &mut W, document: &Document) -> io::Result<()> {
        let mut row = String::with_capacity(64);
        if self.options.header {
            self.push_record(&mut row, HEADER);
            writer.write_all(row.as_bytes())?;
        }
        for (section, key, value) in document.entries() {
            row.clear();
            self.push_record(&mut row, [section, key, value]);
            writer.write_all(row.as_bytes())?;
        }
        writer.flush()
    }

    fn push_record(&self, output: &mut String, fields: [&str; 3]) {
        for (idx, field) in fields.iter().enumerate() {
            if idx > 0 {
                output.push_str(self.options.delimiter.as_str());
            }
            self.push_field(output, field);
        }
        output.push('\n');
    }

    #[inline]
    fn push_field(&self, output: &mut String, field: &str) {
        match self.options.quoting {
            Quoting::Raw => output.push_str(field),
            Quoting::Rfc4180 if self.needs_quotes(field) => {
                output.push('"');
                for ch in field.chars() {
                    if ch == '"' {
                        output.push('"');
                    }
                    output.push(ch);
                }
                output.push('"');
            }
            Quoting::Rfc4180 => output.push_str(field),
        }
    }

    #[inline]
    fn needs_quotes(&self, field: &str) -> bool {
        let delimiter = self.options.delimiter.as_char();
        field
            .chars()
            .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r')
    }
}

/// Writes `document` to `writer` and maps I/O failures to [`Error::Write`].
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_document<W: Write>(
    writer: &mut W,
    document: &Document,
    options: &CsvOptions,
) -> Result<()> {
    CsvSerializer::new(options.clone())
        .serialize_to(writer, document)
        .map_err(|e| Error::write(&e.to_string()))
}
