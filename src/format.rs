//! Flat TOML Dialect
//!
//! This module documents the dialect accepted by [`from_str`](crate::from_str)
//! and the CSV layout produced by [`to_csv_string`](crate::to_csv_string).
//! It contains no code.
//!
//! # Overview
//!
//! The dialect is a flat subset of TOML. A document is a set of named
//! sections, each holding string-valued keys. There are no nested tables,
//! arrays, multi-line strings, typed values or escape sequences.
//!
//! # Lines
//!
//! Input is UTF-8 text split on `\n`. A trailing `\r` is treated as
//! whitespace. Each line is handled on its own:
//!
//! | Line | Result |
//! |------|--------|
//! | empty or whitespace only | skipped |
//! | first non-blank character is `#` | skipped |
//! | `[name]` | current section becomes `name` |
//! | `key = value` | entry in the current section |
//! | anything else | skipped, no error |
//!
//! ## Comments
//!
//! Before anything else the line is cut at its first `#`, wherever it is.
//! Quotes do not protect it:
//!
//! ```text
//! port = 8080 # default port    → port = 8080
//! color = "#ff0000"             → color = "
//! ```
//!
//! ## Section headers
//!
//! After comment removal and trimming, a line that starts with `[` and ends
//! with `]` is a header. The text between the brackets is the section name,
//! used exactly as written: `[ a ]` names the section `" a "`, and `[]`
//! returns to the default section.
//!
//! Entries before the first header belong to the default section, whose name
//! is the empty string.
//!
//! A header that is followed by no entries does not appear in the document.
//!
//! ## Key/value pairs
//!
//! The line is split at its first `=`. Both sides are trimmed. If the value
//! is at least two characters long and both starts and ends with `"`, that one
//! pair of quotes is removed:
//!
//! ```text
//! name = "localhost"    → localhost
//! port = 8080           → 8080
//! empty =               → (empty string)
//! quoted = ""a""        → "a"
//! url = a=b             → a=b
//! ```
//!
//! A line whose key is empty after trimming (`= value`) is skipped.
//!
//! # Merging
//!
//! - A key seen twice in the same section keeps its last value.
//! - A header seen twice continues the same section; entries from both
//!   places are merged.
//!
//! ```text
//! [server]
//! host = "localhost"
//! [server]
//! timeout = 30
//! ```
//!
//! yields one `server` section with `host` and `timeout`.
//!
//! # Ordering
//!
//! Sections are ordered by name and keys by key, lexicographically by byte
//! value. Source order is not kept.
//!
//! # CSV layout
//!
//! ```text
//! section,key,value
//! ,title,Example
//! server,host,localhost
//! server,port,8080
//! ```
//!
//! - Header row `section,key,value`
//! - One row per entry, section-major then key-minor
//! - Fields are written verbatim by default. A value containing `,` or `"`
//!   yields a row that is not valid CSV. Use
//!   [`Quoting::Rfc4180`](crate::Quoting::Rfc4180) to quote such fields.
