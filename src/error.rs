//! Error types for parsing and exporting flat TOML documents.
//!
//! Only I/O can fail. A line the dialect does not understand is never an
//! error: it is classified as [`Line::Unrecognized`](crate::Line::Unrecognized)
//! and dropped.
//!
//! ## Error Categories
//!
//! - **Source errors**: the input could not be opened or read
//! - **Destination errors**: the CSV or diagram file could not be created or written
//!
//! ## Examples
//!
//! ```rust
//! use flat_toml::{from_path, Error};
//!
//! let result = from_path("/definitely/not/here.toml");
//! assert!(matches!(result, Err(Error::SourceUnreadable { .. })));
//! ```

use std::path::Path;
use thiserror::Error;

/// Represents all possible errors raised while reading a document or writing
/// its exports.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input path does not exist or cannot be opened for reading.
    #[error("Cannot open file: {path}: {msg}")]
    SourceUnreadable { path: String, msg: String },

    /// An output path cannot be created for writing.
    #[error("Cannot create file: {path}: {msg}")]
    DestinationUnwritable { path: String, msg: String },

    /// Reading failed part way through the source (e.g. invalid UTF-8).
    #[error("Read error at line {line}: {msg}")]
    Read { line: usize, msg: String },

    /// Writing failed after the destination was opened. Output already
    /// written stays on the destination.
    #[error("Write error: {0}")]
    Write(String),
}

impl Error {
    /// Creates an error for a source that cannot be opened.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flat_toml::Error;
    ///
    /// let err = Error::source_unreadable("config.toml", "No such file or directory");
    /// assert!(err.to_string().contains("config.toml"));
    /// ```
    pub fn source_unreadable(path: impl AsRef<Path>, msg: &str) -> Self {
        Error::SourceUnreadable {
            path: path.as_ref().display().to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an error for a destination that cannot be created.
    pub fn destination_unwritable(path: impl AsRef<Path>, msg: &str) -> Self {
        Error::DestinationUnwritable {
            path: path.as_ref().display().to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a read error for the 1-based `line` that could not be read.
    pub fn read(line: usize, msg: &str) -> Self {
        Error::Read {
            line,
            msg: msg.to_string(),
        }
    }

    /// Creates a write error.
    pub fn write(msg: &str) -> Self {
        Error::Write(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
