//! Configuration options for CSV export.
//!
//! - [`CsvOptions`]: main configuration struct
//! - [`Delimiter`]: field separator (comma, tab, or pipe)
//! - [`Quoting`]: whether fields are written raw or RFC 4180 quoted
//!
//! The defaults produce the classic `section,key,value` export: comma
//! separated, header row included, fields written verbatim.
//!
//! ## Examples
//!
//! ```rust
//! use flat_toml::{from_str, to_csv_string_with_options, CsvOptions, Delimiter};
//!
//! let doc = from_str("[db]\nhost = local");
//! let options = CsvOptions::new().with_delimiter(Delimiter::Tab);
//! let csv = to_csv_string_with_options(&doc, &options);
//! assert_eq!(csv, "section\tkey\tvalue\ndb\thost\tlocal\n");
//! ```

/// Field separator for CSV rows.
///
/// # Examples
///
/// ```rust
/// use flat_toml::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

/// How field text is written into a row.
///
/// [`Quoting::Raw`] is the default and writes every field exactly as parsed.
/// A value containing the delimiter or a double quote then yields a row that
/// common CSV readers will split differently. [`Quoting::Rfc4180`] opts into
/// quoting such fields and doubling inner quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quoting {
    #[default]
    Raw,
    Rfc4180,
}

/// Configuration options for CSV export.
///
/// # Examples
///
/// ```rust
/// use flat_toml::{CsvOptions, Delimiter, Quoting};
///
/// let options = CsvOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_quoting(Quoting::Rfc4180)
///     .with_header(false);
/// assert!(!options.header);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
    pub quoting: Quoting,
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: Delimiter::default(),
            quoting: Quoting::default(),
            header: true,
        }
    }
}

impl CsvOptions {
    /// Creates default options (comma delimiter, raw fields, header row).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flat_toml::{CsvOptions, Delimiter, Quoting};
    ///
    /// let options = CsvOptions::new();
    /// assert_eq!(options.delimiter, Delimiter::Comma);
    /// assert_eq!(options.quoting, Quoting::Raw);
    /// assert!(options.header);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quoting policy.
    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Enables or disables the `section,key,value` header row.
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}
