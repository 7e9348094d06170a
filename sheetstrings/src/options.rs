//! Options for parsing a sheet and rendering its documents.

use std::path::PathBuf;

/// Row delimiter of a spreadsheet TSV export.
pub const ROW_DELIMITER: &str = "\r\n";
/// Column delimiter of a spreadsheet TSV export.
pub const COLUMN_DELIMITER: &str = "\t";
/// Default root directory of all rendered documents.
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Parse behavior options for [`crate::Sheet::parse_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Separator between rows. Defaults to CRLF.
    pub row_delimiter: String,
    /// Separator between cells of a row. Defaults to a tab.
    pub column_delimiter: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            row_delimiter: ROW_DELIMITER.to_string(),
            column_delimiter: COLUMN_DELIMITER.to_string(),
        }
    }
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row delimiter, e.g. `"\n"` for sheets saved by a text editor.
    pub fn with_row_delimiter(mut self, row_delimiter: impl Into<String>) -> Self {
        self.row_delimiter = row_delimiter.into();
        self
    }

    /// Sets the column delimiter.
    pub fn with_column_delimiter(mut self, column_delimiter: impl Into<String>) -> Self {
        self.column_delimiter = column_delimiter.into();
        self
    }
}

/// Render behavior options for [`crate::renderer`] and [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory all document paths are relative to. Defaults to `output`.
    pub output_root: PathBuf,
    /// Escape keys, values and comments for the target format.
    ///
    /// Off by default: cells are inserted verbatim, so the sheet itself must
    /// hold already-escaped text.
    pub escape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            escape: false,
        }
    }
}

impl RenderOptions {
    /// Creates default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output root directory.
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    /// Enables/disables escaping.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}
