//! All error types for the sheetstrings crate.
//!
//! Structural problems in the sheet are not errors: they are reported as
//! [`crate::sheet::ParseWarning`]s. Everything here aborts a run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not fetch sheet: {0}")]
    Fetch(String),

    #[error("could not write `{}`: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown platform `{0}` (expected `ios` or `android`)")]
    UnknownPlatform(String),

    #[error("language `{0}` is not a column of the sheet")]
    UnknownLanguage(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch(message.into())
    }

    /// Creates a new persistence error for the document at `path`
    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Persist {
            path: path.into(),
            source,
        }
    }

    /// Creates a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_fetch_error() {
        let error = Error::fetch("https://example.com returned HTTP 404");
        assert_eq!(
            error.to_string(),
            "could not fetch sheet: https://example.com returned HTTP 404"
        );
    }

    #[test]
    fn test_persist_error_names_path_and_keeps_source() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::persist("output/en.lproj/Localizable.strings", source);
        let display = error.to_string();
        assert!(display.contains("output/en.lproj/Localizable.strings"));
        assert!(display.contains("denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_unknown_platform_error() {
        let error = Error::UnknownPlatform("windows".to_string());
        assert_eq!(
            error.to_string(),
            "unknown platform `windows` (expected `ios` or `android`)"
        );
    }

    #[test]
    fn test_unknown_language_error() {
        let error = Error::UnknownLanguage("de".to_string());
        assert_eq!(error.to_string(), "language `de` is not a column of the sheet");
    }

    #[test]
    fn test_config_error() {
        let error = Error::config("missing field");
        assert_eq!(error.to_string(), "configuration error: missing field");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownPlatform("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownPlatform"));
        assert!(debug.contains("test"));
    }
}
