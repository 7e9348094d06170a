//! Optional `sheetstrings.toml` settings, merged with command-line flags.
//!
//! ```toml
//! platform = "android"
//! output_dir = "app/src/main/res"
//! reference_language = "en"
//! escape = true
//! # Rows of an LF-only export; cells stay tab-separated by default.
//! row_delimiter = "\n"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sheetstrings::{Error, ParseOptions, Pipeline, Platform, RenderOptions};
use tracing::debug;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "sheetstrings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Strictly parsed, so a typo here is an error rather than iOS.
    pub platform: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub reference_language: Option<String>,
    pub escape: Option<bool>,
    /// Defaults to CRLF, the spreadsheet export format.
    pub row_delimiter: Option<String>,
    /// Defaults to a tab.
    pub column_delimiter: Option<String>,
}

/// Values given on the command line; each one that is set wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeArgs {
    pub platform: Option<Platform>,
    pub output_dir: Option<PathBuf>,
    pub reference_language: Option<String>,
    pub escape: Option<bool>,
    pub row_delimiter: Option<String>,
}

/// The settings of one run after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub platform: Platform,
    pub parse_options: ParseOptions,
    pub render_options: RenderOptions,
    pub reference_language: Option<String>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Reads the file at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `explicit` if given, else `sheetstrings.toml` from `dir` if present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, Error> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    pub fn merge(self, args: RuntimeArgs) -> Result<Settings, Error> {
        let platform = match (args.platform, self.platform.as_deref()) {
            (Some(platform), _) => platform,
            (None, Some(name)) => Platform::parse_strict(name)?,
            (None, None) => Platform::default(),
        };

        let mut parse_options = ParseOptions::new();
        if let Some(row_delimiter) = args.row_delimiter.or(self.row_delimiter) {
            parse_options = parse_options.with_row_delimiter(non_empty("row_delimiter", row_delimiter)?);
        }
        if let Some(column_delimiter) = self.column_delimiter {
            parse_options =
                parse_options.with_column_delimiter(non_empty("column_delimiter", column_delimiter)?);
        }

        let mut render_options = RenderOptions::new();
        if let Some(output_dir) = args.output_dir.or(self.output_dir) {
            render_options = render_options.with_output_root(output_dir);
        }
        if let Some(escape) = args.escape.or(self.escape) {
            render_options = render_options.with_escape(escape);
        }

        Ok(Settings {
            platform,
            parse_options,
            render_options,
            reference_language: args.reference_language.or(self.reference_language),
        })
    }
}

impl Settings {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.platform)
            .with_parse_options(self.parse_options.clone())
            .with_render_options(self.render_options.clone())
            .with_reference_language(self.reference_language.clone())
    }
}

fn non_empty(name: &str, delimiter: String) -> Result<String, Error> {
    if delimiter.is_empty() {
        Err(Error::config(format!("`{}` must not be empty", name)))
    } else {
        Ok(delimiter)
    }
}
