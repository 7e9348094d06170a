//! Sheet sources: a local file, an HTTP export URL, or text already in memory.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::blocking::Client;
use tracing::debug;

use crate::{error::Error, traits::SheetSource};

const TIMEOUT_SECS: u64 = 60;

/// Reads the sheet from a local file.
///
/// UTF-16 files with a byte-order mark are decoded to UTF-8; everything else is
/// passed through as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, Error> {
        let file = File::open(&self.path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;
        debug!(path = %self.path.display(), bytes = decoded.len(), "read sheet file");
        Ok(decoded)
    }
}

/// Downloads the sheet, e.g. a Google Sheets `export?format=tsv` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SheetSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        let response = client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(format!("{} returned HTTP {}", self.url, status)));
        }

        let text = response.text()?;
        debug!(url = %self.url, bytes = text.len(), "downloaded sheet");
        Ok(text)
    }
}

/// A sheet that is already in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SheetSource for InlineSource {
    fn location(&self) -> String {
        "<inline>".to_string()
    }

    fn fetch(&self) -> Result<String, Error> {
        Ok(self.text.clone())
    }
}

/// Picks the source for a command-line location: HTTP(S) URLs are downloaded,
/// anything else is read as a file path.
pub fn source_for(location: &str) -> Box<dyn SheetSource> {
    if is_url(location) {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

fn is_url(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
