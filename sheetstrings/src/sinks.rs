//! Document sinks: the file system, or memory.

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::{error::Error, traits::DocumentSink, types::RenderedDocument};

/// Writes each document to its path, creating directories as needed.
#[derive(Debug, Clone, Default)]
pub struct FileSystemSink {
    written: Vec<PathBuf>,
}

impl FileSystemSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DocumentSink for FileSystemSink {
    fn persist(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        let path = document.path();
        fs::create_dir_all(&document.directory)
            .map_err(|e| Error::persist(&document.directory, e))?;
        fs::write(&path, document.content.as_bytes()).map_err(|e| Error::persist(&path, e))?;
        debug!(path = %path.display(), bytes = document.content.len(), "wrote document");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps documents in memory instead of writing them.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub documents: Vec<RenderedDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted document at `path`, if any.
    pub fn get(&self, path: impl Into<PathBuf>) -> Option<&RenderedDocument> {
        let path = path.into();
        self.documents.iter().find(|document| document.path() == path)
    }
}

impl DocumentSink for MemorySink {
    fn persist(&mut self, document: &RenderedDocument) -> Result<(), Error> {
        self.documents.push(document.clone());
        Ok(())
    }
}
