//! Core types shared by the parser, the renderer and the constants generator.

use std::path::PathBuf;

use serde::Serialize;

/// One content row of the sheet, projected onto a single language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// A `[COMMENT]` row; the text is the cell of the language's column.
    Comment { text: String },
    /// A translation row; the key is the first cell, the value the language's cell.
    Translation { key: String, value: String },
}

impl Entry {
    pub fn comment(text: impl Into<String>) -> Self {
        Entry::Comment { text: text.into() }
    }

    pub fn translation(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::Translation {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The translation key, or `None` for comments.
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Translation { key, .. } => Some(key),
            Entry::Comment { .. } => None,
        }
    }

    pub fn is_translation(&self) -> bool {
        matches!(self, Entry::Translation { .. })
    }
}

/// A fully rendered output file, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Language the document was rendered for; `None` for the constants file.
    pub language: Option<String>,
    /// Directory the document belongs in.
    pub directory: PathBuf,
    /// File name inside `directory`.
    pub file_name: String,
    /// Complete file content.
    pub content: String,
}

impl RenderedDocument {
    /// Full destination path (`directory` joined with `file_name`).
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}
