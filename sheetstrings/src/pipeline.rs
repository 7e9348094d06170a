//! The end-to-end run: fetch, parse, render, generate, persist.
//!
//! Every document is rendered in memory before the first one is persisted, so a
//! failing sheet or reference language never leaves half an output tree behind.

use std::path::PathBuf;

use tracing::info;

use crate::{
    constants,
    error::Error,
    options::{ParseOptions, RenderOptions},
    platform::Platform,
    renderer,
    sheet::{ParseWarning, Sheet},
    traits::{DocumentSink, SheetSource},
    types::RenderedDocument,
};

/// Configured conversion of one sheet for one platform.
#[derive(Debug, Clone)]
pub struct Pipeline {
    platform: Platform,
    parse_options: ParseOptions,
    render_options: RenderOptions,
    reference_language: Option<String>,
}

/// Everything rendered from one sheet, not yet persisted.
#[derive(Debug, Clone)]
pub struct Generation {
    pub sheet: Sheet,
    /// One document per language in column order, then the constants file (iOS only).
    pub documents: Vec<RenderedDocument>,
}

impl Generation {
    pub fn warnings(&self) -> &[ParseWarning] {
        self.sheet.warnings()
    }
}

/// Outcome of [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub languages: Vec<String>,
    pub documents: Vec<PathBuf>,
    pub warnings: Vec<ParseWarning>,
}

impl Pipeline {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            reference_language: None,
        }
    }

    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }

    pub fn with_render_options(mut self, render_options: RenderOptions) -> Self {
        self.render_options = render_options;
        self
    }

    /// Language whose keys feed the constants file. Defaults to the first column.
    pub fn with_reference_language(mut self, language: Option<String>) -> Self {
        self.reference_language = language;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Parses `raw` and renders every document in memory.
    ///
    /// A sheet without a header renders nothing. The only error is a reference
    /// language that is not a column of the sheet.
    pub fn render(&self, raw: &str) -> Result<Generation, Error> {
        let sheet = Sheet::parse_with_options(raw, self.platform, &self.parse_options);

        let mut documents: Vec<RenderedDocument> = sheet
            .iter()
            .map(|(language, entries)| {
                renderer::render_document(self.platform, language, entries, &self.render_options)
            })
            .collect();

        if self.platform.generates_constants() && !sheet.is_empty() {
            let entries = match &self.reference_language {
                Some(language) => sheet
                    .entries_for(language)
                    .ok_or_else(|| Error::UnknownLanguage(language.clone()))?,
                None => sheet.iter().next().map(|(_, entries)| entries).unwrap_or_default(),
            };
            documents.push(constants::generate_document(entries, &self.render_options));
        }

        Ok(Generation { sheet, documents })
    }

    /// Fetches the sheet from `source`, renders it and persists every document to `sink`.
    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> Result<Report, Error>
    where
        S: SheetSource + ?Sized,
        K: DocumentSink,
    {
        let raw = source.fetch()?;
        let generation = self.render(&raw)?;
        sink.persist_all(&generation.documents)?;

        info!(
            source = %source.location(),
            platform = %self.platform,
            languages = generation.sheet.languages().len(),
            documents = generation.documents.len(),
            warnings = generation.warnings().len(),
            "generated localization files"
        );

        Ok(Report {
            languages: generation.sheet.languages().to_vec(),
            documents: generation.documents.iter().map(RenderedDocument::path).collect(),
            warnings: generation.warnings().to_vec(),
        })
    }
}
