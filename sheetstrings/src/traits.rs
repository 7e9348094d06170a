//! The two seams between the core and the outside world: where the sheet comes
//! from, and where rendered documents go.

use crate::{error::Error, types::RenderedDocument};

/// Produces the raw sheet text.
///
/// # Example
///
/// ```rust,no_run
/// use sheetstrings::{sources::FileSource, traits::SheetSource};
/// let raw = FileSource::new("translations.tsv").fetch()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SheetSource {
    /// Where the sheet is read from, for logs and messages.
    fn location(&self) -> String;

    /// Reads the whole sheet.
    fn fetch(&self) -> Result<String, Error>;
}

/// Accepts rendered documents.
pub trait DocumentSink {
    /// Persists one document.
    fn persist(&mut self, document: &RenderedDocument) -> Result<(), Error>;

    /// Persists documents in order, stopping at the first failure.
    ///
    /// Returns the number of documents persisted.
    fn persist_all<'a, I>(&mut self, documents: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = &'a RenderedDocument>,
        Self: Sized,
    {
        let mut count = 0;
        for document in documents {
            self.persist(document)?;
            count += 1;
        }
        Ok(count)
    }
}
