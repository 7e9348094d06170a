//! Row classification.
//!
//! Rows are classified in sheet order by a [`RowClassifier`], which carries the
//! only sequential state of the whole pipeline: whether the `[key]` header row
//! has been seen yet.

use tracing::trace;

use crate::platform::Platform;

/// First cell of the header row. Everything above it is preamble.
pub const HEADER_MARKER: &str = "[key]";
/// First cell of a comment row.
pub const COMMENT_MARKER: &str = "[COMMENT]";
/// A first cell containing this character is a directive, never a key.
pub const DIRECTIVE_PREFIX: char = '[';

/// What a single row contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// The key contains the ignore-key of the current platform.
    Excluded,
    /// A row above the header.
    BeforeStart,
    /// The `[key]` header row, which starts the content.
    Header,
    /// A `[COMMENT]` row.
    Comment,
    /// A `[...]` directive row other than `[COMMENT]`.
    Ignored,
    /// A content row with an empty key cell.
    Blank,
    /// A key/value row.
    Translation,
}

impl RowKind {
    /// Whether rows of this kind produce an [`crate::Entry`].
    pub fn produces_entry(self) -> bool {
        matches!(self, RowKind::Comment | RowKind::Translation)
    }
}

/// Position of the scan relative to the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    BeforeHeader,
    InContent,
}

/// Classifies the rows of one sheet for one platform, in order.
#[derive(Debug, Clone)]
pub struct RowClassifier {
    platform: Platform,
    state: ScanState,
}

impl RowClassifier {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Classifies the next row. `fields` are the row's cells, key first.
    pub fn classify(&mut self, fields: &[&str]) -> RowKind {
        let first = fields.first().copied().unwrap_or_default();
        let kind = self.classify_key(first);
        trace!(key = first, ?kind, "classified row");
        kind
    }

    fn classify_key(&mut self, first: &str) -> RowKind {
        if first.contains(self.platform.ignore_key()) {
            return RowKind::Excluded;
        }
        if first == HEADER_MARKER {
            self.state = ScanState::InContent;
            return RowKind::Header;
        }
        match self.state {
            ScanState::BeforeHeader => RowKind::BeforeStart,
            ScanState::InContent if first == COMMENT_MARKER => RowKind::Comment,
            ScanState::InContent if first.contains(DIRECTIVE_PREFIX) => RowKind::Ignored,
            ScanState::InContent if first.trim().is_empty() => RowKind::Blank,
            ScanState::InContent => RowKind::Translation,
        }
    }
}

/// Classifies every row of a sheet in order.
pub fn classify_rows<'a, 'b: 'a, I>(rows: I, platform: Platform) -> Vec<RowKind>
where
    I: IntoIterator<Item = &'a [&'b str]>,
{
    let mut classifier = RowClassifier::new(platform);
    rows.into_iter().map(|row| classifier.classify(row)).collect()
}
