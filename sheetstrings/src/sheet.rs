//! Parsing of a tab-separated translation sheet.
//!
//! The sheet is a spreadsheet export: rows separated by CRLF, cells by tabs, no
//! quoting. Anything above the `[key]` header row is ignored; the header row names
//! one language per column after the key column.
//!
//! ```text
//! My App strings
//! [key]       en          fr
//! [COMMENT]   Intro       Introduction
//! greeting    Hello       Bonjour
//! ```
//!
//! Parsing never fails. A missing header yields an empty sheet, and a row with fewer
//! cells than languages yields empty values plus a [`ParseWarning`].

use std::{
    fmt::{Display, Formatter},
    path::{Component, Path},
};

use serde::Serialize;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::{
    classifier::{HEADER_MARKER, RowKind, classify_rows},
    options::ParseOptions,
    platform::Platform,
    types::Entry,
};

/// A recoverable structural problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// A content row has no cell for a language column. The value was taken as empty.
    MissingCell {
        /// 1-based row number in the sheet.
        row: usize,
        /// First cell of the row.
        key: String,
        language: String,
        /// Number of cells the row actually has.
        cells: usize,
    },
    /// A content row has an empty key but text in other cells. The row was skipped.
    MissingKey {
        /// 1-based row number in the sheet.
        row: usize,
        /// Number of non-empty cells in the row.
        cells: usize,
    },
    /// A header cell is not a valid language identifier. The column is still rendered.
    UnrecognizedLanguage {
        /// 1-based column number in the sheet.
        column: usize,
        language: String,
    },
    /// A header cell is empty. The column was skipped.
    EmptyLanguage { column: usize },
    /// A header cell would place its document outside the output root. The column was skipped.
    UnsafeLanguage { column: usize, language: String },
    /// A header cell repeats an earlier language; both render to the same path.
    DuplicateLanguage { column: usize, language: String },
}

impl Display for ParseWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::MissingCell {
                row,
                key,
                language,
                cells,
            } => write!(
                f,
                "row {} (`{}`) has {} cell(s) and no value for `{}`; using an empty value",
                row, key, cells, language
            ),
            ParseWarning::MissingKey { row, cells } => write!(
                f,
                "row {} has {} non-empty cell(s) but no key; skipping it",
                row, cells
            ),
            ParseWarning::UnrecognizedLanguage { column, language } => write!(
                f,
                "column {} header `{}` is not a recognized language identifier",
                column, language
            ),
            ParseWarning::EmptyLanguage { column } => {
                write!(f, "column {} has an empty language header; skipping it", column)
            }
            ParseWarning::UnsafeLanguage { column, language } => write!(
                f,
                "column {} header `{}` is not usable as a directory name; skipping it",
                column, language
            ),
            ParseWarning::DuplicateLanguage { column, language } => write!(
                f,
                "column {} repeats language `{}`; its document overwrites the earlier one",
                column, language
            ),
        }
    }
}

/// A parsed sheet: the language columns and, for each of them, the ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    platform: Platform,
    languages: Vec<String>,
    /// Parallel to `languages`.
    entries: Vec<Vec<Entry>>,
    warnings: Vec<ParseWarning>,
}

/// A header cell kept as a language, with its index among the row's fields.
struct LanguageColumn {
    field: usize,
    language: String,
}

impl Sheet {
    /// Parses a spreadsheet export with the default delimiters.
    pub fn parse(raw: &str, platform: Platform) -> Self {
        Self::parse_with_options(raw, platform, &ParseOptions::default())
    }

    pub fn parse_with_options(raw: &str, platform: Platform, options: &ParseOptions) -> Self {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let rows: Vec<Vec<&str>> = raw
            .split(options.row_delimiter.as_str())
            .map(|row| row.split(options.column_delimiter.as_str()).collect())
            .collect();

        let mut warnings = Vec::new();
        let columns = find_languages(&rows, &mut warnings);
        if columns.is_empty() {
            debug!("no `{}` header row with languages found", HEADER_MARKER);
            for warning in &warnings {
                warn!("{}", warning);
            }
            return Sheet {
                platform,
                languages: Vec::new(),
                entries: Vec::new(),
                warnings,
            };
        }

        let kinds = classify_rows(rows.iter().map(Vec::as_slice), platform);
        let mut entries = vec![Vec::new(); columns.len()];
        for (index, (kind, fields)) in kinds.into_iter().zip(&rows).enumerate() {
            if kind == RowKind::Blank {
                let cells = fields.iter().filter(|cell| !cell.trim().is_empty()).count();
                if cells > 0 {
                    warnings.push(ParseWarning::MissingKey { row: index + 1, cells });
                }
                continue;
            }
            if !kind.produces_entry() {
                continue;
            }

            let key = fields.first().copied().unwrap_or_default();
            for (column, language) in columns.iter().enumerate() {
                let cell = match fields.get(language.field) {
                    Some(cell) => *cell,
                    None => {
                        warnings.push(ParseWarning::MissingCell {
                            row: index + 1,
                            key: key.to_string(),
                            language: language.language.clone(),
                            cells: fields.len(),
                        });
                        ""
                    }
                };
                let entry = match kind {
                    RowKind::Comment => Entry::comment(cell),
                    _ => Entry::translation(key, cell),
                };
                entries[column].push(entry);
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }
        debug!(
            languages = columns.len(),
            rows = entries.first().map_or(0, Vec::len),
            %platform,
            "parsed sheet"
        );

        Sheet {
            platform,
            languages: columns.into_iter().map(|column| column.language).collect(),
            entries,
            warnings,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Language identifiers in column order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Entries of the first column named `language`.
    pub fn entries_for(&self, language: &str) -> Option<&[Entry]> {
        self.languages
            .iter()
            .position(|l| l == language)
            .and_then(|index| self.entries.get(index))
            .map(Vec::as_slice)
    }

    /// Iterates `(language, entries)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.languages
            .iter()
            .map(String::as_str)
            .zip(self.entries.iter().map(Vec::as_slice))
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// `true` when the sheet has no language columns, i.e. nothing to generate.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Languages named by the first `[key]` row, with stray line-break characters removed.
///
/// Empty cells and cells that are not a single plain path segment are skipped with a
/// warning, since each language becomes a directory under the output root.
fn find_languages(rows: &[Vec<&str>], warnings: &mut Vec<ParseWarning>) -> Vec<LanguageColumn> {
    let Some(header) = rows.iter().find(|fields| fields.first() == Some(&HEADER_MARKER)) else {
        return Vec::new();
    };

    let mut columns: Vec<LanguageColumn> = Vec::with_capacity(header.len());
    for (field, cell) in header.iter().enumerate().skip(1) {
        let column = field + 1;
        let language = cell.replace(['\r', '\n'], "");
        if language.trim().is_empty() {
            warnings.push(ParseWarning::EmptyLanguage { column });
            continue;
        }
        if !is_path_segment(&language) {
            warnings.push(ParseWarning::UnsafeLanguage { column, language });
            continue;
        }
        if language.parse::<LanguageIdentifier>().is_err() {
            warnings.push(ParseWarning::UnrecognizedLanguage {
                column,
                language: language.clone(),
            });
        }
        if columns.iter().any(|kept| kept.language == language) {
            warnings.push(ParseWarning::DuplicateLanguage {
                column,
                language: language.clone(),
            });
        }
        columns.push(LanguageColumn { field, language });
    }
    columns
}

/// `true` when `name` is exactly one normal path component.
fn is_path_segment(name: &str) -> bool {
    !name.contains(['/', '\\'])
        && matches!(
            Path::new(name).components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&str]) -> String {
        rows.join("\r\n")
    }

    #[test]
    fn test_parse_languages_in_column_order() {
        let raw = sheet(&["[key]\ten\tfr\tde", "greeting\tHello\tBonjour\tHallo"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(parsed.languages(), ["en", "fr", "de"]);
        assert_eq!(
            parsed.entries_for("fr").unwrap(),
            [Entry::translation("greeting", "Bonjour")]
        );
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_missing_header_yields_empty_sheet() {
        let raw = sheet(&["greeting\tHello", "bye\tGoodbye"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert!(parsed.is_empty());
        assert_eq!(parsed.iter().count(), 0);
        assert_eq!(parsed.entries_for("Hello"), None);
    }

    #[test]
    fn test_empty_input_yields_empty_sheet() {
        let parsed = Sheet::parse("", Platform::Android);
        assert!(parsed.is_empty());
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_preamble_is_skipped() {
        let raw = sheet(&[
            "Translations for My App\t\t",
            "greeting\tnot\tcontent",
            "[key]\ten\tfr",
            "greeting\tHello\tBonjour",
        ]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            parsed.entries_for("en").unwrap(),
            [Entry::translation("greeting", "Hello")]
        );
    }

    #[test]
    fn test_comments_and_directives() {
        let raw = sheet(&[
            "[key]\ten\tfr",
            "[COMMENT]\tIntro\tIntroduction",
            "[NOTE]\tskip\tme",
            "greeting\tHello\tBonjour",
        ]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            parsed.entries_for("fr").unwrap(),
            [
                Entry::comment("Introduction"),
                Entry::translation("greeting", "Bonjour"),
            ]
        );
    }

    #[test]
    fn test_platform_rows_are_filtered() {
        let raw = sheet(&[
            "[key]\ten",
            "title_ios\tiOS title",
            "title_android\tAndroid title",
            "shared\tShared",
        ]);
        let ios = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            ios.entries_for("en").unwrap(),
            [
                Entry::translation("title_ios", "iOS title"),
                Entry::translation("shared", "Shared"),
            ]
        );
        let android = Sheet::parse(&raw, Platform::Android);
        assert_eq!(
            android.entries_for("en").unwrap(),
            [
                Entry::translation("title_android", "Android title"),
                Entry::translation("shared", "Shared"),
            ]
        );
    }

    #[test]
    fn test_short_row_yields_empty_value_and_warning() {
        let raw = sheet(&["[key]\ten\tfr", "greeting\tHello"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            parsed.entries_for("en").unwrap(),
            [Entry::translation("greeting", "Hello")]
        );
        assert_eq!(
            parsed.entries_for("fr").unwrap(),
            [Entry::translation("greeting", "")]
        );
        assert_eq!(
            parsed.warnings(),
            [ParseWarning::MissingCell {
                row: 2,
                key: "greeting".to_string(),
                language: "fr".to_string(),
                cells: 2,
            }]
        );
    }

    #[test]
    fn test_short_comment_row() {
        let raw = sheet(&["[key]\ten\tfr", "[COMMENT]"]);
        let parsed = Sheet::parse(&raw, Platform::Android);
        assert_eq!(parsed.entries_for("en").unwrap(), [Entry::comment("")]);
        assert_eq!(parsed.warnings().len(), 2);
    }

    #[test]
    fn test_trailing_row_delimiter_adds_no_entry() {
        let raw = "[key]\ten\r\ngreeting\tHello\r\n";
        let parsed = Sheet::parse(raw, Platform::Ios);
        assert_eq!(parsed.entries_for("en").unwrap().len(), 1);
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_empty_values_are_kept() {
        let raw = sheet(&["[key]\ten\tfr", "greeting\t\tBonjour"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            parsed.entries_for("en").unwrap(),
            [Entry::translation("greeting", "")]
        );
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let raw = "\u{feff}[key]\ten\r\ngreeting\tHello";
        let parsed = Sheet::parse(raw, Platform::Ios);
        assert_eq!(parsed.languages(), ["en"]);
    }

    #[test]
    fn test_language_line_breaks_are_removed() {
        let raw = "[key]\ten\tfr\r\r\ngreeting\tHello\tBonjour";
        let parsed = Sheet::parse(raw, Platform::Ios);
        assert_eq!(parsed.languages(), ["en", "fr"]);
    }

    #[test]
    fn test_custom_row_delimiter() {
        let raw = "[key]\ten\ngreeting\tHello\nbye\tGoodbye\n";
        let options = ParseOptions::new().with_row_delimiter("\n");
        let parsed = Sheet::parse_with_options(raw, Platform::Ios, &options);
        assert_eq!(
            parsed.entries_for("en").unwrap(),
            [
                Entry::translation("greeting", "Hello"),
                Entry::translation("bye", "Goodbye"),
            ]
        );
    }

    #[test]
    fn test_unrecognized_language_is_reported() {
        let raw = sheet(&["[key]\ten\tnot a language", "greeting\tHello\tHi"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(parsed.languages().len(), 2);
        assert_eq!(
            parsed.warnings(),
            [ParseWarning::UnrecognizedLanguage {
                column: 3,
                language: "not a language".to_string(),
            }]
        );
        assert_eq!(
            parsed.entries_for("not a language").unwrap(),
            [Entry::translation("greeting", "Hi")]
        );
    }

    #[test]
    fn test_iter_follows_column_order() {
        let raw = sheet(&["[key]\tfr\ten", "greeting\tBonjour\tHello"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        let languages: Vec<&str> = parsed.iter().map(|(language, _)| language).collect();
        assert_eq!(languages, ["fr", "en"]);
    }

    #[test]
    fn test_warning_display() {
        let warning = ParseWarning::MissingCell {
            row: 4,
            key: "greeting".to_string(),
            language: "fr".to_string(),
            cells: 2,
        };
        assert_eq!(
            warning.to_string(),
            "row 4 (`greeting`) has 2 cell(s) and no value for `fr`; using an empty value"
        );
    }

    #[test]
    fn test_trailing_empty_language_is_skipped() {
        let raw = sheet(&["[key]\ten\t", "greeting\tHello\t"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(parsed.languages(), ["en"]);
        assert_eq!(parsed.warnings(), [ParseWarning::EmptyLanguage { column: 3 }]);
    }

    #[test]
    fn test_languages_that_are_not_a_path_segment_are_skipped() {
        let raw = sheet(&[
            "[key]\t/tmp/evil\ten\t../../outside\t..\tfr\\de",
            "greeting\tA\tHello\tB\tC\tD",
        ]);
        let parsed = Sheet::parse(&raw, Platform::Android);
        assert_eq!(parsed.languages(), ["en"]);
        assert_eq!(
            parsed.entries_for("en").unwrap(),
            [Entry::translation("greeting", "Hello")]
        );
        let skipped: Vec<usize> = parsed
            .warnings()
            .iter()
            .filter_map(|warning| match warning {
                ParseWarning::UnsafeLanguage { column, .. } => Some(*column),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, [2, 4, 5, 6]);
    }

    #[test]
    fn test_skipped_column_keeps_later_columns_aligned() {
        let raw = sheet(&["[key]\ten\t\tfr", "greeting\tHello\tstray\tBonjour"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(
            parsed.entries_for("fr").unwrap(),
            [Entry::translation("greeting", "Bonjour")]
        );
    }

    #[test]
    fn test_duplicate_language_is_reported() {
        let raw = sheet(&["[key]\ten\ten", "greeting\tHello\tHi"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(parsed.languages(), ["en", "en"]);
        assert_eq!(
            parsed.warnings(),
            [ParseWarning::DuplicateLanguage {
                column: 3,
                language: "en".to_string(),
            }]
        );
    }

    #[test]
    fn test_blank_key_with_cells_is_reported() {
        let raw = sheet(&["[key]\ten\tfr", "\tstray\tcells", "\t\t", "greeting\tHello\tBonjour"]);
        let parsed = Sheet::parse(&raw, Platform::Ios);
        assert_eq!(parsed.entries_for("en").unwrap().len(), 1);
        assert_eq!(parsed.warnings(), [ParseWarning::MissingKey { row: 2, cells: 2 }]);
    }
}
