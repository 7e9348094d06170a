#![forbid(unsafe_code)]
//! Turn a tab-separated translation sheet into localization files.
//!
//! A single spreadsheet holds every string of an app: one row per key, one column
//! per language. This crate parses the sheet's TSV export and renders, per
//! language, an Apple `Localizable.strings` or an Android `strings.xml`, plus a
//! Swift constants file for iOS projects.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sheetstrings::{FileSystemSink, Pipeline, Platform, sources::source_for};
//!
//! let source = source_for("https://docs.google.com/spreadsheets/d/ID/export?format=tsv");
//! let mut sink = FileSystemSink::new();
//! let report = Pipeline::new(Platform::Ios).run(&*source, &mut sink)?;
//! println!("wrote {} file(s)", report.documents.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Or work with the pieces directly:
//!
//! ```rust
//! use sheetstrings::{Platform, Sheet, renderer};
//!
//! let sheet = Sheet::parse("[key]\ten\r\ngreeting\tHello", Platform::Ios);
//! let rendered = renderer::render(Platform::Ios, sheet.entries_for("en").unwrap());
//! assert!(rendered.contains("\"greeting\" = \"Hello\";"));
//! ```
//!
//! # Sheet layout
//!
//! - Rows above the `[key]` header row are ignored.
//! - `[COMMENT]` rows become comments; other `[...]` rows are skipped.
//! - Keys containing `_android` are skipped for iOS, keys containing `_ios` for Android.

pub mod classifier;
pub mod constants;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod platform;
pub mod renderer;
pub mod sheet;
pub mod sinks;
pub mod sources;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    classifier::{RowClassifier, RowKind},
    error::Error,
    options::{ParseOptions, RenderOptions},
    pipeline::{Generation, Pipeline, Report},
    platform::Platform,
    sheet::{ParseWarning, Sheet},
    sinks::{FileSystemSink, MemorySink},
    traits::{DocumentSink, SheetSource},
    types::{Entry, RenderedDocument},
};
