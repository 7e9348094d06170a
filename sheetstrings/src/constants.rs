//! Generation of `LocalizableConstants.swift` for iOS projects.
//!
//! Every translation key becomes a Swift constant wrapping `NSLocalizedString`:
//!
//! ```swift
//! // User
//!
//! let kLocaleUserName: String = { return NSLocalizedString("user_name", comment: "") }()
//! ```
//!
//! Keys are grouped into sections by their first `_`-segment. Grouping follows the
//! sheet order: a prefix that reappears after a different one opens a new section.

use std::collections::HashSet;

use indoc::indoc;
use tracing::warn;

use crate::{
    options::RenderOptions,
    renderer::interpolate,
    types::{Entry, RenderedDocument},
};

/// File name of the generated constants file.
pub const CONSTANTS_FILE_NAME: &str = "LocalizableConstants.swift";

const CONSTANTS_TEMPLATE: &str = indoc! {"
    // Automatically Generated - DO NOT modify manually - use sheetstrings instead.

    // swiftlint:disable identifier_name
    // swiftlint:disable file_length

    import Foundation

    {content}

    // swiftlint:enable identifier_name
    // swiftlint:enable file_length
"};

/// Generates the constants listing for the entries of a reference language.
///
/// Only keys are used; comments and values are ignored.
pub fn generate(entries: &[Entry]) -> String {
    let mut content = String::new();
    let mut section: Option<&str> = None;
    let mut seen = HashSet::new();

    for key in entries.iter().filter_map(Entry::key) {
        if !seen.insert(key) {
            warn!(key, "duplicate key; the constants file will not compile");
        }
        let prefix = segments(key).next().unwrap_or_default();
        if section != Some(prefix) {
            content.push_str(&format!("\n// {}\n\n", section_name(key)));
            section = Some(prefix);
        }
        content.push_str(&format!(
            "let kLocale{}: String = {{ return NSLocalizedString(\"{}\", comment: \"\") }}()\n",
            symbol_name(key),
            key
        ));
    }

    interpolate(CONSTANTS_TEMPLATE, &[("content", &content)])
}

/// Generates the constants file at `{output_root}/LocalizableConstants.swift`.
pub fn generate_document(entries: &[Entry], options: &RenderOptions) -> RenderedDocument {
    RenderedDocument {
        language: None,
        directory: options.output_root.clone(),
        file_name: CONSTANTS_FILE_NAME.to_string(),
        content: generate(entries),
    }
}

/// `user_email` → `UserEmail`.
pub fn symbol_name(key: &str) -> String {
    segments(key).map(capitalize).collect()
}

/// `user_email` → `User`.
pub fn section_name(key: &str) -> String {
    segments(key).next().map(capitalize).unwrap_or_default()
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('_').filter(|segment| !segment.is_empty())
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
