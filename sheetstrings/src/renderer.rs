//! Rendering of one language's entries into a platform document.
//!
//! Entries are folded in order into a body of comment and translation lines, and the
//! body is substituted into the platform's document template. By default every cell
//! is inserted verbatim; [`RenderOptions::escape`] opts into escaping for the target
//! format.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

use crate::{
    options::RenderOptions,
    platform::Platform,
    types::{Entry, RenderedDocument},
};

/// Renders `entries` for `platform` without escaping.
pub fn render(platform: Platform, entries: &[Entry]) -> String {
    render_with_options(platform, entries, &RenderOptions::default())
}

pub fn render_with_options(platform: Platform, entries: &[Entry], options: &RenderOptions) -> String {
    let profile = platform.profile();
    let body = entries.iter().fold(String::new(), |mut body, entry| {
        let line = match entry {
            Entry::Comment { text } => interpolate(
                profile.comment_template,
                &[("text", &*escape_comment(platform, text, options.escape))],
            ),
            Entry::Translation { key, value } => interpolate(
                profile.translation_template,
                &[
                    ("key", &*escape_key(platform, key, options.escape)),
                    ("value", &*escape_value(platform, value, options.escape)),
                ],
            ),
        };
        body.push_str(&line);
        body
    });
    interpolate(profile.document_template, &[("content", &body)])
}

/// Renders `entries` and places the result at the platform's path for `language`.
pub fn render_document(
    platform: Platform,
    language: &str,
    entries: &[Entry],
    options: &RenderOptions,
) -> RenderedDocument {
    let profile = platform.profile();
    let directory = interpolate(profile.directory_template, &[("language", language)]);
    RenderedDocument {
        language: Some(language.to_string()),
        directory: options.output_root.join(directory),
        file_name: profile.file_name.to_string(),
        content: render_with_options(platform, entries, options),
    }
}

/// Replaces each `{name}` in `template` whose name is in `vars`, in a single pass.
///
/// Substituted text is never rescanned, and braces that do not form a known
/// placeholder are copied through unchanged.
pub(crate) fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let substitution = tail.find('}').and_then(|end| {
            let name = &tail[..end];
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| (*value, end))
        });
        match substitution {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_key(platform: Platform, key: &str, enabled: bool) -> Cow<'_, str> {
    match (enabled, platform) {
        (false, _) => Cow::Borrowed(key),
        (true, Platform::Ios) => escape_strings_literal(key),
        (true, Platform::Android) => escape(key),
    }
}

fn escape_value(platform: Platform, value: &str, enabled: bool) -> Cow<'_, str> {
    match (enabled, platform) {
        (false, _) => Cow::Borrowed(value),
        (true, Platform::Ios) => escape_strings_literal(value),
        (true, Platform::Android) => escape_android_text(value),
    }
}

fn escape_comment(platform: Platform, text: &str, enabled: bool) -> Cow<'_, str> {
    match (enabled, platform) {
        (false, _) => Cow::Borrowed(text),
        (true, Platform::Ios) => Cow::Owned(text.replace(['\r', '\n'], " ")),
        // `--` may not appear inside an XML comment.
        (true, Platform::Android) if text.contains("--") => Cow::Owned(text.replace("--", "- -")),
        (true, Platform::Android) => Cow::Borrowed(text),
    }
}

/// Escapes a value for a double-quoted `.strings` literal.
fn escape_strings_literal(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c == '\\' || c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Escapes XML markup characters, then the quotes `aapt` treats specially.
fn escape_android_text(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if !escaped.contains(['\'', '"']) {
        return escaped;
    }
    let mut quoted = String::with_capacity(escaped.len() + 4);
    for c in escaped.chars() {
        if c == '\'' || c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    Cow::Owned(quoted)
}
