//! The two output platforms and the table of everything that differs between them.
//!
//! [`Platform`] selects the ignore-key, the line formats, the document template and
//! the output location. All of it lives in one static [`PlatformProfile`] per platform,
//! so the parser and renderer never branch on the platform themselves.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

use indoc::indoc;
use serde::Serialize;

use crate::error::Error;

/// The target platform of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple `Localizable.strings` plus the Swift constants file.
    #[default]
    Ios,
    /// Android `strings.xml`.
    Android,
}

/// Everything about the output format of one platform.
///
/// Templates use `{name}` placeholders which are filled by
/// [`crate::renderer::interpolate`] in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Rows whose key contains this substring belong to the *other* platform.
    pub ignore_key: &'static str,
    /// File name of the rendered document.
    pub file_name: &'static str,
    /// Directory of the rendered document relative to the output root; `{language}`.
    pub directory_template: &'static str,
    /// Line emitted for a comment row; `{text}`.
    pub comment_template: &'static str,
    /// Line emitted for a translation row; `{key}` and `{value}`.
    pub translation_template: &'static str,
    /// The whole document; `{content}` receives the rendered lines.
    pub document_template: &'static str,
}

const IOS_PROFILE: PlatformProfile = PlatformProfile {
    ignore_key: "_android",
    file_name: "Localizable.strings",
    directory_template: "{language}.lproj",
    comment_template: "\n// {text}\n\n",
    translation_template: "\"{key}\" = \"{value}\";\n",
    document_template: indoc! {"
        /*

        Automatically Generated - DO NOT modify manually - use sheetstrings instead.

        */

        {content}"},
};

const ANDROID_PROFILE: PlatformProfile = PlatformProfile {
    ignore_key: "_ios",
    file_name: "strings.xml",
    directory_template: "values-{language}",
    comment_template: "\n<!-- {text} -->\n",
    translation_template: "<string name=\"{key}\">{value}</string>\n",
    document_template: indoc! {r#"
        <?xml version="1.0" encoding="utf-8"?>
        <!--

        Automatically Generated - DO NOT modify manually - use sheetstrings instead.

        -->
        <resources>
        {content}
        </resources>
    "#},
};

impl Platform {
    /// Returns the static format table for this platform.
    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::Ios => &IOS_PROFILE,
            Platform::Android => &ANDROID_PROFILE,
        }
    }

    /// Substring marking a row as specific to the other platform.
    pub fn ignore_key(self) -> &'static str {
        self.profile().ignore_key
    }

    /// Whether this platform also gets a generated constants file.
    pub fn generates_constants(self) -> bool {
        matches!(self, Platform::Ios)
    }

    /// Strict parsing used for configuration files, where a typo should not
    /// silently fall back to iOS.
    ///
    /// # Example
    /// ```rust
    /// use sheetstrings::Platform;
    /// assert_eq!(Platform::parse_strict("Android").unwrap(), Platform::Android);
    /// assert_eq!(Platform::parse_strict("apple").unwrap(), Platform::Ios);
    /// assert!(Platform::parse_strict("windows").is_err());
    /// ```
    pub fn parse_strict(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "apple" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// Lenient parsing used for the command-line selector: `android` (any case)
/// selects Android, every other value selects iOS.
///
/// # Example
/// ```rust
/// use sheetstrings::Platform;
/// use std::str::FromStr;
/// assert_eq!(Platform::from_str("ANDROID").unwrap(), Platform::Android);
/// assert_eq!(Platform::from_str("ios").unwrap(), Platform::Ios);
/// assert_eq!(Platform::from_str("anything").unwrap(), Platform::Ios);
/// ```
impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("android") {
            Ok(Platform::Android)
        } else {
            Ok(Platform::Ios)
        }
    }
}
