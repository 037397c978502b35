//! Language preference handling.
//!
//! Display helpers in this crate never read the process-wide locale on their
//! own; they take a [`Language`] as an explicit parameter so behavior stays
//! deterministic and testable. [`Language::from_env`] is the single place the
//! ambient environment is consulted.

use std::fmt;

/// A primary language subtag such as `"en"` or `"hi"`, lowercased.
///
/// The bilingual datasets only distinguish Hindi from everything else, but
/// the full tag is kept because the configuration document stores consent
/// texts under locale-suffixed keys for every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Tag that switches the bilingual display helpers to Hindi.
    pub const HINDI_TAG: &'static str = "hi";

    /// Creates a language preference from a tag, lowercasing ASCII.
    pub fn new(tag: impl Into<String>) -> Self {
        let mut tag = tag.into();
        tag.make_ascii_lowercase();
        Self(tag)
    }

    /// English, the fallback preference.
    pub fn english() -> Self {
        Self::new("en")
    }

    /// Hindi.
    pub fn hindi() -> Self {
        Self::new(Self::HINDI_TAG)
    }

    /// The lowercase language tag.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Whether this preference selects the Hindi side of the datasets.
    pub fn is_hindi(&self) -> bool {
        self.0 == Self::HINDI_TAG
    }

    /// Reads the current language from the environment.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order and keeps the
    /// primary subtag (`hi_IN.UTF-8` becomes `hi`). The `C` and `POSIX`
    /// locales, an empty value, or no value at all resolve to English.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|value| !value.is_empty()))
            .map(|value| Self::new(primary_subtag(&value)))
            .filter(|language| language.0 != "c" && language.0 != "posix")
            .unwrap_or_else(Self::english)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strips region and encoding from a POSIX locale value.
fn primary_subtag(value: &str) -> &str {
    value.split(['_', '-', '.']).next().unwrap_or(value)
}
