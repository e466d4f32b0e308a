//! Supported locales and language negotiation

use fluent_langneg::{convert_vec_str_to_langids_lossy, negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Locale errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The string is not one of the supported locale codes
    #[error("Unsupported locale: {0}")]
    Unsupported(String),
}

/// A locale the site is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (default)
    #[default]
    Es,
    /// English
    En,
}

impl Locale {
    /// Every supported locale, default first
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// The path segment / language code for this locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// The other supported locale
    pub fn other(&self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// Language identifier for negotiation and `lang` attributes
    pub fn langid(&self) -> LanguageIdentifier {
        self.as_str().parse().unwrap_or_default()
    }

    /// Locale named by the first segment of `path`
    ///
    /// Falls back to the default locale when the segment is missing or is not
    /// a supported locale code.
    pub fn from_path(path: &str) -> Locale {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| segment.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}

/// Pick the best supported locale for a list of requested language tags
///
/// `requested` is in preference order, e.g. parsed from `Accept-Language` or
/// the operating system's language list. Tags that fail to parse are
/// skipped. Returns the default locale when nothing matches.
pub fn negotiate_locale<S: AsRef<str>>(requested: &[S]) -> Locale {
    let requested =
        convert_vec_str_to_langids_lossy(requested.iter().map(|tag| AsRef::<str>::as_ref(tag)));
    let available: Vec<LanguageIdentifier> = Locale::ALL.iter().map(Locale::langid).collect();
    let default = Locale::default().langid();

    let supported = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Lookup,
    );

    let locale = supported
        .first()
        .and_then(|langid| Locale::ALL.into_iter().find(|l| l.langid() == **langid))
        .unwrap_or_default();
    tracing::debug!(%locale, "negotiated locale");
    locale
}
