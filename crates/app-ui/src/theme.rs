//! Theme values and their display attributes
//!
//! The site has three visual themes. Every themed element derives its CSS
//! classes from the active [`ThemeValue`] through [`attributes_for`], so no
//! component carries its own theme switch.
//!
//! # Themes
//!
//! - Light: warm off-white background, dark grey text
//! - Medium: mint background with wine accents
//! - Dark: near-black background, white text
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{attributes_for, ThemeValue};
//!
//! let attrs = attributes_for(ThemeValue::Medium);
//! assert_eq!(attrs.background, "bg-theme-medium");
//! assert_eq!(attrs.accent, "bg-[#7c3a43]");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a theme name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme: {0}")]
pub struct UnknownTheme(pub String);

// =============================================================================
// Theme Value
// =============================================================================

/// One of the three site themes
///
/// The discriminants are the ordinals written to client storage. The default
/// is the theme assumed before the client has resolved one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeValue {
    /// Light theme
    Light = 0,
    /// Medium theme
    Medium = 1,
    /// Dark theme
    #[default]
    Dark = 2,
}

impl ThemeValue {
    /// All themes in slider order
    pub const ALL: [ThemeValue; 3] = [ThemeValue::Light, ThemeValue::Medium, ThemeValue::Dark];

    /// Storage ordinal (0, 1, 2)
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Theme for a storage ordinal
    pub fn from_ordinal(ordinal: u8) -> Option<ThemeValue> {
        match ordinal {
            0 => Some(ThemeValue::Light),
            1 => Some(ThemeValue::Medium),
            2 => Some(ThemeValue::Dark),
            _ => None,
        }
    }

    /// Parse the persisted form, a decimal ordinal such as `"2"`
    ///
    /// Surrounding whitespace is ignored; anything that is not an integer
    /// ordinal of a theme is rejected.
    pub fn from_ordinal_str(s: &str) -> Option<ThemeValue> {
        s.trim().parse::<u8>().ok().and_then(Self::from_ordinal)
    }

    /// The persisted form of this theme
    pub fn to_ordinal_string(self) -> String {
        self.ordinal().to_string()
    }

    /// Lowercase theme name
    pub fn name(self) -> &'static str {
        match self {
            ThemeValue::Light => "light",
            ThemeValue::Medium => "medium",
            ThemeValue::Dark => "dark",
        }
    }

    /// Check if this is the dark theme
    pub fn is_dark(self) -> bool {
        self == ThemeValue::Dark
    }

    /// Theme matching an operating-system colour-scheme preference
    pub fn from_prefers_dark(prefers_dark: bool) -> ThemeValue {
        if prefers_dark {
            ThemeValue::Dark
        } else {
            ThemeValue::Light
        }
    }

    /// Display attributes for this theme
    pub fn attributes(self) -> &'static ThemeAttributes {
        attributes_for(self)
    }
}

impl std::fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeValue::Light => write!(f, "Light"),
            ThemeValue::Medium => write!(f, "Medium"),
            ThemeValue::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeValue {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeValue::Light),
            "medium" => Ok(ThemeValue::Medium),
            "dark" => Ok(ThemeValue::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

// =============================================================================
// Theme Attributes
// =============================================================================

/// CSS classes a themed element draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeAttributes {
    /// Theme name ("light", "medium", "dark")
    pub name: &'static str,
    /// Page background class
    pub background: &'static str,
    /// Body text class
    pub text: &'static str,
    /// Headline / primary text class
    pub primary: &'static str,
    /// Secondary text class
    pub secondary: &'static str,
    /// Accent fill class
    pub accent: &'static str,
}

/// Light theme attributes
pub const LIGHT: ThemeAttributes = ThemeAttributes {
    name: "light",
    background: "bg-theme-light",
    text: "text-black",
    primary: "text-gray-900",
    secondary: "text-gray-700",
    accent: "bg-gray-800",
};

/// Medium theme attributes
pub const MEDIUM: ThemeAttributes = ThemeAttributes {
    name: "medium",
    background: "bg-theme-medium",
    text: "text-black",
    primary: "text-[#7c3a43]",
    secondary: "text-[#7c3a43]",
    accent: "bg-[#7c3a43]",
};

/// Dark theme attributes
pub const DARK: ThemeAttributes = ThemeAttributes {
    name: "dark",
    background: "bg-theme-dark",
    text: "text-white",
    primary: "text-white",
    secondary: "text-gray-300",
    accent: "bg-white",
};

/// Attributes served before the client has resolved its theme
///
/// Server-rendered markup and the first client render must agree, so these
/// never depend on storage or the OS. They are the dark look on a plain black
/// background.
pub const FALLBACK: ThemeAttributes = ThemeAttributes {
    name: "dark",
    background: "bg-black",
    text: "text-white",
    primary: "text-white",
    secondary: "text-gray-300",
    accent: "bg-white",
};

/// Get the attributes of a theme
pub fn attributes_for(theme: ThemeValue) -> &'static ThemeAttributes {
    match theme {
        ThemeValue::Light => &LIGHT,
        ThemeValue::Medium => &MEDIUM,
        ThemeValue::Dark => &DARK,
    }
}
