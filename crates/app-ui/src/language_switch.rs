//! Language switcher view-model
//!
//! The navbar shows one button per locale. The active one is filled with the
//! brand wine colour; inactive buttons are tinted to stay readable on the
//! current theme's background. Each button links to the current page in the
//! other language.

use i18n::{translate_route, Locale};
use serde::Serialize;

use crate::theme::ThemeValue;

/// One button of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    /// Locale this button switches to
    pub locale: Locale,
    /// Short visible label
    pub label: &'static str,
    /// Accessible label, written in the button's own language
    pub aria_label: &'static str,
    /// Path of the current page in `locale`
    pub href: String,
    /// Whether `locale` is the page's current locale
    pub active: bool,
    /// Button colour classes
    pub class: &'static str,
}

/// Colour classes for the current-locale button
pub fn active_button_class(_theme: ThemeValue) -> &'static str {
    "bg-primary-wine text-white"
}

/// Colour classes for the other-locale button
pub fn inactive_button_class(theme: ThemeValue) -> &'static str {
    match theme {
        ThemeValue::Light | ThemeValue::Medium => "text-primary-wine hover:bg-primary-wine/10",
        ThemeValue::Dark => "text-white hover:bg-white/20",
    }
}

fn labels(locale: Locale) -> (&'static str, &'static str) {
    match locale {
        Locale::Es => ("ES", "Cambiar a español"),
        Locale::En => ("EN", "Switch to English"),
    }
}

/// Switcher buttons for the page at `path`, in [`Locale::ALL`] order
pub fn language_options(path: &str, theme: ThemeValue) -> Vec<LanguageOption> {
    let current = Locale::from_path(path);

    Locale::ALL
        .iter()
        .map(|&locale| {
            let (label, aria_label) = labels(locale);
            let active = locale == current;
            LanguageOption {
                locale,
                label,
                aria_label,
                href: translate_route(path, locale),
                active,
                class: if active {
                    active_button_class(theme)
                } else {
                    inactive_button_class(theme)
                },
            }
        })
        .collect()
}
