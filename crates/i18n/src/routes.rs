//! Route translation between locales
//!
//! Site paths look like `/<locale>/<section>/<rest...>`. Switching language
//! swaps the locale segment and translates the section name through a static
//! dictionary; everything after the section is left untouched.
//!
//! ```rust
//! use i18n::{translate_route, Locale};
//!
//! assert_eq!(
//!     translate_route("/es/proyectos/beyourmotorbike", Locale::En),
//!     "/en/projects/beyourmotorbike"
//! );
//! ```
//!
//! Unknown sections pass through verbatim, as do names that are identical in
//! both languages; the two cases are not distinguished.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::locale::Locale;

/// Section names as `(english, spanish)` pairs
const SITE_SECTIONS: &[(&str, &str)] = &[
    ("projects", "proyectos"),
    ("why-ferbperdomo", "por-que-ferbperdomo"),
];

/// A path split into locale, section, and remainder segments
///
/// Separators are collapsed: empty segments (leading, trailing, or doubled
/// slashes) are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathComponents<'a> {
    /// First segment, assumed to be the current locale (not validated)
    pub locale: Option<&'a str>,
    /// Second segment, the section name
    pub section: Option<&'a str>,
    /// Every segment after the section, in order
    pub remainder: Vec<&'a str>,
}

impl<'a> PathComponents<'a> {
    /// Decompose `path`
    pub fn parse(path: &'a str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let locale = segments.next();
        let section = segments.next();
        let remainder = segments.collect();

        Self { locale, section, remainder }
    }

    /// The remainder joined back with separators, or `None` when empty
    pub fn rest(&self) -> Option<String> {
        if self.remainder.is_empty() {
            None
        } else {
            Some(self.remainder.join("/"))
        }
    }
}

/// Bidirectional dictionary of section names
///
/// For each locale, the table maps a section name in the *other* locale to the
/// name used in *this* locale. The two tables are expected to be mutual
/// inverses; [`RouteMapping::is_mutually_inverse`] checks it, nothing enforces
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMapping {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl RouteMapping {
    /// Empty mapping; every section passes through unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping built from `(english, spanish)` section pairs
    pub fn from_pairs<E, S>(pairs: impl IntoIterator<Item = (E, S)>) -> Self
    where
        E: Into<String>,
        S: Into<String>,
    {
        let mut mapping = Self::new();
        for (en, es) in pairs {
            let (en, es) = (en.into(), es.into());
            mapping.insert(Locale::Es, en.clone(), es.clone());
            mapping.insert(Locale::En, es, en);
        }
        mapping
    }

    /// The site's section dictionary
    pub fn site() -> &'static RouteMapping {
        static SITE: OnceLock<RouteMapping> = OnceLock::new();
        SITE.get_or_init(|| RouteMapping::from_pairs(SITE_SECTIONS.iter().copied()))
    }

    /// Add one entry to `locale`'s table: `from` (other locale) → `to` (this locale)
    pub fn insert(&mut self, locale: Locale, from: impl Into<String>, to: impl Into<String>) {
        self.tables
            .entry(locale)
            .or_default()
            .insert(from.into(), to.into());
    }

    /// Look `name` up in `locale`'s table
    pub fn lookup(&self, locale: Locale, name: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(name))
            .map(String::as_str)
    }

    /// Section names that belong to `locale`'s own vocabulary, sorted
    pub fn vocabulary(&self, locale: Locale) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .tables
            .get(&locale)
            .map(|table| table.values().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    /// Whether every `from → to` entry of one table has `to → from` in the other
    pub fn is_mutually_inverse(&self) -> bool {
        Locale::ALL.iter().all(|&locale| {
            self.tables.get(&locale).map_or(true, |table| {
                table
                    .iter()
                    .all(|(from, to)| self.lookup(locale.other(), to) == Some(from.as_str()))
            })
        })
    }

    /// Equivalent of `path` in `target`
    ///
    /// The first segment is discarded as the current locale without being
    /// checked. A path with no section becomes `/<target>`. The section is
    /// translated when `target`'s table knows it and passed through otherwise.
    pub fn translate_route(&self, path: &str, target: Locale) -> String {
        let components = PathComponents::parse(path);

        let Some(section) = components.section else {
            return format!("/{}", target);
        };

        let translated = match self.lookup(target, section) {
            Some(name) => name,
            None => {
                tracing::trace!(section, %target, "no section translation, passing through");
                section
            }
        };

        match components.rest() {
            Some(rest) => format!("/{}/{}/{}", target, translated, rest),
            None => format!("/{}/{}", target, translated),
        }
    }

    /// Name of route `name` in `locale`
    ///
    /// Names already in `locale`'s vocabulary come back unchanged; otherwise
    /// the table is consulted, and unknown names pass through.
    pub fn localized_route_name<'a>(&'a self, name: &'a str, locale: Locale) -> &'a str {
        if self.vocabulary(locale).contains(&name) {
            return name;
        }
        self.lookup(locale, name).unwrap_or(name)
    }
}

/// [`RouteMapping::translate_route`] over the site's dictionary
pub fn translate_route(path: &str, target: Locale) -> String {
    RouteMapping::site().translate_route(path, target)
}

/// [`RouteMapping::localized_route_name`] over the site's dictionary
pub fn localized_route_name(name: &str, locale: Locale) -> &str {
    RouteMapping::site().localized_route_name(name, locale)
}
