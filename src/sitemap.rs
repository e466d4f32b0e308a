//! Sitemap entries
//!
//! The sitemap lists the site root, each locale's home page, and every
//! project page in both locales. Project pages are listed under the
//! `projects` route for every locale (`/es/projects/<slug>`,
//! `/en/projects/<slug>`), the path the project pages are served from.

use chrono::{DateTime, Utc};
use i18n::Locale;
use serde::Serialize;

/// Route that project pages are served under in every locale
const PROJECTS_SECTION: &str = "projects";

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Changes every week
    Weekly,
    /// Changes every month
    Monthly,
    /// Changes every year
    Yearly,
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute page URL
    pub url: String,
    /// Last modification time
    pub last_modified: DateTime<Utc>,
    /// Expected change frequency
    pub change_frequency: ChangeFrequency,
    /// Relative priority between 0.0 and 1.0
    pub priority: f32,
}

impl SitemapEntry {
    fn monthly(url: String, last_modified: DateTime<Utc>, priority: f32) -> Self {
        Self { url, last_modified, change_frequency: ChangeFrequency::Monthly, priority }
    }
}

/// Build the sitemap for `base_url` and the given project slugs
pub fn build_sitemap<S: AsRef<str>>(
    base_url: &str,
    project_slugs: &[S],
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    let mut entries = Vec::with_capacity(1 + Locale::ALL.len() * (1 + project_slugs.len()));

    entries.push(SitemapEntry::monthly(base_url.to_string(), last_modified, 1.0));
    for locale in Locale::ALL {
        entries.push(SitemapEntry::monthly(format!("{}/{}", base_url, locale), last_modified, 1.0));
    }

    for slug in project_slugs {
        for locale in Locale::ALL {
            entries.push(SitemapEntry::monthly(
                format!("{}/{}/{}/{}", base_url, locale, PROJECTS_SECTION, slug.as_ref()),
                last_modified,
                0.8,
            ));
        }
    }

    tracing::debug!(count = entries.len(), "built sitemap");
    entries
}
