//! CMS SEO records in, page metadata out.

use crate::seo::{process_keywords, LanguageUrls, SeoLimits};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Per-page SEO fields as delivered by the CMS.
///
/// Every field is optional on the wire; missing values default to empty
/// strings, `None` or `false` here, at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoRecord {
    pub meta_title: String,
    pub meta_description: String,
    /// Comma-separated keywords
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    /// Absolute URL overriding the derived canonical URL
    pub canonical: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
}

impl SeoRecord {
    /// Fill empty title/description with page-supplied fallbacks.
    pub fn with_fallbacks(mut self, title: Option<&str>, description: Option<&str>) -> Self {
        if self.meta_title.trim().is_empty() {
            if let Some(title) = title {
                self.meta_title = title.to_string();
            }
        }
        if self.meta_description.trim().is_empty() {
            if let Some(description) = description {
                self.meta_description = description.to_string();
            }
        }
        self
    }
}

/// An SEO record after validation and coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedSeo {
    pub title: String,
    pub description: String,
    /// `None` when the record had no keyword string at all
    pub keywords: Option<Vec<String>>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub canonical: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
    pub warnings: Vec<String>,
}

/// Validate and coerce a CMS record. Never fails.
pub fn process_seo_record(record: &SeoRecord, limits: &SeoLimits) -> ProcessedSeo {
    let title = limits.validate_title(&record.meta_title);
    let description = limits.validate_description(&record.meta_description);

    let keywords = record
        .keywords
        .as_deref()
        .filter(|csv| !csv.is_empty())
        .map(|csv| process_keywords(csv, limits.keywords_max));

    let mut warnings = title.warnings;
    warnings.extend(description.warnings);

    ProcessedSeo {
        title: title.value,
        description: description.value,
        keywords,
        og_image: non_empty(&record.og_image),
        twitter_image: non_empty(&record.twitter_image),
        canonical: non_empty(&record.canonical),
        no_index: record.no_index,
        no_follow: record.no_follow,
        warnings,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Alternate URLs of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternates {
    pub canonical: String,
    pub languages: LanguageUrls,
    pub x_default: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: &'static str,
    pub alternate_locale: Vec<&'static str>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Indexing directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

/// Metadata object handed to the page-rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub warnings: Vec<String>,
}

/// Log advisory warnings for a page. Rendering continues regardless.
pub fn log_warnings(path: &str, warnings: &[String]) {
    for warning in warnings {
        warn!("SEO warning for {}: {}", path, warning);
    }
}
