//! XML sitemap with per-locale alternates.

use crate::i18n::{Locale, PathLocalizer};
use crate::seo::{LanguageUrls, SiteUrls};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// A page listed in the sitemap, by canonical path.
#[derive(Debug, Clone, Copy)]
pub struct SitemapPage {
    pub path: &'static str,
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

const fn page(path: &'static str, priority: f32, change_frequency: ChangeFrequency) -> SitemapPage {
    SitemapPage {
        path,
        priority,
        change_frequency,
    }
}

pub const PAGES: &[SitemapPage] = &[
    page("/", 1.0, ChangeFrequency::Weekly),
    page("/about", 0.9, ChangeFrequency::Monthly),
    page("/outdoor-farm", 0.9, ChangeFrequency::Monthly),
    page("/indoor-farm", 0.9, ChangeFrequency::Monthly),
    page("/educational-activities", 0.8, ChangeFrequency::Monthly),
    page("/commercial-real-estate", 0.9, ChangeFrequency::Monthly),
    page("/corporations", 0.9, ChangeFrequency::Monthly),
    page("/schools", 0.8, ChangeFrequency::Monthly),
    page("/careers", 0.7, ChangeFrequency::Weekly),
    page("/partnerships", 0.7, ChangeFrequency::Monthly),
    page("/community-engagement", 0.7, ChangeFrequency::Monthly),
    page("/cities", 0.8, ChangeFrequency::Weekly),
    page("/contact", 0.6, ChangeFrequency::Monthly),
    page("/faq", 0.6, ChangeFrequency::Monthly),
    page("/blog", 0.7, ChangeFrequency::Daily),
    page("/roi-calculator", 0.8, ChangeFrequency::Monthly),
];

/// City detail pages, listed under `/cities/{slug}`.
pub const CITY_SLUGS: &[&str] = &[
    "montreal", "toronto", "vancouver", "calgary", "ottawa", "edmonton",
    "new-york", "chicago", "boston", "san-francisco", "los-angeles",
    "london", "paris", "berlin", "amsterdam", "brussels", "zurich",
    "madrid", "barcelona", "rome",
];

const CITY_PRIORITY: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: LanguageUrls,
}

/// One entry per (page, locale), each carrying the page's full alternate map.
pub fn build_sitemap(
    paths: &PathLocalizer<'_>,
    urls: &SiteUrls,
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let city_pages: Vec<(String, f32, ChangeFrequency)> = CITY_SLUGS
        .iter()
        .map(|city| (format!("/cities/{}", city), CITY_PRIORITY, ChangeFrequency::Monthly))
        .collect();

    let pages = PAGES
        .iter()
        .map(|p| (p.path.to_string(), p.priority, p.change_frequency))
        .chain(city_pages);

    let mut entries = Vec::new();
    for (path, priority, change_frequency) in pages {
        let alternates = urls.language_urls(&paths.alternates_for_canonical(&path, Locale::default()));

        for (_, url) in &alternates.0 {
            entries.push(SitemapEntry {
                url: url.clone(),
                last_modified,
                change_frequency,
                priority,
                alternates: alternates.clone(),
            });
        }
    }

    entries
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render entries as a sitemaps.org `urlset` with `xhtml:link` alternates.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    // Writing into a String cannot fail.
    for entry in entries {
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.url));
        for (locale, href) in &entry.alternates.0 {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                locale.code(),
                escape_xml(href)
            );
        }
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.change_frequency.as_str());
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>\n");
    xml
}
