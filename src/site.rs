//! The site context: everything metadata generation needs, built once at
//! start-up and shared read-only by every request.

use crate::config::Config;
use crate::i18n::{AlternateSet, Locale, PathLocalizer, SlugTable};
use crate::robots::{default_rules, render_robots_txt, RobotsRule};
use crate::routing::{route_request, RouteDecision};
use crate::seo::{
    article_schema, build_breadcrumbs, city_schema, faq_schema, log_warnings, process_seo_record,
    service_schema, site_schemas, web_page_schema, Alternates, BreadcrumbInput, BreadcrumbItem,
    OgImage, OgImageOptions, OpenGraph, PageMetadata, PageSchema, Robots, SeoLimits, SeoRecord,
    SiteUrls, TwitterCard,
};
use crate::sitemap::{build_sitemap, SitemapEntry};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Dimensions declared for CMS-supplied Open-Graph images.
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// A page's path and URL in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedPage {
    pub locale: Locale,
    pub canonical_path: String,
    pub path: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Site {
    name: String,
    slugs: SlugTable,
    urls: SiteUrls,
    limits: SeoLimits,
    robots: Vec<RobotsRule>,
}

impl Site {
    pub fn new(name: &str, origin: &str, slugs: SlugTable) -> Self {
        Self {
            name: name.to_string(),
            slugs,
            urls: SiteUrls::new(origin),
            limits: SeoLimits::default(),
            robots: default_rules(),
        }
    }

    /// Build the site from configuration, loading the slug table file if set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let slugs = match &config.slug_table_path {
            Some(path) => SlugTable::from_path(path)
                .with_context(|| format!("Failed to load slug table from {}", path))?,
            None => {
                info!("Using built-in slug table");
                SlugTable::builtin()
            }
        };

        Ok(Self::new(&config.site_name, &config.site_url, slugs))
    }

    pub fn with_limits(mut self, limits: SeoLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slugs(&self) -> &SlugTable {
        &self.slugs
    }

    pub fn urls(&self) -> &SiteUrls {
        &self.urls
    }

    pub fn limits(&self) -> &SeoLimits {
        &self.limits
    }

    pub fn paths(&self) -> PathLocalizer<'_> {
        PathLocalizer::new(&self.slugs)
    }

    /// Localize a canonical path for a raw (untrusted) locale string.
    pub fn localize(&self, raw_locale: &str, canonical_path: &str) -> LocalizedPage {
        let locale = Locale::resolve(raw_locale);
        let path = self.paths().localize_path(canonical_path, locale);

        LocalizedPage {
            locale,
            canonical_path: self.paths().canonicalize_path(&path, locale),
            url: self.urls.absolute(&path),
            path,
        }
    }

    /// Alternate set for the page currently at `localized_path`.
    ///
    /// A locale prefix in the path takes precedence over `raw_locale`.
    pub fn alternates(&self, raw_locale: &str, localized_path: &str) -> AlternateSet {
        self.paths()
            .alternate_links(localized_path, Locale::resolve(raw_locale))
    }

    /// Assemble the metadata object for a page from its CMS record.
    ///
    /// Never fails; validation problems are logged and returned as warnings.
    ///
    /// # Arguments
    /// * `record` - SEO fields as delivered by the CMS
    /// * `raw_locale` - Untrusted locale route parameter; unknown codes fall
    ///   back to the default locale
    /// * `canonical_path` - The page's locale-neutral path (e.g., "/cities/montreal")
    ///
    /// # Returns
    /// The [`PageMetadata`] for the page in the resolved locale. A canonical
    /// URL in the record overrides the derived one.
    pub fn page_metadata(&self, record: &SeoRecord, raw_locale: &str, canonical_path: &str) -> PageMetadata {
        let locale = Locale::resolve(raw_locale);
        let seo = process_seo_record(record, &self.limits);

        let set = self.paths().alternates_for_canonical(canonical_path, locale);
        let languages = self.urls.language_urls(&set);
        let page_url = languages
            .get(locale)
            .map(str::to_string)
            .unwrap_or_else(|| self.urls.home_url(locale));
        let x_default = languages
            .get(Locale::default())
            .map(str::to_string)
            .unwrap_or_else(|| self.urls.home_url(Locale::default()));

        log_warnings(&page_url, &seo.warnings);

        let alternate_locale = Locale::ALL
            .into_iter()
            .filter(|other| *other != locale)
            .map(Locale::og_locale)
            .collect();

        PageMetadata {
            title: seo.title.clone(),
            description: seo.description.clone(),
            keywords: seo.keywords.unwrap_or_default(),
            alternates: Alternates {
                canonical: seo.canonical.unwrap_or_else(|| page_url.clone()),
                languages,
                x_default,
            },
            open_graph: OpenGraph {
                title: seo.title.clone(),
                description: seo.description.clone(),
                url: page_url,
                site_name: self.name.clone(),
                locale: locale.og_locale(),
                alternate_locale,
                kind: "website",
                images: seo
                    .og_image
                    .into_iter()
                    .map(|url| OgImage {
                        url,
                        width: OG_IMAGE_WIDTH,
                        height: OG_IMAGE_HEIGHT,
                    })
                    .collect(),
            },
            twitter: TwitterCard {
                card: "summary_large_image",
                title: seo.title,
                description: seo.description,
                images: seo.twitter_image.into_iter().collect(),
            },
            robots: Robots {
                index: !seo.no_index,
                follow: !seo.no_follow,
            },
            warnings: seo.warnings,
        }
    }

    pub fn breadcrumbs(&self, items: &[BreadcrumbInput], raw_locale: &str) -> Vec<BreadcrumbItem> {
        build_breadcrumbs(&self.urls, items, Locale::resolve(raw_locale))
    }

    /// JSON-LD embedded on every page: organization, website and offices.
    pub fn site_schemas(&self) -> Vec<Value> {
        site_schemas(&self.urls, &self.name)
    }

    /// JSON-LD for one page. `today` fills in missing modification dates.
    pub fn page_schema(&self, schema: &PageSchema, today: NaiveDate) -> Value {
        match schema {
            PageSchema::Faq { faqs } => faq_schema(faqs),
            PageSchema::Article(article) => article_schema(&self.urls, &self.name, article),
            PageSchema::Service(service) => service_schema(&self.urls, service),
            PageSchema::WebPage(page) => web_page_schema(&self.urls, page, today),
            PageSchema::City(city) => city_schema(&self.paths(), &self.urls, &self.name, city),
        }
    }

    pub fn og_image_url(&self, title: &str, options: &OgImageOptions) -> String {
        self.urls.og_image_url(title, options, &self.limits)
    }

    pub fn route(&self, path: &str) -> RouteDecision {
        route_request(path, &self.slugs)
    }

    pub fn sitemap(&self, last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
        build_sitemap(&self.paths(), &self.urls, last_modified)
    }

    pub fn robots_txt(&self) -> String {
        render_robots_txt(&self.robots, &self.urls)
    }
}
