//! Absolute URLs for the public site.

use crate::i18n::{AlternateSet, Locale};
use crate::seo::{truncate_text, SeoLimits, ELLIPSIS};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Kind of page an Open-Graph image is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgImageKind {
    Page,
    City,
    Blog,
}

impl OgImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OgImageKind::Page => "page",
            OgImageKind::City => "city",
            OgImageKind::Blog => "blog",
        }
    }
}

/// Optional parameters of a generated Open-Graph image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OgImageOptions {
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<OgImageKind>,
    pub locale: Option<Locale>,
}

/// Per-locale absolute URLs of one page.
///
/// Serializes as a map keyed by locale code, in locale enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageUrls(pub Vec<(Locale, String)>);

impl LanguageUrls {
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, url)| url.as_str())
    }
}

impl Serialize for LanguageUrls {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (locale, url) in &self.0 {
            map.serialize_entry(locale.code(), url)?;
        }
        map.end()
    }
}

/// Builds absolute URLs against the site origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    origin: String,
}

impl SiteUrls {
    /// `origin` is scheme and host, e.g. `https://www.microhabitat.com`.
    /// Trailing slashes are dropped.
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL of an already-localized path. The root maps to the bare
    /// origin.
    pub fn absolute(&self, path: &str) -> String {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            self.origin.clone()
        } else if path.starts_with('/') {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}/{}", self.origin, path)
        }
    }

    /// Canonical URL of `path` in `locale`.
    ///
    /// Prefixes the origin and, for non-default locales, the locale
    /// segment. Segments are not translated.
    pub fn canonical_url(&self, path: &str, locale: Locale) -> String {
        let clean = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        if locale.is_default() {
            format!("{}{}", self.origin, clean)
        } else {
            format!("{}/{}{}", self.origin, locale.code(), clean)
        }
    }

    /// Root URL of a locale.
    pub fn home_url(&self, locale: Locale) -> String {
        if locale.is_default() {
            self.origin.clone()
        } else {
            format!("{}/{}", self.origin, locale.code())
        }
    }

    /// Absolute URLs for every entry of an alternate set.
    pub fn language_urls(&self, alternates: &AlternateSet) -> LanguageUrls {
        LanguageUrls(
            alternates
                .iter()
                .map(|link| (link.locale, self.absolute(&link.path)))
                .collect(),
        )
    }

    /// URL of the dynamic Open-Graph image endpoint for a page.
    pub fn og_image_url(&self, title: &str, options: &OgImageOptions, limits: &SeoLimits) -> String {
        let mut params = vec![(
            "title",
            truncate_text(title, limits.og_title_max, ELLIPSIS),
        )];

        if let Some(subtitle) = options.subtitle.as_deref().filter(|s| !s.is_empty()) {
            params.push((
                "subtitle",
                truncate_text(subtitle, limits.og_subtitle_max, ELLIPSIS),
            ));
        }
        if let Some(kind) = options.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(locale) = options.locale {
            params.push(("locale", locale.code().to_string()));
        }

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}/api/og?{}", self.origin, query)
    }
}
