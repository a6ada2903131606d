//! Locale-aware paths: canonical path → localized path, and back.
//!
//! Canonical paths are `/`-separated English segments without a locale
//! prefix. Localized paths carry a `/{locale}` prefix for every locale but
//! the default, and translated segments where the slug table has them.

use crate::i18n::{Locale, SlugTable};
use serde::Serialize;
use tracing::debug;

/// One entry of an alternate-link (hreflang) set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub locale: Locale,
    pub hreflang: &'static str,
    pub path: String,
}

/// The complete set of per-locale paths for one logical page.
///
/// Always holds exactly one link per supported locale, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateSet {
    pub current: Locale,
    pub canonical_path: String,
    pub links: Vec<AlternateLink>,
}

impl AlternateSet {
    /// Link for one locale.
    pub fn get(&self, locale: Locale) -> Option<&AlternateLink> {
        self.links.iter().find(|link| link.locale == locale)
    }

    /// Link for the requesting locale.
    pub fn current_link(&self) -> Option<&AlternateLink> {
        self.get(self.current)
    }

    /// Link search engines should fall back to (the default locale's).
    pub fn x_default(&self) -> Option<&AlternateLink> {
        self.get(Locale::default())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlternateLink> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Non-empty segments of a path; repeated and trailing slashes are ignored.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Detect a leading supported locale segment.
///
/// Returns the locale and the rest of the path (always `/`-rooted), or
/// `None` and the whole path when the first segment is not a locale code.
pub fn split_locale_prefix(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    match Locale::from_code(first) {
        Ok(locale) if rest.trim_matches('/').is_empty() => (Some(locale), "/"),
        Ok(locale) => (Some(locale), rest),
        Err(_) => (None, path),
    }
}

/// Locale a localized path is written in, and the path without its prefix.
///
/// The prefix wins over the request locale when both are present.
fn split_path(localized_path: &str, locale: Locale) -> (Locale, &str) {
    match split_locale_prefix(localized_path) {
        (Some(prefix), rest) => {
            if prefix != locale {
                debug!(
                    "Path {} is prefixed with {}, request locale is {}",
                    localized_path, prefix, locale
                );
            }
            (prefix, rest)
        }
        (None, _) => (locale, localized_path),
    }
}

/// Builds localized and canonical paths from a slug table.
#[derive(Debug, Clone, Copy)]
pub struct PathLocalizer<'a> {
    slugs: &'a SlugTable,
}

impl<'a> PathLocalizer<'a> {
    pub fn new(slugs: &'a SlugTable) -> Self {
        Self { slugs }
    }

    /// Translate a canonical path into `locale`.
    ///
    /// Root maps to `/` for the default locale and `/{locale}` otherwise.
    /// Every other segment is translated on its own; unmapped segments such
    /// as city identifiers pass through.
    ///
    /// # Arguments
    /// * `canonical_path` - Locale-neutral path (e.g., "/cities/montreal")
    /// * `locale` - Target locale
    ///
    /// # Returns
    /// The `/`-rooted localized path (e.g., "/fr/villes/montreal").
    pub fn localize_path(&self, canonical_path: &str, locale: Locale) -> String {
        let translated: Vec<&str> = segments(canonical_path)
            .map(|segment| self.slugs.localize(segment, locale))
            .collect();

        match (translated.is_empty(), locale.is_default()) {
            (true, true) => "/".to_string(),
            (true, false) => format!("/{}", locale.code()),
            (false, true) => format!("/{}", translated.join("/")),
            (false, false) => format!("/{}/{}", locale.code(), translated.join("/")),
        }
    }

    /// Map a localized path back to its canonical form.
    ///
    /// A leading `/{code}` segment naming any supported locale is stripped,
    /// and the remaining segments are reverse-translated in that locale. A
    /// path without a prefix is reverse-translated in `locale`.
    ///
    /// # Arguments
    /// * `localized_path` - Path as it appears in the browser (e.g., "/fr/a-propos")
    /// * `locale` - Locale of the request, used when the path has no prefix
    ///
    /// # Returns
    /// The `/`-rooted canonical path (e.g., "/about").
    pub fn canonicalize_path(&self, localized_path: &str, locale: Locale) -> String {
        let (path_locale, body) = split_path(localized_path, locale);
        self.canonicalize_segments(body, path_locale)
    }

    fn canonicalize_segments(&self, body: &str, locale: Locale) -> String {
        let canonical: Vec<&str> = segments(body)
            .map(|segment| self.slugs.canonicalize(segment, locale))
            .collect();

        format!("/{}", canonical.join("/"))
    }

    /// Every locale's path for the page at `localized_path`.
    ///
    /// # Arguments
    /// * `localized_path` - Path as it appears in the browser
    /// * `locale` - Locale of the request, used when the path has no prefix
    ///
    /// # Returns
    /// An [`AlternateSet`] with one link per supported locale. Its `current`
    /// locale is the one named by the path prefix, if any.
    pub fn alternate_links(&self, localized_path: &str, locale: Locale) -> AlternateSet {
        let (path_locale, body) = split_path(localized_path, locale);
        let canonical_path = self.canonicalize_segments(body, path_locale);
        self.alternates_for_canonical(&canonical_path, path_locale)
    }

    /// Every locale's path for a page already known by its canonical path.
    ///
    /// No reverse lookup happens, so a canonical segment that doubles as a
    /// localized slug in some locale is still taken as canonical.
    ///
    /// # Arguments
    /// * `canonical_path` - Locale-neutral path; slashes are normalized
    /// * `locale` - Locale recorded as the set's `current` entry
    pub fn alternates_for_canonical(&self, canonical_path: &str, locale: Locale) -> AlternateSet {
        let canonical_path = format!("/{}", segments(canonical_path).collect::<Vec<_>>().join("/"));

        let links = Locale::ALL
            .into_iter()
            .map(|target| AlternateLink {
                locale: target,
                hreflang: target.code(),
                path: self.localize_path(&canonical_path, target),
            })
            .collect();

        AlternateSet {
            current: locale,
            canonical_path,
            links,
        }
    }
}
