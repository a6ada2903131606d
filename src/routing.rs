//! Request routing for locale-prefixed URLs.
//!
//! Public URLs use localized slugs (`/fr/a-propos`), while pages are
//! registered under canonical slugs (`/fr/about`). This module decides how
//! an incoming path maps onto the page tree.

use crate::i18n::{segments, split_locale_prefix, Locale, SlugTable};
use serde::Serialize;
use tracing::debug;

/// Paths that are served as-is, never localized.
const PASSTHROUGH_PREFIXES: &[&str] = &["/_next", "/api", "/static"];
const PASSTHROUGH_FILES: &[&str] = &["/favicon.ico", "/robots.txt", "/sitemap.xml"];

/// What to do with an incoming request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "lowercase")]
pub enum RouteDecision {
    /// Serve the path unchanged
    Next,
    /// Serve the page at this internal path; the browser URL is kept
    Rewrite(String),
}

/// Whether a path bypasses locale handling (assets, API, internals).
pub fn is_passthrough(path: &str) -> bool {
    PASSTHROUGH_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || PASSTHROUGH_FILES.contains(&path)
        || path.contains('.')
}

/// Decide how to serve `path`.
///
/// - Locale-prefixed paths whose first page segment is localized are
///   rewritten to the canonical slug; anything after it is kept.
/// - Unprefixed paths belong to the default locale and are rewritten
///   internally to `/{default}{path}`, keeping public URLs prefix-free.
pub fn route_request(path: &str, slugs: &SlugTable) -> RouteDecision {
    if is_passthrough(path) {
        return RouteDecision::Next;
    }

    match split_locale_prefix(path) {
        (Some(locale), rest) => {
            let mut parts = segments(rest);
            let Some(localized) = parts.next() else {
                return RouteDecision::Next;
            };

            let canonical = slugs.canonicalize(localized, locale);
            if canonical == localized {
                return RouteDecision::Next;
            }

            let remaining: Vec<&str> = parts.collect();
            let target = if remaining.is_empty() {
                format!("/{}/{}", locale.code(), canonical)
            } else {
                format!("/{}/{}/{}", locale.code(), canonical, remaining.join("/"))
            };
            debug!("Rewriting {} -> {}", path, target);
            RouteDecision::Rewrite(target)
        }
        (None, _) => {
            let locale = Locale::default();
            RouteDecision::Rewrite(format!("/{}{}", locale.code(), path))
        }
    }
}

/// Pick the best supported locale from an `Accept-Language` header.
///
/// Entries are ordered by q-value and matched on their primary subtag, so
/// `fr-CA` selects `fr`. A missing, unparsable or non-finite q counts as 1;
/// ties keep header order. Falls back to the default locale.
pub fn negotiate_locale(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language.filter(|h| !h.trim().is_empty()) else {
        return Locale::default();
    };

    let mut entries: Vec<(String, f64)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let quality = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.parse::<f64>().ok().filter(|q| q.is_finite()))
                .unwrap_or(1.0);

            let primary = tag.split('-').next().unwrap_or(tag).to_lowercase();
            Some((primary, quality))
        })
        .collect();

    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .iter()
        .filter(|(_, quality)| *quality > 0.0)
        .find_map(|(code, _)| Locale::from_code(code).ok())
        .unwrap_or_default()
}
