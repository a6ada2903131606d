//! Slug translation table: canonical (English) URL segments to localized
//! segments, per locale.
//!
//! The table is built once at start-up and shared read-only. Construction
//! enforces that every locale's mapping stays invertible, so
//! `canonicalize(localize(s, l), l) == s` holds for every mapped segment.

use crate::i18n::{Locale, UnknownLocale};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while building or loading a slug table.
#[derive(Debug, Error)]
pub enum SlugTableError {
    #[error("duplicate localized segment '{segment}' in locale '{locale}': mapped from both '{first}' and '{second}'")]
    DuplicateSegment {
        locale: Locale,
        segment: String,
        first: String,
        second: String,
    },

    #[error("localized segment '{segment}' in locale '{locale}' shadows the unmapped canonical segment of the same name")]
    ShadowedSegment { locale: Locale, segment: String },

    #[error("invalid URL segment '{0}': expected lowercase words separated by single hyphens")]
    InvalidSegment(String),

    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),

    #[error("failed to parse slug table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read slug table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Bidirectional per-locale slug mapping.
#[derive(Debug, Clone, Default)]
pub struct SlugTable {
    forward: HashMap<Locale, HashMap<String, String>>,
    reverse: HashMap<Locale, HashMap<String, String>>,
}

/// JSON shape of a slug table file: `{"fr": {"about": "a-propos"}}`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SlugTableFile(BTreeMap<String, BTreeMap<String, String>>);

static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("segment pattern is valid")
    })
}

/// Site routing slugs, in locale order fr, de, nl, it, es.
const BUILTIN_SLUGS: &[(&str, [&str; 5])] = &[
    ("about", ["a-propos", "ueber-uns", "over-ons", "chi-siamo", "sobre-nosotros"]),
    ("cities", ["villes", "staedte", "steden", "citta", "ciudades"]),
    ("careers", ["carrieres", "karriere", "carriere", "carriere", "carreras"]),
    ("partnerships", ["partenariats", "partnerschaften", "partnerschappen", "partnership", "colaboraciones"]),
    ("community-engagement", ["engagement-communautaire", "gemeinschaftliches-engagement", "community-betrokkenheid", "impegno-comunitario", "participacion-comunitaria"]),
    ("outdoor-farm", ["ferme-exterieure", "outdoor-farm", "outdoor-boerderij", "fattoria-esterna", "granja-exterior"]),
    ("indoor-farm", ["ferme-interieure", "indoor-farm", "indoor-boerderij", "fattoria-interna", "granja-interior"]),
    ("educational-activities", ["activites-educatives", "bildungsaktivitaeten", "educatieve-activiteiten", "attivita-educative", "actividades-educativas"]),
    ("contact", ["contact", "kontakt", "contact", "contatto", "contacto"]),
    ("faq", ["faq", "faq", "faq", "faq", "faq"]),
    ("blog", ["blogue", "blog", "blog", "blog", "blog"]),
    ("commercial-real-estate", ["immobilier-commercial", "gewerbeimmobilien", "commercieel-vastgoed", "immobiliare-commerciale", "inmobiliaria-comercial"]),
    ("corporations", ["entreprises", "unternehmen", "bedrijven", "aziende", "empresas"]),
    ("schools", ["ecoles", "schulen", "scholen", "scuole", "escuelas"]),
    ("privacy-policy", ["politique-confidentialite", "datenschutz", "privacybeleid", "informativa-privacy", "politica-privacidad"]),
    ("terms-of-service", ["conditions-utilisation", "nutzungsbedingungen", "algemene-voorwaarden", "termini-servizio", "terminos-servicio"]),
    ("cookie-policy", ["politique-cookies", "cookie-richtlinie", "cookiebeleid", "politica-cookie", "politica-cookies"]),
    ("roi-calculator", ["calculateur-roi", "roi-rechner", "roi-calculator", "calcolatore-roi", "calculadora-roi"]),
];

const BUILTIN_LOCALES: [Locale; 5] = [Locale::Fr, Locale::De, Locale::Nl, Locale::It, Locale::Es];

impl SlugTable {
    /// Create an empty table (every segment passes through).
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's built-in routing table.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (canonical, localized) in BUILTIN_SLUGS {
            for (locale, segment) in BUILTIN_LOCALES.iter().zip(localized) {
                // Static data: covered by test_builtin_table_is_valid.
                let _ = table.insert(*locale, canonical, segment);
            }
        }
        table
    }

    /// Build a table from a JSON document keyed by locale code.
    pub fn from_json_str(json: &str) -> Result<Self, SlugTableError> {
        let file: SlugTableFile = serde_json::from_str(json)?;
        let mut table = Self::new();

        for (code, mappings) in file.0 {
            let locale = Locale::from_code(&code)?;
            for (canonical, localized) in mappings {
                table.insert(locale, &canonical, &localized)?;
            }
        }

        table.validate()?;
        Ok(table)
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SlugTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SlugTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json_str(&json)?;
        info!(
            "Loaded slug table from {} ({} canonical segments)",
            path.display(),
            table.canonical_segments().len()
        );
        Ok(table)
    }

    /// Add one mapping. Re-inserting a canonical segment replaces its
    /// previous localized value.
    ///
    /// # Arguments
    /// * `locale` - Locale the localized segment belongs to
    /// * `canonical` - Canonical (English) segment, e.g. "about"
    /// * `localized` - Segment shown in URLs for `locale`, e.g. "a-propos"
    ///
    /// # Returns
    /// * `Ok(())` if the mapping was added
    /// * `Err(SlugTableError::InvalidSegment)` if either segment is not a
    ///   lowercase hyphenated slug
    /// * `Err(SlugTableError::DuplicateSegment)` if `localized` is already
    ///   mapped from another canonical segment in this locale
    pub fn insert(
        &mut self,
        locale: Locale,
        canonical: &str,
        localized: &str,
    ) -> Result<(), SlugTableError> {
        for segment in [canonical, localized] {
            if !segment_regex().is_match(segment) {
                return Err(SlugTableError::InvalidSegment(segment.to_string()));
            }
        }

        let reverse = self.reverse.entry(locale).or_default();
        if let Some(existing) = reverse.get(localized) {
            if existing != canonical {
                return Err(SlugTableError::DuplicateSegment {
                    locale,
                    segment: localized.to_string(),
                    first: existing.clone(),
                    second: canonical.to_string(),
                });
            }
        }

        let forward = self.forward.entry(locale).or_default();
        if let Some(previous) = forward.insert(canonical.to_string(), localized.to_string()) {
            reverse.remove(&previous);
        }
        reverse.insert(localized.to_string(), canonical.to_string());

        Ok(())
    }

    /// Check cross-entry invariants that single inserts cannot see.
    ///
    /// A localized value that equals some other canonical segment would make
    /// that canonical segment non-invertible in this locale unless it is
    /// itself mapped away.
    pub fn validate(&self) -> Result<(), SlugTableError> {
        let canonical: BTreeSet<&str> = self.canonical_segments().into_iter().collect();

        for (locale, forward) in &self.forward {
            for (source, localized) in forward {
                if localized != source
                    && canonical.contains(localized.as_str())
                    && !forward.contains_key(localized)
                {
                    return Err(SlugTableError::ShadowedSegment {
                        locale: *locale,
                        segment: localized.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Translate a canonical segment, passing it through when unmapped.
    pub fn localize<'a>(&'a self, segment: &'a str, locale: Locale) -> &'a str {
        self.forward
            .get(&locale)
            .and_then(|map| map.get(segment))
            .map(String::as_str)
            .unwrap_or(segment)
    }

    /// Reverse-translate a localized segment, passing it through when unmapped.
    pub fn canonicalize<'a>(&'a self, segment: &'a str, locale: Locale) -> &'a str {
        match self.reverse.get(&locale).and_then(|map| map.get(segment)) {
            Some(canonical) => canonical.as_str(),
            None => {
                debug!("No reverse slug mapping for '{}' in {}", segment, locale);
                segment
            }
        }
    }

    /// Whether a locale has an explicit mapping for a canonical segment.
    pub fn has_mapping(&self, segment: &str, locale: Locale) -> bool {
        self.forward
            .get(&locale)
            .is_some_and(|map| map.contains_key(segment))
    }

    /// Every canonical segment with at least one mapping, sorted.
    pub fn canonical_segments(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .forward
            .values()
            .flat_map(|map| map.keys().map(String::as_str))
            .collect();
        set.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ==================== Built-in Table Tests ====================

    #[test]
    fn test_builtin_table_is_valid() {
        let mut rebuilt = SlugTable::new();
        for (canonical, localized) in BUILTIN_SLUGS {
            for (locale, segment) in BUILTIN_LOCALES.iter().zip(localized) {
                rebuilt
                    .insert(*locale, canonical, segment)
                    .expect("built-in mapping should insert cleanly");
            }
        }
        rebuilt.validate().expect("built-in table should validate");
        assert_eq!(rebuilt.canonical_segments().len(), BUILTIN_SLUGS.len());
    }

    #[test]
    fn test_builtin_localize() {
        let table = SlugTable::builtin();
        assert_eq!(table.localize("about", Locale::Fr), "a-propos");
        assert_eq!(table.localize("cities", Locale::De), "staedte");
        assert_eq!(table.localize("roi-calculator", Locale::Es), "calculadora-roi");
    }

    #[test]
    fn test_builtin_canonicalize() {
        let table = SlugTable::builtin();
        assert_eq!(table.canonicalize("a-propos", Locale::Fr), "about");
        assert_eq!(table.canonicalize("chi-siamo", Locale::It), "about");
        assert_eq!(table.canonicalize("blogue", Locale::Fr), "blog");
    }

    #[test]
    fn test_default_locale_passes_through() {
        let table = SlugTable::builtin();
        assert_eq!(table.localize("about", Locale::En), "about");
        assert_eq!(table.canonicalize("about", Locale::En), "about");
    }

    #[test]
    fn test_unmapped_segment_passes_through() {
        let table = SlugTable::builtin();
        assert_eq!(table.localize("montreal", Locale::Fr), "montreal");
        assert_eq!(table.canonicalize("montreal", Locale::Fr), "montreal");
    }

    #[test]
    fn test_localized_segment_of_other_locale_is_not_canonicalized() {
        let table = SlugTable::builtin();
        assert_eq!(table.canonicalize("a-propos", Locale::De), "a-propos");
    }

    #[test]
    fn test_builtin_roundtrip_every_mapping() {
        let table = SlugTable::builtin();
        for segment in table.canonical_segments() {
            for locale in Locale::ALL {
                let localized = table.localize(segment, locale);
                assert_eq!(table.canonicalize(localized, locale), segment);
            }
        }
    }

    // ==================== Insert Tests ====================

    #[test]
    fn test_insert_rejects_duplicate_localized_segment() {
        let mut table = SlugTable::new();
        table.insert(Locale::Fr, "about", "a-propos").unwrap();
        let err = table.insert(Locale::Fr, "team", "a-propos").unwrap_err();
        assert!(matches!(err, SlugTableError::DuplicateSegment { .. }));
        assert!(err.to_string().contains("a-propos"));
    }

    #[test]
    fn test_same_localized_segment_allowed_across_locales() {
        let mut table = SlugTable::new();
        table.insert(Locale::Nl, "careers", "carriere").unwrap();
        table.insert(Locale::It, "careers", "carriere").unwrap();
        assert_eq!(table.canonicalize("carriere", Locale::Nl), "careers");
        assert_eq!(table.canonicalize("carriere", Locale::It), "careers");
    }

    #[test]
    fn test_reinsert_replaces_previous_value() {
        let mut table = SlugTable::new();
        table.insert(Locale::Es, "partnerships", "asociaciones").unwrap();
        table.insert(Locale::Es, "partnerships", "colaboraciones").unwrap();
        assert_eq!(table.localize("partnerships", Locale::Es), "colaboraciones");
        assert_eq!(table.canonicalize("asociaciones", Locale::Es), "asociaciones");
        // The freed value can be reused
        table.insert(Locale::Es, "alliances", "asociaciones").unwrap();
    }

    #[test]
    fn test_insert_rejects_invalid_segment() {
        let mut table = SlugTable::new();
        assert!(matches!(
            table.insert(Locale::Fr, "about", "À propos"),
            Err(SlugTableError::InvalidSegment(_))
        ));
        assert!(table.insert(Locale::Fr, "about/", "a-propos").is_err());
        assert!(table.insert(Locale::Fr, "", "a-propos").is_err());
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_rejects_shadowed_canonical_segment() {
        let mut table = SlugTable::new();
        table.insert(Locale::De, "about", "team").unwrap();
        table.insert(Locale::Fr, "team", "equipe").unwrap();
        let err = table.validate().unwrap_err();
        assert!(matches!(err, SlugTableError::ShadowedSegment { locale: Locale::De, .. }));
    }

    #[test]
    fn test_validate_accepts_swapped_segments() {
        let mut table = SlugTable::new();
        table.insert(Locale::De, "about", "team").unwrap();
        table.insert(Locale::De, "team", "about").unwrap();
        table.validate().unwrap();
        assert_eq!(table.canonicalize(table.localize("team", Locale::De), Locale::De), "team");
    }

    // ==================== JSON Loading Tests ====================

    #[test]
    fn test_from_json_str() {
        let table = SlugTable::from_json_str(r#"{"fr": {"about": "a-propos"}, "es": {"about": "nosotros"}}"#)
            .unwrap();
        assert_eq!(table.localize("about", Locale::Fr), "a-propos");
        assert_eq!(table.localize("about", Locale::Es), "nosotros");
        assert!(!table.has_mapping("about", Locale::De));
    }

    #[test]
    fn test_from_json_str_unknown_locale() {
        let err = SlugTable::from_json_str(r#"{"pt": {"about": "sobre"}}"#).unwrap_err();
        assert!(matches!(err, SlugTableError::UnknownLocale(_)));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = SlugTable::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SlugTableError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nl": {{"contact": "neem-contact-op"}}}}"#).unwrap();

        let table = SlugTable::from_path(file.path()).unwrap();
        assert_eq!(table.localize("contact", Locale::Nl), "neem-contact-op");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SlugTable::from_path("/nonexistent/slugs.json").unwrap_err();
        assert!(matches!(err, SlugTableError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/slugs.json"));
    }
}
