//! Locale type: the closed set of locales the site is published in.
//!
//! Locales arrive as untyped route parameters, so every entry point goes
//! through [`Locale::resolve`], which never fails and degrades to the
//! default locale.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A supported locale.
///
/// Variant order is the fixed enumeration order used for alternate links
/// and the sitemap. It mirrors the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
    Nl,
    It,
    Es,
}

/// Returned by [`Locale::from_code`] for codes outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale code: '{0}'")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All locales in enumeration order.
    pub const ALL: [Locale; 6] = [
        Locale::En,
        Locale::Fr,
        Locale::De,
        Locale::Nl,
        Locale::It,
        Locale::Es,
    ];

    /// Resolve an arbitrary string to a supported locale.
    ///
    /// Exact matches only; anything else yields the default locale.
    pub fn resolve(raw: &str) -> Locale {
        match Locale::from_code(raw) {
            Ok(locale) => locale,
            Err(_) => {
                debug!("Unsupported locale '{}', falling back to default", raw);
                Locale::default()
            }
        }
    }

    /// Strictly parse a locale code.
    pub fn from_code(code: &str) -> Result<Locale, UnknownLocale> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| UnknownLocale(code.to_string()))
    }

    /// The URL code (e.g., "fr").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Registry metadata for this locale.
    pub fn config(self) -> &'static LocaleConfig {
        // Variant discriminants index the registry table.
        &LocaleRegistry::get().list_all()[self as usize]
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Native display name, as shown in the language switcher.
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Open-Graph locale code (e.g., "fr_CA").
    pub fn og_locale(self) -> &'static str {
        self.config().og_locale
    }

    /// Whether this is the default locale. The default locale has no
    /// path prefix.
    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_supported_codes() {
        assert_eq!(Locale::resolve("en"), Locale::En);
        assert_eq!(Locale::resolve("fr"), Locale::Fr);
        assert_eq!(Locale::resolve("es"), Locale::Es);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        assert_eq!(Locale::resolve("pt"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
        assert_eq!(Locale::resolve("french"), Locale::En);
    }

    #[test]
    fn test_resolve_requires_exact_match() {
        assert_eq!(Locale::resolve("FR"), Locale::En);
        assert_eq!(Locale::resolve(" fr"), Locale::En);
        assert_eq!(Locale::resolve("fr-CA"), Locale::En);
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_invalid() {
        let err = Locale::from_code("pt").unwrap_err();
        assert_eq!(err, UnknownLocale("pt".to_string()));
        assert!(err.to_string().contains("unknown locale"));
    }

    #[test]
    fn test_from_str_roundtrip_for_all_locales() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_all_matches_registry_order() {
        let codes: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
        let registry: Vec<_> = LocaleRegistry::get().list_all().iter().map(|c| c.code).collect();
        assert_eq!(codes, registry);
    }

    #[test]
    fn test_only_english_is_default() {
        assert!(Locale::En.is_default());
        assert_eq!(Locale::ALL.iter().filter(|l| l.is_default()).count(), 1);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_og_locales() {
        assert_eq!(Locale::En.og_locale(), "en_CA");
        assert_eq!(Locale::Fr.og_locale(), "fr_CA");
        assert_eq!(Locale::Nl.og_locale(), "nl_NL");
    }

    #[test]
    fn test_native_names() {
        assert_eq!(Locale::De.native_name(), "Deutsch");
        assert_eq!(Locale::It.native_name(), "Italiano");
        assert_eq!(Locale::Es.name(), "Spanish");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Nl).unwrap(), "\"nl\"");
        let parsed: Locale = serde_json::from_str("\"it\"").unwrap();
        assert_eq!(parsed, Locale::It);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<Locale>("\"pt\"").is_err());
    }
}
