//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is a static table in enumeration order. The order matters:
//! alternate-link sets and the sitemap iterate locales in exactly this order.

/// Metadata for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// ISO 639-1 language code used in URLs (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native display name (e.g., "Français")
    pub native_name: &'static str,

    /// Open-Graph locale code (e.g., "fr_CA")
    pub og_locale: &'static str,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,
}

/// Registry of all supported locales.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: &'static [LocaleConfig],
}

static LOCALES: [LocaleConfig; 6] = [
    LocaleConfig {
        code: "en",
        name: "English",
        native_name: "English",
        og_locale: "en_CA",
        is_default: true,
    },
    LocaleConfig {
        code: "fr",
        name: "French",
        native_name: "Français",
        og_locale: "fr_CA",
        is_default: false,
    },
    LocaleConfig {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        og_locale: "de_DE",
        is_default: false,
    },
    LocaleConfig {
        code: "nl",
        name: "Dutch",
        native_name: "Nederlands",
        og_locale: "nl_NL",
        is_default: false,
    },
    LocaleConfig {
        code: "it",
        name: "Italian",
        native_name: "Italiano",
        og_locale: "it_IT",
        is_default: false,
    },
    LocaleConfig {
        code: "es",
        name: "Spanish",
        native_name: "Español",
        og_locale: "es_ES",
        is_default: false,
    },
];

static REGISTRY: LocaleRegistry = LocaleRegistry { locales: &LOCALES };

impl LocaleRegistry {
    /// Get the global locale registry.
    pub fn get() -> &'static LocaleRegistry {
        &REGISTRY
    }

    /// Get a locale configuration by its code (exact, case-sensitive match).
    pub fn get_by_code(&self, code: &str) -> Option<&'static LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales in enumeration order.
    pub fn list_all(&self) -> &'static [LocaleConfig] {
        self.locales
    }

    /// The default locale configuration.
    ///
    /// # Panics
    /// Panics if the static table does not contain exactly one default
    /// locale. The table is fixed at compile time and covered by tests.
    pub fn default_locale(&self) -> &'static LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_french() {
        let config = LocaleRegistry::get().get_by_code("fr").unwrap();
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert_eq!(config.og_locale, "fr_CA");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LocaleRegistry::get().get_by_code("FR").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("pt").is_none());
        assert!(LocaleRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_in_enumeration_order() {
        let codes: Vec<_> = LocaleRegistry::get().list_all().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["en", "fr", "de", "nl", "it", "es"]);
    }

    #[test]
    fn test_exactly_one_default_locale() {
        let registry = LocaleRegistry::get();
        let count = registry.list_all().iter().filter(|l| l.is_default).count();
        assert_eq!(count, 1);
        assert_eq!(registry.default_locale().code, "en");
    }

    #[test]
    fn test_codes_are_unique() {
        let all = LocaleRegistry::get().list_all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_is_supported() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_supported("nl"));
        assert!(!registry.is_supported("x-default"));
    }
}
