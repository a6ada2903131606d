//! Internationalization (i18n): supported locales, slug translation and
//! locale-aware paths.
//!
//! # Architecture
//!
//! - `registry`: Static metadata for every supported locale
//! - `locale`: The `Locale` type and the never-failing resolver
//! - `slugs`: Bidirectional canonical ↔ localized segment table
//! - `paths`: Path localizer, canonicalizer and alternate-link builder
//!
//! # Example
//!
//! ```rust
//! use habitat_seo::i18n::{Locale, PathLocalizer, SlugTable};
//!
//! let slugs = SlugTable::builtin();
//! let paths = PathLocalizer::new(&slugs);
//!
//! let locale = Locale::resolve("fr");
//! assert_eq!(paths.localize_path("/about", locale), "/fr/a-propos");
//! assert_eq!(paths.canonicalize_path("/fr/a-propos", locale), "/about");
//! ```

mod locale;
mod paths;
mod registry;
mod slugs;

pub use locale::{Locale, UnknownLocale};
pub use paths::{segments, split_locale_prefix, AlternateLink, AlternateSet, PathLocalizer};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use slugs::{SlugTable, SlugTableError};
