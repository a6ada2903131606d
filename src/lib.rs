//! Localized URL routing and SEO metadata for a multilingual marketing site.
//!
//! The core is synchronous and pure: a [`Site`] is built once at start-up
//! and shared read-only; every operation on it maps plain values to plain
//! values and never fails at request time.

pub mod config;
pub mod i18n;
pub mod robots;
pub mod routing;
pub mod seo;
pub mod server;
pub mod site;
pub mod sitemap;

pub use site::{LocalizedPage, Site};
