//! Preview binary - prints the localized URLs and page metadata for one page
//!
//! Usage:
//!   cargo run --bin preview -- /cities/montreal fr
//!   cargo run --bin preview -- /about de seo.json   # SEO record from a JSON file
//!
//! Optional environment variables:
//! - SITE_URL (defaults to https://www.microhabitat.com)
//! - SITE_NAME (defaults to Microhabitat)
//! - SLUG_TABLE_PATH (defaults to the built-in table)

use anyhow::{Context, Result};
use habitat_seo::{config::Config, seo::SeoRecord, Site};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("habitat_seo=warn".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().map(String::as_str).unwrap_or("/");
    let locale = args.get(1).map(String::as_str).unwrap_or("en");

    let record = match args.get(2) {
        Some(file) => {
            let json = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read SEO record from {}", file))?;
            serde_json::from_str::<SeoRecord>(&json)
                .with_context(|| format!("Invalid SEO record in {}", file))?
        }
        None => SeoRecord::default(),
    };

    let config = Config::from_env()?;
    let site = Site::from_config(&config)?;

    let page = site.localize(locale, path);
    println!("Page: {} ({})", page.url, page.locale.native_name());
    println!();

    println!("Alternates:");
    for link in site.paths().alternates_for_canonical(&page.canonical_path, page.locale).iter() {
        println!("  {:<3} {}", link.hreflang, site.urls().absolute(&link.path));
    }
    println!();

    let metadata = site.page_metadata(&record, locale, &page.canonical_path);
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    if !metadata.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &metadata.warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}
