use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Public site
    pub site_url: String,
    pub site_name: String,

    // HTTP server
    pub port: u16,

    // Optional JSON slug table replacing the built-in one
    pub slug_table_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "https://www.microhabitat.com".to_string())
            .trim_end_matches('/')
            .to_string();

        if !site_url.starts_with("https://") && !site_url.starts_with("http://") {
            bail!("SITE_URL must be an absolute http(s) URL, got '{}'", site_url);
        }

        Ok(Self {
            site_url,
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Microhabitat".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            slug_table_path: std::env::var("SLUG_TABLE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        })
    }
}
