//! robots.txt policy.

use crate::seo::SiteUrls;
use std::fmt::Write;

/// One `User-agent` group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: &'static str,
    pub allow: Vec<&'static str>,
    pub disallow: Vec<&'static str>,
}

/// AI crawlers excluded from the whole site.
const BLOCKED_CRAWLERS: &[&str] = &[
    "GPTBot",
    "ChatGPT-User",
    "CCBot",
    "Google-Extended",
    "anthropic-ai",
    "Bytespider",
];

/// Default crawl rules.
pub fn default_rules() -> Vec<RobotsRule> {
    let mut rules = vec![RobotsRule {
        user_agent: "*",
        allow: vec!["/"],
        disallow: vec!["/api/", "/admin/", "/_next/"],
    }];

    rules.extend(BLOCKED_CRAWLERS.iter().map(|&agent| RobotsRule {
        user_agent: agent,
        allow: Vec::new(),
        disallow: vec!["/"],
    }));

    rules
}

/// Render robots.txt for the site.
pub fn render_robots_txt(rules: &[RobotsRule], urls: &SiteUrls) -> String {
    let mut out = String::new();

    for rule in rules {
        let _ = writeln!(out, "User-agent: {}", rule.user_agent);
        for path in &rule.allow {
            let _ = writeln!(out, "Allow: {}", path);
        }
        for path in &rule.disallow {
            let _ = writeln!(out, "Disallow: {}", path);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Host: {}", urls.origin());
    let _ = writeln!(out, "Sitemap: {}/sitemap.xml", urls.origin());
    out
}
