//! Breadcrumb trails for structured data.

use crate::i18n::Locale;
use crate::seo::structured_data::SCHEMA_CONTEXT;
use crate::seo::SiteUrls;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A breadcrumb as supplied by the page: display name and canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreadcrumbInput {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

impl BreadcrumbInput {
    pub fn new(name: &str, path: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            path: path.map(str::to_string),
        }
    }
}

/// A resolved breadcrumb. `url` is absent for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Build a breadcrumb trail anchored on a synthetic "Home" entry.
///
/// Non-final items get a URL when they carry a path; the final item never
/// does, which marks it as the current page.
pub fn build_breadcrumbs(urls: &SiteUrls, items: &[BreadcrumbInput], locale: Locale) -> Vec<BreadcrumbItem> {
    let mut breadcrumbs = Vec::with_capacity(items.len() + 1);
    breadcrumbs.push(BreadcrumbItem {
        name: "Home".to_string(),
        url: Some(urls.home_url(locale)),
    });

    let last = items.len().saturating_sub(1);
    for (index, item) in items.iter().enumerate() {
        let url = if index == last {
            None
        } else {
            item.path.as_deref().map(|path| urls.canonical_url(path, locale))
        };
        breadcrumbs.push(BreadcrumbItem {
            name: item.name.clone(),
            url,
        });
    }

    breadcrumbs
}

/// schema.org `BreadcrumbList` for embedding as JSON-LD.
pub fn breadcrumb_json_ld(breadcrumbs: &[BreadcrumbItem]) -> Value {
    let last = breadcrumbs.len().saturating_sub(1);
    let elements: Vec<Value> = breadcrumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            let mut element = json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": crumb.name,
            });
            if let (Some(url), true) = (&crumb.url, index < last) {
                element["item"] = json!(url);
            }
            element
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
