//! schema.org structured data (JSON-LD) for the site and its pages.
//!
//! Each generator maps page data to a `serde_json::Value` ready to embed in a
//! `<script type="application/ld+json">` tag. Site-wide schemas (organization,
//! website, offices) reference each other through `@id` anchors on the origin.

use crate::i18n::{Locale, PathLocalizer};
use crate::seo::SiteUrls;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

pub(crate) const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Image used when a page supplies none.
const DEFAULT_IMAGE_PATH: &str = "/og-image.png";
const LOGO_PATH: &str = "/logo.png";
const LOGO_SIZE: u32 = 512;

const ALTERNATE_NAME: &str = "MicroHabitat";
const ORGANIZATION_DESCRIPTION: &str = "The world's largest urban farming network. \
     Transform underutilized urban spaces into thriving urban farms.";
const WEBSITE_DESCRIPTION: &str = "The world's largest urban farming network";
const FOUNDING_DATE: &str = "2016";
const FOUNDERS: &[&str] = &["Orlane", "Alexandre"];

/// Publication date assumed for pages that carry none.
const DEFAULT_DATE_PUBLISHED: &str = "2016-01-01";

const SOCIAL_PROFILES: &[&str] = &[
    "https://www.linkedin.com/company/microhabitat",
    "https://www.instagram.com/microhabitat",
    "https://twitter.com/microhabitat",
];

const COUNTRIES_SERVED: &[&str] = &[
    "Canada",
    "United States",
    "France",
    "Germany",
    "Netherlands",
    "Italy",
    "Spain",
    "United Kingdom",
];

/// Service pages advertise a narrower area than the organization.
const SERVICE_COUNTRIES: &[&str] = &["Canada", "United States", "France", "Germany", "Netherlands"];

const EXPERTISE: &[&str] = &[
    "Urban Farming",
    "Urban Agriculture",
    "Rooftop Farming",
    "Vertical Farming",
    "Sustainable Agriculture",
    "Green Building Certification",
    "ESG",
    "Corporate Sustainability",
];

const BUSINESS_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
const OPENS: &str = "09:00";
const CLOSES: &str = "17:00";
const PRICE_RANGE: &str = "$$";

/// Location of a city the company operates in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityGeo {
    pub slug: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Option<&'static str>,
    pub country: &'static str,
}

const fn city(
    slug: &'static str,
    latitude: f64,
    longitude: f64,
    region: Option<&'static str>,
    country: &'static str,
) -> CityGeo {
    CityGeo {
        slug,
        latitude,
        longitude,
        region,
        country,
    }
}

const CITY_GEO: &[CityGeo] = &[
    city("montreal", 45.5017, -73.5673, Some("QC"), "CA"),
    city("toronto", 43.6532, -79.3832, Some("ON"), "CA"),
    city("vancouver", 49.2827, -123.1207, Some("BC"), "CA"),
    city("calgary", 51.0447, -114.0719, Some("AB"), "CA"),
    city("edmonton", 53.5461, -113.4938, Some("AB"), "CA"),
    city("victoria", 48.4284, -123.3656, Some("BC"), "CA"),
    city("new-york", 40.7128, -74.0060, Some("NY"), "US"),
    city("chicago", 41.8781, -87.6298, Some("IL"), "US"),
    city("dallas", 32.7767, -96.7970, Some("TX"), "US"),
    city("los-angeles", 34.0522, -118.2437, Some("CA"), "US"),
    city("san-francisco", 37.7749, -122.4194, Some("CA"), "US"),
    city("washington-dc", 38.9072, -77.0369, Some("DC"), "US"),
    city("denver", 39.7392, -104.9903, Some("CO"), "US"),
    city("columbus", 39.9612, -82.9988, Some("OH"), "US"),
    city("seattle", 47.6062, -122.3321, Some("WA"), "US"),
    city("amsterdam", 52.3676, 4.9041, None, "NL"),
    city("berlin", 52.5200, 13.4050, None, "DE"),
    city("london", 51.5074, -0.1278, None, "GB"),
    city("paris", 48.8566, 2.3522, None, "FR"),
    city("zurich", 47.3769, 8.5417, None, "CH"),
];

/// Country used for cities without geo data.
const DEFAULT_COUNTRY: &str = "CA";

/// Geo data for a city slug, if known.
pub fn city_geo(slug: &str) -> Option<&'static CityGeo> {
    CITY_GEO.iter().find(|city| city.slug == slug)
}

/// An office listed as a `LocalBusiness` on every page.
struct Office {
    anchor: &'static str,
    label: &'static str,
    locality: &'static str,
    region: Option<&'static str>,
    country: &'static str,
    headquarters: bool,
}

const OFFICES: &[Office] = &[
    Office {
        anchor: "montreal-office",
        label: "Montreal (Headquarters)",
        locality: "Montreal",
        region: Some("QC"),
        country: "CA",
        headquarters: true,
    },
    Office {
        anchor: "toronto-office",
        label: "Toronto",
        locality: "Toronto",
        region: Some("ON"),
        country: "CA",
        headquarters: false,
    },
    Office {
        anchor: "newyork-office",
        label: "New York",
        locality: "New York",
        region: Some("NY"),
        country: "US",
        headquarters: false,
    },
    Office {
        anchor: "paris-office",
        label: "Paris",
        locality: "Paris",
        region: None,
        country: "FR",
        headquarters: false,
    },
];

/// One question of an FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A blog article. `url` may be absolute or a site path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub date_published: String,
    pub date_modified: Option<String>,
}

/// A service page, with optional feature list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub service_type: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Any page. `locale` is an untrusted route parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPageInput {
    pub url: String,
    pub name: String,
    pub description: Option<String>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub locale: Option<String>,
}

/// A city detail page, by city slug.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInput {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub locale: Option<String>,
}

/// Per-page schema request, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageSchema {
    Faq { faqs: Vec<FaqEntry> },
    Article(ArticleInput),
    Service(ServiceInput),
    WebPage(WebPageInput),
    City(CityInput),
}

fn organization_id(urls: &SiteUrls) -> String {
    format!("{}/#organization", urls.origin())
}

fn website_id(urls: &SiteUrls) -> String {
    format!("{}/#website", urls.origin())
}

fn default_image(urls: &SiteUrls) -> String {
    urls.absolute(DEFAULT_IMAGE_PATH)
}

/// Absolute URLs pass through; paths are resolved against the origin.
fn page_url(urls: &SiteUrls, url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        urls.absolute(url)
    }
}

fn countries(names: &[&str]) -> Vec<Value> {
    names
        .iter()
        .map(|name| json!({ "@type": "Country", "name": name }))
        .collect()
}

fn opening_hours() -> Value {
    json!({
        "@type": "OpeningHoursSpecification",
        "dayOfWeek": BUSINESS_DAYS,
        "opens": OPENS,
        "closes": CLOSES,
    })
}

fn geo_coordinates(geo: &CityGeo) -> Value {
    json!({
        "@type": "GeoCoordinates",
        "latitude": geo.latitude,
        "longitude": geo.longitude,
    })
}

/// The `Organization` schema, anchored at `{origin}/#organization`.
pub fn organization_schema(urls: &SiteUrls, site_name: &str) -> Value {
    let founders: Vec<Value> = FOUNDERS
        .iter()
        .map(|name| json!({ "@type": "Person", "name": name }))
        .collect();
    let languages: Vec<&str> = Locale::ALL.iter().map(|locale| locale.name()).collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "@id": organization_id(urls),
        "name": site_name,
        "alternateName": ALTERNATE_NAME,
        "url": urls.origin(),
        "logo": {
            "@type": "ImageObject",
            "url": urls.absolute(LOGO_PATH),
            "width": LOGO_SIZE,
            "height": LOGO_SIZE,
        },
        "image": default_image(urls),
        "description": ORGANIZATION_DESCRIPTION,
        "foundingDate": FOUNDING_DATE,
        "founders": founders,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Montreal",
            "addressRegion": "QC",
            "addressCountry": "CA",
        },
        "contactPoint": [{
            "@type": "ContactPoint",
            "contactType": "customer service",
            "availableLanguage": languages,
        }],
        "sameAs": SOCIAL_PROFILES,
        "areaServed": countries(COUNTRIES_SERVED),
        "knowsAbout": EXPERTISE,
    })
}

/// The `WebSite` schema, published by the organization.
pub fn website_schema(urls: &SiteUrls, site_name: &str) -> Value {
    let codes: Vec<&str> = Locale::ALL.iter().map(|locale| locale.code()).collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "@id": website_id(urls),
        "url": urls.origin(),
        "name": site_name,
        "description": WEBSITE_DESCRIPTION,
        "publisher": { "@id": organization_id(urls) },
        "inLanguage": codes,
    })
}

/// One `LocalBusiness` per office. The headquarters carries coordinates,
/// an image and opening hours.
pub fn office_schemas(urls: &SiteUrls, site_name: &str) -> Vec<Value> {
    OFFICES
        .iter()
        .map(|office| {
            let mut schema = json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "LocalBusiness",
                "@id": format!("{}/#{}", urls.origin(), office.anchor),
                "name": format!("{} - {}", site_name, office.label),
                "url": urls.origin(),
                "address": {
                    "@type": "PostalAddress",
                    "addressLocality": office.locality,
                    "addressCountry": office.country,
                },
                "parentOrganization": { "@id": organization_id(urls) },
            });
            if let Some(region) = office.region {
                schema["address"]["addressRegion"] = json!(region);
            }
            if office.headquarters {
                schema["image"] = json!(default_image(urls));
                schema["openingHoursSpecification"] = opening_hours();
                if let Some(geo) = city_geo("montreal") {
                    schema["geo"] = geo_coordinates(geo);
                }
            }
            schema
        })
        .collect()
}

/// Everything embedded in the root layout: organization, website, offices.
pub fn site_schemas(urls: &SiteUrls, site_name: &str) -> Vec<Value> {
    let mut schemas = vec![organization_schema(urls, site_name), website_schema(urls, site_name)];
    schemas.extend(office_schemas(urls, site_name));
    schemas
}

/// `FAQPage` with one `Question` per entry, in order.
pub fn faq_schema(faqs: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `Article` authored and published by the organization.
///
/// A missing image falls back to the site image and a missing modification
/// date to the publication date.
pub fn article_schema(urls: &SiteUrls, site_name: &str, article: &ArticleInput) -> Value {
    let url = page_url(urls, &article.url);

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": article.title,
        "description": article.description,
        "url": url,
        "image": article.image.clone().unwrap_or_else(|| default_image(urls)),
        "datePublished": article.date_published,
        "dateModified": article.date_modified.as_deref().unwrap_or(&article.date_published),
        "author": {
            "@type": "Organization",
            "name": site_name,
            "url": urls.origin(),
        },
        "publisher": { "@id": organization_id(urls) },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// `Service` provided by the organization. Features, when present, become
/// an `OfferCatalog`.
pub fn service_schema(urls: &SiteUrls, service: &ServiceInput) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Service",
        "name": service.name,
        "description": service.description,
        "url": page_url(urls, &service.url),
        "image": service.image.clone().unwrap_or_else(|| default_image(urls)),
        "provider": { "@id": organization_id(urls) },
        "areaServed": countries(SERVICE_COUNTRIES),
    });

    if let Some(service_type) = &service.service_type {
        schema["serviceType"] = json!(service_type);
    }

    if !service.features.is_empty() {
        let offers: Vec<Value> = service
            .features
            .iter()
            .map(|feature| {
                json!({
                    "@type": "Offer",
                    "itemOffered": { "@type": "Service", "name": feature },
                })
            })
            .collect();
        schema["hasOfferCatalog"] = json!({
            "@type": "OfferCatalog",
            "name": format!("{} Features", service.name),
            "itemListElement": offers,
        });
    }

    schema
}

/// `WebPage` belonging to the website.
///
/// `today` stands in for a missing modification date.
pub fn web_page_schema(urls: &SiteUrls, page: &WebPageInput, today: NaiveDate) -> Value {
    let url = page_url(urls, &page.url);
    let locale = Locale::resolve(page.locale.as_deref().unwrap_or(""));

    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "@id": format!("{}#webpage", url),
        "url": url,
        "name": page.name,
        "isPartOf": { "@id": website_id(urls) },
        "datePublished": page.date_published.as_deref().unwrap_or(DEFAULT_DATE_PUBLISHED),
        "dateModified": page
            .date_modified
            .clone()
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
        "inLanguage": locale.code(),
        "potentialAction": {
            "@type": "ReadAction",
            "target": [url],
        },
    });

    if let Some(description) = &page.description {
        schema["description"] = json!(description);
    }

    schema
}

/// `LocalBusiness` for a city page, linked to the organization.
///
/// The URL is the city page's localized URL. Cities without geo data get
/// no coordinates or region and default to Canada.
pub fn city_schema(
    paths: &PathLocalizer<'_>,
    urls: &SiteUrls,
    site_name: &str,
    city: &CityInput,
) -> Value {
    let locale = Locale::resolve(city.locale.as_deref().unwrap_or(""));
    let url = urls.absolute(&paths.localize_path(&format!("/cities/{}", city.slug), locale));
    let geo = city_geo(&city.slug);

    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "@id": format!("{}#localbusiness", url),
        "name": format!("{} - {}", site_name, city.name),
        "description": city.description,
        "url": url,
        "image": default_image(urls),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": city.name,
            "addressCountry": geo.map(|g| g.country).unwrap_or(DEFAULT_COUNTRY),
        },
        "areaServed": { "@type": "City", "name": city.name },
        "parentOrganization": { "@id": organization_id(urls) },
        "priceRange": PRICE_RANGE,
        "openingHoursSpecification": opening_hours(),
    });

    if let Some(geo) = geo {
        schema["geo"] = geo_coordinates(geo);
        if let Some(region) = geo.region {
            schema["address"]["addressRegion"] = json!(region);
        }
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SlugTable;

    const ORIGIN: &str = "https://www.microhabitat.com";

    fn urls() -> SiteUrls {
        SiteUrls::new(ORIGIN)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    // ==================== Site Schema Tests ====================

    #[test]
    fn test_organization_schema() {
        let schema = organization_schema(&urls(), "Microhabitat");

        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["@id"], format!("{}/#organization", ORIGIN));
        assert_eq!(schema["logo"]["url"], format!("{}/logo.png", ORIGIN));
        assert_eq!(schema["founders"].as_array().unwrap().len(), 2);
        assert_eq!(schema["areaServed"].as_array().unwrap().len(), 8);
        assert_eq!(schema["contactPoint"][0]["availableLanguage"][3], "Dutch");
    }

    #[test]
    fn test_website_schema_lists_every_locale() {
        let schema = website_schema(&urls(), "Microhabitat");

        assert_eq!(schema["@id"], format!("{}/#website", ORIGIN));
        assert_eq!(schema["publisher"]["@id"], format!("{}/#organization", ORIGIN));
        assert_eq!(schema["inLanguage"], json!(["en", "fr", "de", "nl", "it", "es"]));
    }

    #[test]
    fn test_office_schemas() {
        let offices = office_schemas(&urls(), "Microhabitat");

        assert_eq!(offices.len(), 4);
        assert_eq!(offices[0]["name"], "Microhabitat - Montreal (Headquarters)");
        assert_eq!(offices[0]["geo"]["latitude"], 45.5017);
        assert_eq!(offices[0]["openingHoursSpecification"]["opens"], "09:00");
        assert!(offices[1].get("geo").is_none());
        assert!(offices[3]["address"].get("addressRegion").is_none());
        assert_eq!(offices[3]["address"]["addressCountry"], "FR");
    }

    #[test]
    fn test_site_schemas_order() {
        let schemas = site_schemas(&urls(), "Microhabitat");
        let types: Vec<_> = schemas.iter().map(|s| s["@type"].as_str().unwrap()).collect();
        assert_eq!(
            types,
            vec!["Organization", "WebSite", "LocalBusiness", "LocalBusiness", "LocalBusiness", "LocalBusiness"]
        );
    }

    // ==================== Page Schema Tests ====================

    #[test]
    fn test_faq_schema() {
        let faqs = vec![
            FaqEntry {
                question: "Do you farm on rooftops?".to_string(),
                answer: "Yes, and in courtyards.".to_string(),
            },
            FaqEntry {
                question: "Who harvests?".to_string(),
                answer: "Our urban farmers.".to_string(),
            },
        ];
        let schema = faq_schema(&faqs);

        assert_eq!(schema["@type"], "FAQPage");
        let questions = schema["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1]["name"], "Who harvests?");
        assert_eq!(questions[1]["acceptedAnswer"]["text"], "Our urban farmers.");
    }

    #[test]
    fn test_faq_schema_empty() {
        assert_eq!(faq_schema(&[])["mainEntity"], json!([]));
    }

    #[test]
    fn test_article_schema_defaults() {
        let article = ArticleInput {
            title: "Five crops for shaded rooftops".to_string(),
            description: "What grows where the sun does not".to_string(),
            url: "/blog/shaded-rooftops".to_string(),
            image: None,
            date_published: "2026-05-01".to_string(),
            date_modified: None,
        };
        let schema = article_schema(&urls(), "Microhabitat", &article);

        assert_eq!(schema["url"], format!("{}/blog/shaded-rooftops", ORIGIN));
        assert_eq!(schema["mainEntityOfPage"]["@id"], schema["url"]);
        assert_eq!(schema["image"], format!("{}/og-image.png", ORIGIN));
        assert_eq!(schema["dateModified"], "2026-05-01");
        assert_eq!(schema["author"]["name"], "Microhabitat");
    }

    #[test]
    fn test_article_schema_keeps_absolute_url() {
        let article = ArticleInput {
            title: "t".to_string(),
            description: "d".to_string(),
            url: "https://blog.example.com/post".to_string(),
            image: Some("https://cdn.example.com/p.jpg".to_string()),
            date_published: "2026-05-01".to_string(),
            date_modified: Some("2026-06-01".to_string()),
        };
        let schema = article_schema(&urls(), "Microhabitat", &article);

        assert_eq!(schema["url"], "https://blog.example.com/post");
        assert_eq!(schema["image"], "https://cdn.example.com/p.jpg");
        assert_eq!(schema["dateModified"], "2026-06-01");
    }

    #[test]
    fn test_service_schema_with_features() {
        let service = ServiceInput {
            name: "Outdoor Farm".to_string(),
            description: "Turnkey rooftop farms".to_string(),
            url: "/outdoor-farm".to_string(),
            image: None,
            service_type: Some("Urban Farming".to_string()),
            features: vec!["Installation".to_string(), "Maintenance".to_string()],
        };
        let schema = service_schema(&urls(), &service);

        assert_eq!(schema["serviceType"], "Urban Farming");
        assert_eq!(schema["areaServed"].as_array().unwrap().len(), 5);
        assert_eq!(schema["hasOfferCatalog"]["name"], "Outdoor Farm Features");
        assert_eq!(
            schema["hasOfferCatalog"]["itemListElement"][1]["itemOffered"]["name"],
            "Maintenance"
        );
    }

    #[test]
    fn test_service_schema_without_features() {
        let service = ServiceInput {
            name: "Indoor Farm".to_string(),
            description: "Farms for lobbies".to_string(),
            url: "/indoor-farm".to_string(),
            image: None,
            service_type: None,
            features: Vec::new(),
        };
        let schema = service_schema(&urls(), &service);

        assert!(schema.get("hasOfferCatalog").is_none());
        assert!(schema.get("serviceType").is_none());
    }

    #[test]
    fn test_web_page_schema_defaults() {
        let page = WebPageInput {
            url: "/fr/a-propos".to_string(),
            name: "À propos".to_string(),
            description: None,
            date_published: None,
            date_modified: None,
            locale: Some("fr".to_string()),
        };
        let schema = web_page_schema(&urls(), &page, today());

        assert_eq!(schema["@id"], format!("{}/fr/a-propos#webpage", ORIGIN));
        assert_eq!(schema["isPartOf"]["@id"], format!("{}/#website", ORIGIN));
        assert_eq!(schema["datePublished"], "2016-01-01");
        assert_eq!(schema["dateModified"], "2026-10-15");
        assert_eq!(schema["inLanguage"], "fr");
        assert_eq!(schema["potentialAction"]["target"][0], format!("{}/fr/a-propos", ORIGIN));
        assert!(schema.get("description").is_none());
    }

    #[test]
    fn test_web_page_schema_unknown_locale() {
        let page = WebPageInput {
            url: "/faq".to_string(),
            name: "FAQ".to_string(),
            description: Some("Questions".to_string()),
            date_published: Some("2020-02-02".to_string()),
            date_modified: Some("2021-03-03".to_string()),
            locale: Some("pt".to_string()),
        };
        let schema = web_page_schema(&urls(), &page, today());

        assert_eq!(schema["inLanguage"], "en");
        assert_eq!(schema["dateModified"], "2021-03-03");
        assert_eq!(schema["description"], "Questions");
    }

    #[test]
    fn test_city_schema_known_city() {
        let slugs = SlugTable::builtin();
        let paths = PathLocalizer::new(&slugs);
        let city = CityInput {
            slug: "toronto".to_string(),
            name: "Toronto".to_string(),
            description: "Urban farms in Toronto".to_string(),
            locale: Some("fr".to_string()),
        };
        let schema = city_schema(&paths, &urls(), "Microhabitat", &city);

        assert_eq!(schema["url"], format!("{}/fr/villes/toronto", ORIGIN));
        assert_eq!(schema["@id"], format!("{}/fr/villes/toronto#localbusiness", ORIGIN));
        assert_eq!(schema["name"], "Microhabitat - Toronto");
        assert_eq!(schema["address"]["addressRegion"], "ON");
        assert_eq!(schema["geo"]["longitude"], -79.3832);
        assert_eq!(schema["priceRange"], "$$");
    }

    #[test]
    fn test_city_schema_unknown_city() {
        let slugs = SlugTable::builtin();
        let paths = PathLocalizer::new(&slugs);
        let city = CityInput {
            slug: "lyon".to_string(),
            name: "Lyon".to_string(),
            description: "Urban farms in Lyon".to_string(),
            locale: None,
        };
        let schema = city_schema(&paths, &urls(), "Microhabitat", &city);

        assert_eq!(schema["url"], format!("{}/cities/lyon", ORIGIN));
        assert_eq!(schema["address"]["addressCountry"], "CA");
        assert!(schema.get("geo").is_none());
        assert!(schema["address"].get("addressRegion").is_none());
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_page_schema_tagged_by_type() {
        let schema: PageSchema = serde_json::from_str(
            r#"{"type": "webPage", "url": "/faq", "name": "FAQ", "dateModified": "2026-01-01"}"#,
        )
        .unwrap();
        assert!(matches!(schema, PageSchema::WebPage(ref page) if page.date_modified.as_deref() == Some("2026-01-01")));

        let schema: PageSchema =
            serde_json::from_str(r#"{"type": "faq", "faqs": [{"question": "q", "answer": "a"}]}"#).unwrap();
        assert!(matches!(schema, PageSchema::Faq { ref faqs } if faqs.len() == 1));
    }

    #[test]
    fn test_city_geo_lookup() {
        assert_eq!(city_geo("zurich").map(|g| g.country), Some("CH"));
        assert!(city_geo("atlantis").is_none());
    }
}
