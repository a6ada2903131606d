//! HTTP API exposing the site context to the page-rendering layer.

use crate::config::Config;
use crate::i18n::{AlternateSet, Locale};
use crate::routing::{negotiate_locale, RouteDecision};
use crate::seo::{
    breadcrumb_json_ld, BreadcrumbInput, BreadcrumbItem, OgImageKind, OgImageOptions, PageMetadata,
    PageSchema, SeoRecord,
};
use crate::site::{LocalizedPage, Site};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::de::value::StrDeserializer;
use serde::de::{DeserializeOwned, Deserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub type AppState = Arc<Site>;

/// Query parameters shared by page endpoints. Both are untrusted route
/// parameters; missing values mean the site root in the default locale.
#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    locale: Option<String>,
}

impl PageQuery {
    fn path(&self) -> &str {
        self.path.as_deref().unwrap_or("/")
    }

    fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataRequest {
    #[serde(flatten)]
    seo: SeoRecord,
    #[serde(default)]
    fallback_title: Option<String>,
    #[serde(default)]
    fallback_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OgImageQuery {
    #[serde(default)]
    title: String,
    subtitle: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    kind: Option<OgImageKind>,
    #[serde(default, deserialize_with = "lenient")]
    locale: Option<Locale>,
}

/// Deserialize an optional query value, dropping values that do not parse.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let value: StrDeserializer<'_, serde::de::value::Error> = value.as_str().into_deserializer();
        T::deserialize(value).ok()
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlternateResponse {
    locale: Locale,
    hreflang: &'static str,
    path: String,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlternatesResponse {
    current: Locale,
    canonical_path: String,
    links: Vec<AlternateResponse>,
    x_default: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreadcrumbsResponse {
    breadcrumbs: Vec<BreadcrumbItem>,
    json_ld: Value,
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/localize?path=/about&locale=fr`
async fn localize(State(site): State<AppState>, Query(query): Query<PageQuery>) -> Json<LocalizedPage> {
    Json(site.localize(query.locale(), query.path()))
}

/// `GET /api/alternates?path=/fr/a-propos&locale=fr`
async fn alternates(State(site): State<AppState>, Query(query): Query<PageQuery>) -> Json<AlternatesResponse> {
    let set: AlternateSet = site.alternates(query.locale(), query.path());
    let urls = site.urls();

    Json(AlternatesResponse {
        current: set.current,
        x_default: set.x_default().map(|link| urls.absolute(&link.path)),
        links: set
            .iter()
            .map(|link| AlternateResponse {
                locale: link.locale,
                hreflang: link.hreflang,
                url: urls.absolute(&link.path),
                path: link.path.clone(),
            })
            .collect(),
        canonical_path: set.canonical_path.clone(),
    })
}

/// `POST /api/metadata?path=/cities/montreal&locale=fr` with the CMS SEO
/// record as body.
async fn metadata(
    State(site): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(request): Json<MetadataRequest>,
) -> Json<PageMetadata> {
    let record = request.seo.with_fallbacks(
        request.fallback_title.as_deref(),
        request.fallback_description.as_deref(),
    );
    Json(site.page_metadata(&record, query.locale(), query.path()))
}

/// `POST /api/breadcrumbs?locale=fr` with `[{"name": "...", "path": "..."}]`
async fn breadcrumbs(
    State(site): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(items): Json<Vec<BreadcrumbInput>>,
) -> Json<BreadcrumbsResponse> {
    let breadcrumbs = site.breadcrumbs(&items, query.locale());
    let json_ld = breadcrumb_json_ld(&breadcrumbs);
    Json(BreadcrumbsResponse { breadcrumbs, json_ld })
}

/// `GET /api/route?path=/fr/a-propos`
async fn route(State(site): State<AppState>, Query(query): Query<PageQuery>) -> Json<RouteDecision> {
    Json(site.route(query.path()))
}

/// `GET /api/locale`: negotiate from `Accept-Language`.
async fn locale(headers: HeaderMap) -> Json<Value> {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = negotiate_locale(accept_language);

    Json(json!({
        "locale": locale,
        "nativeName": locale.native_name(),
        "ogLocale": locale.og_locale(),
    }))
}

/// `GET /api/og-image?title=...&subtitle=...&type=city&locale=fr`
async fn og_image(State(site): State<AppState>, Query(query): Query<OgImageQuery>) -> Json<Value> {
    let options = OgImageOptions {
        subtitle: query.subtitle,
        kind: query.kind,
        locale: query.locale,
    };

    Json(json!({ "url": site.og_image_url(&query.title, &options) }))
}

/// `GET /api/structured-data`: site-wide JSON-LD for the root layout.
async fn site_structured_data(State(site): State<AppState>) -> Json<Vec<Value>> {
    Json(site.site_schemas())
}

/// `POST /api/structured-data` with `{"type": "faq" | "article" | "service" |
/// "webPage" | "city", ...}`
async fn page_structured_data(
    State(site): State<AppState>,
    Json(schema): Json<PageSchema>,
) -> Json<Value> {
    Json(site.page_schema(&schema, Utc::now().date_naive()))
}

/// `GET /sitemap.xml`
async fn sitemap(State(site): State<AppState>) -> impl IntoResponse {
    let entries = site.sitemap(Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        crate::sitemap::render_sitemap_xml(&entries),
    )
}

/// `GET /robots.txt`
async fn robots(State(site): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], site.robots_txt())
}

/// Build the router with shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/localize", get(localize))
        .route("/api/alternates", get(alternates))
        .route("/api/metadata", post(metadata))
        .route("/api/breadcrumbs", post(breadcrumbs))
        .route("/api/route", get(route))
        .route("/api/locale", get(locale))
        .route("/api/og-image", get(og_image))
        .route(
            "/api/structured-data",
            get(site_structured_data).post(page_structured_data),
        )
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process exits.
pub async fn serve(config: &Config, site: Site) -> Result<()> {
    let app = build_router(Arc::new(site));
    let addr = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
