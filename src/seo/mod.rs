//! SEO field processing: length validation, keywords, URLs, breadcrumbs,
//! structured data and the page metadata contract.

mod breadcrumbs;
mod keywords;
mod limits;
mod metadata;
mod structured_data;
mod urls;
mod validator;

pub use breadcrumbs::{breadcrumb_json_ld, build_breadcrumbs, BreadcrumbInput, BreadcrumbItem};
pub use keywords::process_keywords;
pub use limits::SeoLimits;
pub use metadata::{
    log_warnings, process_seo_record, Alternates, OgImage, OpenGraph, PageMetadata, ProcessedSeo,
    Robots, SeoRecord, TwitterCard,
};
pub use structured_data::{
    article_schema, city_geo, city_schema, faq_schema, office_schemas, organization_schema,
    service_schema, site_schemas, web_page_schema, website_schema, ArticleInput, CityGeo, CityInput,
    FaqEntry, PageSchema, ServiceInput, WebPageInput,
};
pub use urls::{LanguageUrls, OgImageKind, OgImageOptions, SiteUrls};
pub use validator::{
    truncate_text, validate_description, validate_title, FieldValidation, ELLIPSIS,
};
