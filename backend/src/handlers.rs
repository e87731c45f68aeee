use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shared::i18n::{lookup, Language};
use shared::schema::{complete_schema_set, schema_set_json, Schema};
use shared::seo::{escape_html, head_tags, PageKind, SeoMetadata};
use shared::sitemap::{render_sitemap_xml, robots_txt, sitemap_entries};
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;

/// Used when the frontend has not been built yet.
pub const FALLBACK_SHELL: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n</head>\n<body></body>\n</html>\n";

pub struct AppState {
    pub config: Config,
    pub index_template: String,
    /// Last time each client address was logged.
    pub visits: Mutex<HashMap<String, Instant>>,
}

impl AppState {
    pub fn new(config: Config, index_template: String) -> Self {
        Self {
            config,
            index_template,
            visits: Mutex::new(HashMap::new()),
        }
    }
}

pub type SharedState = Arc<AppState>;

pub async fn load_index_template(frontend_dist: &Path) -> Result<String, AppError> {
    let path = frontend_dist.join("index.html");
    let template = tokio::fs::read_to_string(&path).await?;
    debug!("Loaded index template from {}", path.display());
    Ok(template)
}

/// `/ja` is a language home; `/about` is an unprefixed English page.
pub fn resolve_segment(segment: &str) -> Option<(Language, PageKind)> {
    if let Some(language) = Language::from_code(segment) {
        return Some((language, PageKind::Home));
    }
    match PageKind::from_slug(segment)? {
        PageKind::Home => None,
        page => Some((Language::En, page)),
    }
}

pub fn resolve_localized(lang: &str, page: &str) -> Option<(Language, PageKind)> {
    let language = Language::from_code(lang)?;
    match PageKind::from_slug(page)? {
        PageKind::Home => None,
        page => Some((language, page)),
    }
}

/// Drops the template's own `<title>`, sets `<html lang>` and puts `head` right
/// before `</head>`.
pub fn inject_head(template: &str, head: &str, html_lang: &str) -> String {
    let mut html = template.to_string();

    if let (Some(start), Some(end)) = (html.find("<title>"), html.find("</title>")) {
        if start < end {
            html.replace_range(start..end + "</title>".len(), "");
        }
    }

    html = html.replacen("<html lang=\"en\"", &format!("<html lang=\"{}\"", html_lang), 1);

    match html.find("</head>") {
        Some(index) => {
            html.insert_str(index, &format!("    {}\n", head));
            html
        }
        None => format!("{}\n{}", head, html),
    }
}

pub fn render_page(template: &str, site_url: &str, language: Language, page: PageKind) -> Result<String, AppError> {
    let metadata = SeoMetadata::build(site_url, language, page);
    let json_ld = schema_set_json(site_url, language, page)?;
    let head = head_tags(&metadata, Some(&json_ld));
    Ok(inject_head(template, &head, language.html_lang()))
}

fn page_response(state: &AppState, language: Language, page: PageKind) -> Result<Response, AppError> {
    let body = render_page(&state.index_template, &state.config.site_url, language, page)?;
    Ok(Html(body).into_response())
}

pub async fn serve_home(State(state): State<SharedState>) -> Result<Response, AppError> {
    page_response(&state, Language::En, PageKind::Home)
}

pub async fn serve_segment(
    State(state): State<SharedState>,
    UrlPath(lang): UrlPath<String>,
) -> Result<Response, AppError> {
    match resolve_segment(&lang) {
        Some((language, page)) => page_response(&state, language, page),
        None => Ok(not_found_page(&state, Language::En)),
    }
}

pub async fn serve_localized_page(
    State(state): State<SharedState>,
    UrlPath((lang, page)): UrlPath<(String, String)>,
) -> Result<Response, AppError> {
    match resolve_localized(&lang, &page) {
        Some((language, page)) => page_response(&state, language, page),
        None => Ok(not_found_page(&state, Language::from_code(&lang).unwrap_or_default())),
    }
}

/// Language named by the first path segment, English otherwise.
pub fn path_language(path: &str) -> Language {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Language::from_code)
        .unwrap_or_default()
}

fn not_found_page(state: &AppState, language: Language) -> Response {
    let head = format!(
        "<title>{}</title>\n    <meta name=\"robots\" content=\"noindex\">",
        escape_html(lookup("notFoundTitle", language))
    );
    let body = inject_head(&state.index_template, &head, language.html_lang());
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

pub async fn fallback(State(state): State<SharedState>, uri: Uri) -> Response {
    not_found_page(&state, path_language(uri.path()))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn serve_sitemap(State(state): State<SharedState>) -> impl IntoResponse {
    let entries = sitemap_entries(&state.config.site_url, state.config.sitemap_last_modified);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap_xml(&entries),
    )
}

pub async fn serve_robots(State(state): State<SharedState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        robots_txt(&state.config.site_url),
    )
}

#[derive(Serialize)]
pub struct SeoResponse {
    pub metadata: SeoMetadata,
    pub json_ld: Vec<Schema>,
}

pub async fn seo_metadata(
    State(state): State<SharedState>,
    UrlPath((lang, page)): UrlPath<(String, String)>,
) -> Result<Json<SeoResponse>, AppError> {
    let language = Language::from_code(&lang).ok_or(AppError::NotFound)?;
    let page = PageKind::from_slug(&page).ok_or(AppError::NotFound)?;

    Ok(Json(SeoResponse {
        metadata: SeoMetadata::build(&state.config.site_url, language, page),
        json_ld: complete_schema_set(&state.config.site_url, language, page),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">\n<head>\n<title>Yes or No Wheel</title>\n<link rel=\"modulepreload\" href=\"/assets/frontend.js\">\n</head>\n<body></body>\n</html>\n";

    #[test]
    fn test_resolve_segment() {
        assert_eq!(resolve_segment("ru"), Some((Language::Ru, PageKind::Home)));
        assert_eq!(resolve_segment("contact"), Some((Language::En, PageKind::Contact)));
        assert_eq!(resolve_segment("home"), None);
        assert_eq!(resolve_segment("wp-admin"), None);
    }

    #[test]
    fn test_resolve_localized() {
        assert_eq!(resolve_localized("ja", "privacy"), Some((Language::Ja, PageKind::Privacy)));
        assert_eq!(resolve_localized("ja", "home"), None);
        assert_eq!(resolve_localized("de", "about"), None);
        assert_eq!(resolve_localized("es", "pricing"), None);
    }

    #[test]
    fn test_path_language() {
        assert_eq!(path_language("/ja/pricing"), Language::Ja);
        assert_eq!(path_language("/ru/a/b"), Language::Ru);
        assert_eq!(path_language("/fr/about"), Language::En);
        assert_eq!(path_language("/"), Language::En);
    }

    #[test]
    fn test_inject_head_replaces_title_and_lang() {
        let html = inject_head(TEMPLATE, "<title>Injected</title>", "ja");
        assert!(html.contains("<html lang=\"ja\" class=\"dark\">"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Injected</title>"));
        let injected = html.find("Injected").unwrap();
        assert!(injected < html.find("</head>").unwrap());
        assert!(html.contains("/assets/frontend.js"));
    }

    #[test]
    fn test_inject_head_without_head_tag() {
        let html = inject_head("<body></body>", "<title>x</title>", "en");
        assert!(html.starts_with("<title>x</title>"));
    }

    #[test]
    fn test_render_page_includes_seo_and_schema() {
        let html = render_page(TEMPLATE, "https://yesornowheel.com", Language::Es, PageKind::About).unwrap();
        assert!(html.contains(r#"<link rel="canonical" href="https://yesornowheel.com/es/about">"#));
        assert!(html.contains(r#"hreflang="x-default""#));
        assert!(html.contains(r#"<script type="application/ld+json" id="json-ld-schema">"#));
        assert!(html.contains("BreadcrumbList"));
        assert!(html.contains(r#"<meta property="og:locale" content="es_ES">"#));
    }
}
