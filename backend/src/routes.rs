use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info, warn};

use crate::handlers::{self, SharedState};

// Time before the same client address is logged again
const VISIT_LOG_EXPIRY: Duration = Duration::from_secs(3600);
// Addresses come from request headers, so the dedupe window has a hard cap
const MAX_TRACKED_CLIENTS: usize = 1024;

/// Prefers `cf-connecting-ip`, then the first `x-forwarded-for` hop, then `x-real-ip`.
pub fn client_ip(headers: &HeaderMap) -> String {
    let value_of = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());

    if let Some(ip) = value_of("cf-connecting-ip") {
        return ip.trim().to_string();
    }
    if let Some(forwarded) = value_of("x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }
    if let Some(ip) = value_of("x-real-ip") {
        return ip.trim().to_string();
    }
    "unknown".to_string()
}

/// Returns `true` when `ip` has not been seen within the expiry window.
/// Expired addresses are dropped on every insert. Once the window is full, new
/// addresses are not tracked and are reported as repeat visits.
fn record_visit(visits: &mut HashMap<String, Instant>, ip: &str, now: Instant) -> bool {
    if let Some(last) = visits.get(ip) {
        if now.duration_since(*last) < VISIT_LOG_EXPIRY {
            return false;
        }
    }

    visits.retain(|_, last| now.duration_since(*last) < VISIT_LOG_EXPIRY);
    if visits.len() >= MAX_TRACKED_CLIENTS {
        debug!("Visit window full ({} clients), not tracking {}", visits.len(), ip);
        return false;
    }

    visits.insert(ip.to_string(), now);
    true
}

async fn log_visit_middleware(
    State(state): State<SharedState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let ip = client_ip(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed = started.elapsed();

    if path.starts_with("/assets/") || path.starts_with("/static/") {
        debug!("{} {} -> {} in {:?}", method, path, status, elapsed);
        return response;
    }

    let first_visit = {
        let mut visits = state.visits.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        record_visit(&mut visits, &ip, Instant::now())
    };

    if path == "/robots.txt" {
        info!("🤖 Robots.txt request: IP={}, User-Agent=\"{}\"", ip, user_agent);
    } else if first_visit {
        info!("👋 Website visit: {} {} {} -> {} in {:?}", ip, method, path, status, elapsed);
    } else {
        debug!("{} {} {} -> {} in {:?}", ip, method, path, status, elapsed);
    }

    response
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE])
}

pub fn create_router(state: SharedState) -> Router {
    let config = &state.config;

    // Trunk hashes bundle file names, so they never change under the same URL
    let assets = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    )
    .layer(ServeDir::new(&config.frontend_dist));

    let static_files = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400"),
    )
    .layer(ServeDir::new(&config.static_dir));

    let cors = cors_layer(&config.allowed_origins);

    Router::new()
        .route("/api/health_check", get(handlers::health_check))
        .route("/api/seo/:lang/:page", get(handlers::seo_metadata))
        .route("/sitemap.xml", get(handlers::serve_sitemap))
        .route("/robots.txt", get(handlers::serve_robots))
        .nest_service("/assets", assets)
        .nest_service("/static", static_files)
        .route("/", get(handlers::serve_home))
        .route("/:lang", get(handlers::serve_segment))
        .route("/:lang/:page", get(handlers::serve_localized_page))
        .fallback(handlers::fallback)
        .layer(cors)
        .layer(middleware::from_fn_with_state(state.clone(), log_visit_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::AppState;
    use axum::http::StatusCode;
    use serde_json::Value;
    use shared::i18n::{lookup, Language};
    use std::sync::Arc;
    use tower::ServiceExt;

    const TEMPLATE: &str = "<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">\n<head>\n<title>Yes or No Wheel</title>\n</head>\n<body></body>\n</html>\n";

    fn test_state() -> SharedState {
        let vars: HashMap<&str, &str> = [
            ("FRONTEND_DIST", "/nonexistent/dist"),
            ("STATIC_DIR", "/nonexistent/static"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        Arc::new(AppState::new(config, TEMPLATE.to_string()))
    }

    async fn get_request(state: &SharedState, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, HeaderMap, String) {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = create_router(state.clone())
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_client_ip_precedence() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers), "unknown");
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.3"));
        assert_eq!(client_ip(&headers), "10.0.0.3");
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.2, 172.16.0.1"));
        assert_eq!(client_ip(&headers), "10.0.0.2");
        headers.insert("cf-connecting-ip", HeaderValue::from_static(" 10.0.0.1 "));
        assert_eq!(client_ip(&headers), "10.0.0.1");
    }

    #[tokio::test]
    async fn test_home_has_injected_head() {
        let state = test_state();
        let (status, headers, body) = get_request(&state, "/", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
        assert!(body.contains(r#"<link rel="canonical" href="https://yesornowheel.com">"#));
        assert!(body.contains("FAQPage"));
        assert_eq!(body.matches("<title>").count(), 1);
    }

    #[tokio::test]
    async fn test_localized_and_unprefixed_pages() {
        let state = test_state();

        let (status, _, body) = get_request(&state, "/ja/about", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<html lang=\"ja\""));
        assert!(body.contains(r#"href="https://yesornowheel.com/ja/about""#));

        let (status, _, body) = get_request(&state, "/about", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<link rel="canonical" href="https://yesornowheel.com/about">"#));

        let (status, _, body) = get_request(&state, "/ru", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<link rel="canonical" href="https://yesornowheel.com/ru">"#));
    }

    #[tokio::test]
    async fn test_unknown_pages_are_404_shell() {
        let state = test_state();
        for uri in ["/fr", "/ja/pricing", "/en/home", "/a/b/c"] {
            let (status, _, body) = get_request(&state, uri, &[]).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(body.contains(r#"<meta name="robots" content="noindex">"#), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_sitemap_and_robots() {
        let state = test_state();

        let (status, headers, body) = get_request(&state, "/sitemap.xml", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/xml; charset=utf-8");
        assert!(body.contains("<urlset"));
        assert!(body.contains("<lastmod>2025-11-26</lastmod>"));

        let (status, _, body) = get_request(&state, "/robots.txt", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.ends_with("Sitemap: https://yesornowheel.com/sitemap.xml\n"));
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = test_state();
        let (status, _, body) = get_request(&state, "/api/health_check", &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_seo_api() {
        let state = test_state();

        let (status, _, body) = get_request(&state, "/api/seo/ru/privacy", &[]).await;
        assert_eq!(status, StatusCode::OK);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["metadata"]["language"], "ru");
        assert_eq!(value["metadata"]["canonical"], "https://yesornowheel.com/ru/privacy");
        assert_eq!(value["json_ld"].as_array().unwrap().len(), 4);

        let (status, _, body) = get_request(&state, "/api/seo/xx/about", &[]).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"], "Not found");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let state = test_state();
        let (_, headers, _) = get_request(&state, "/api/health_check", &[("origin", "https://yesornowheel.com")]).await;
        assert_eq!(headers["access-control-allow-origin"], "https://yesornowheel.com");

        let (_, headers, _) = get_request(&state, "/api/health_check", &[("origin", "https://evil.example")]).await;
        assert!(headers.get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn test_visits_are_recorded_per_client() {
        let state = test_state();
        get_request(&state, "/", &[("x-forwarded-for", "203.0.113.7")]).await;
        get_request(&state, "/es", &[("x-forwarded-for", "203.0.113.7")]).await;

        let visits = state.visits.lock().unwrap();
        assert_eq!(visits.len(), 1);
        assert!(visits.contains_key("203.0.113.7"));
    }

    #[tokio::test]
    async fn test_spoofed_addresses_cannot_grow_visit_window() {
        let state = test_state();
        for i in 0..(MAX_TRACKED_CLIENTS + 500) {
            let ip = format!("spoof-{}", i);
            get_request(&state, "/api/health_check", &[("x-forwarded-for", ip.as_str())]).await;
        }

        let visits = state.visits.lock().unwrap();
        assert_eq!(visits.len(), MAX_TRACKED_CLIENTS);
        assert!(!visits.contains_key(&format!("spoof-{}", MAX_TRACKED_CLIENTS)));
    }

    #[test]
    fn test_expired_visits_are_pruned() {
        let mut visits = HashMap::new();
        let start = Instant::now();

        assert!(record_visit(&mut visits, "198.51.100.1", start));
        assert!(record_visit(&mut visits, "198.51.100.2", start + Duration::from_secs(60)));
        assert!(!record_visit(&mut visits, "198.51.100.1", start + Duration::from_secs(120)));

        let later = start + VISIT_LOG_EXPIRY + Duration::from_secs(30);
        assert!(record_visit(&mut visits, "198.51.100.3", later));
        assert_eq!(visits.len(), 2);
        assert!(!visits.contains_key("198.51.100.1"));

        assert!(record_visit(&mut visits, "198.51.100.1", later));
    }

    #[test]
    fn test_full_window_frees_up_after_expiry() {
        let mut visits = HashMap::new();
        let start = Instant::now();
        for i in 0..MAX_TRACKED_CLIENTS {
            assert!(record_visit(&mut visits, &format!("10.1.{}.{}", i / 256, i % 256), start));
        }

        assert!(!record_visit(&mut visits, "192.0.2.1", start));
        assert_eq!(visits.len(), MAX_TRACKED_CLIENTS);

        assert!(record_visit(&mut visits, "192.0.2.1", start + VISIT_LOG_EXPIRY));
        assert_eq!(visits.len(), 1);
    }

    #[tokio::test]
    async fn test_not_found_shell_uses_path_language() {
        let state = test_state();

        let (status, _, body) = get_request(&state, "/ja/pricing", &[]).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains(&format!("<title>{}</title>", lookup("notFoundTitle", Language::Ja))));
        assert!(body.contains("<html lang=\"ja\""));

        let (_, _, body) = get_request(&state, "/es/a/b", &[]).await;
        assert!(body.contains(&format!("<title>{}</title>", lookup("notFoundTitle", Language::Es))));

        let (_, _, body) = get_request(&state, "/wp-admin", &[]).await;
        assert!(body.contains("<title>Page not found</title>"));
        assert!(body.contains("<html lang=\"en\""));
    }
}
