#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use paragliding_core::registry::TrackRegistry;
use paragliding_core::source::MemoryTrackSource;
use tower::ServiceExt;

use paragliding_api::config::ServerConfig;
use paragliding_api::router::{build_app_router, build_state};

pub const FLIGHT1_URL: &str = "https://example.org/flight1.igc";
pub const FLIGHT2_URL: &str = "https://example.org/flight2.igc";

/// Two short fixes one degree of latitude apart.
pub const FLIGHT1_IGC: &str = "AXCT7f3b6d4a1c2e\n\
    HFDTE190216\n\
    HFPLTPILOTINCHARGE:Miguel Angel Gordillo\n\
    HFGTYGLIDERTYPE:RV8\n\
    HFGIDGLIDERID:EC-XLL\n\
    B1100000000000N00000000EA0010000100\n\
    B1101000100000N00000000EA0010000100\n";

pub const FLIGHT2_IGC: &str = "AXXX002\n\
    HFDTEDATE:050723,01\n\
    HFPLTPILOTINCHARGE:Jane Doe\n\
    HFGTYGLIDERTYPE:Ozone Rush 6\n\
    HFGIDGLIDERID:D-1234\n";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        fetch_timeout_secs: 5,
        max_track_bytes: 1024 * 1024,
        track_info_cache: true,
    }
}

/// In-memory source serving both fixture flights.
pub async fn fixture_source() -> Arc<MemoryTrackSource> {
    let source = Arc::new(MemoryTrackSource::new());
    source.insert(FLIGHT1_URL, FLIGHT1_IGC).await;
    source.insert(FLIGHT2_URL, FLIGHT2_IGC).await;
    source
}

/// Build the full application router over `source`, through the same
/// builder production uses.
pub fn build_test_app(source: Arc<MemoryTrackSource>, config: ServerConfig) -> Router {
    let registry = TrackRegistry::new(source).with_info_cache(config.track_info_cache);
    build_app_router(build_state(registry, config)).expect("test router builds")
}

pub async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `POST /api/track` URI registering `url`, with the query string encoded.
pub fn register_uri(url: &str) -> String {
    let uri = reqwest::Url::parse_with_params("http://localhost/api/track", &[("url", url)])
        .expect("valid registration URI");
    format!("{}?{}", uri.path(), uri.query().unwrap_or_default())
}
