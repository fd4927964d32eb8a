//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use likemetric_api::config::ServerConfig;
use likemetric_api::router::build_app_router;
use likemetric_api::state::AppState;
use likemetric_core::widget::WidgetKind;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        public_base_url: "http://localhost:3000".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Dispatch a GET request and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).unwrap()
}

/// Insert a widget row with sensible active-announcement defaults.
pub async fn insert_widget(pool: &PgPool, kind: WidgetKind, id: &str, status: &str) {
    let query = format!(
        "INSERT INTO {} \
             (id, status, title, description, button_text, button_url, trigger_type, delay) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        kind.table_name()
    );
    sqlx::query(&query)
        .bind(id)
        .bind(status)
        .bind("Big launch")
        .bind("We shipped something new.")
        .bind("See it")
        .bind("https://example.com/launch")
        .bind("auto_show")
        .bind(1_000i64)
        .execute(pool)
        .await
        .expect("insert test widget");
}

/// Read the view counter for a widget.
pub async fn views(pool: &PgPool, kind: WidgetKind, id: &str) -> i64 {
    let query = format!("SELECT views FROM {} WHERE id = $1", kind.table_name());
    sqlx::query_scalar(&query)
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("read views")
}

/// Wait for the fire-and-forget view increment to land, up to ~2 seconds.
pub async fn wait_for_views(pool: &PgPool, kind: WidgetKind, id: &str, expected: i64) -> i64 {
    for _ in 0..40 {
        let current = views(pool, kind, id).await;
        if current >= expected {
            return current;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    views(pool, kind, id).await
}

/// Assert an embed response carries the script delivery headers.
pub fn assert_script_headers(response: &Response<Body>) {
    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/javascript"),
        "unexpected content type: {content_type}"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-cache"
    );
}

/// Convenience: response must be 200 with script headers.
pub fn assert_ok_script(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
    assert_script_headers(response);
}
