//! Router construction for the portfolio site

use std::path::Path;

use axum::body::Body;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use folio_core_types::RequestId;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the router: pages, the JSON API, health, then static files
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/cv", get(handlers::pages::cv))
        .route("/projects", get(handlers::pages::projects))
        .route("/api/projects", get(handlers::api::projects))
        .route("/healthz", get(handlers::health::healthz))
        .fallback_service(ServeDir::new(public_dir))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<Body>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .cloned()
                    .unwrap_or_default();
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        // Outermost, so the trace span and handlers both see the id
        .layer(middleware::from_fn(assign_request_id))
        .with_state(state)
}

/// Reuse an inbound `x-request-id` or mint one, and echo it on the response
async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| RequestId::from_string(value.to_string()))
        .unwrap_or_default();
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
