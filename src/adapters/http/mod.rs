//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full application: the health probe, the
//! recommendation API under `/api`, and the tower middleware stack.

pub mod recommendation;

use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::ServerConfig;

pub use recommendation::{recommendation_routes, RecommendationHandlers};

/// Builds the application router with tracing, timeout and CORS layers.
pub fn app_router(handlers: RecommendationHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(recommendation::handlers::health))
        .nest("/api", recommendation_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(cors_layer(server)),
        )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
