//! HTTP routes for profile and recommendation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    compute_recommendations, get_recommendations, list_profiles, register_profile,
    RecommendationHandlers,
};

/// Creates the recommendation router with all endpoints.
pub fn recommendation_routes(handlers: RecommendationHandlers) -> Router {
    Router::new()
        .route("/profiles", post(register_profile).get(list_profiles))
        .route("/profiles/:name/recommendations", get(get_recommendations))
        .route("/recommendations", post(compute_recommendations))
        .with_state(handlers)
}
