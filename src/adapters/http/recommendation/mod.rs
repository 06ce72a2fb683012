//! HTTP adapter for profile registration and recommendation lookups.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    AllergenList, ComputeRecommendationsRequest, ErrorResponse, FoodGroupResponse,
    ProfileCommandResponse, ProfileListResponse, ProfileRequest, RecommendationParams,
    RecommendationResponse, RegisterProfileRequest,
};
pub use handlers::RecommendationHandlers;
pub use routes::recommendation_routes;
