//! Profile application handlers.
//!
//! Command and query handlers for registering profiles and computing
//! their recommendations.

mod compute_recommendations;
mod get_recommendations;
mod list_profiles;
mod register_profile;

pub use compute_recommendations::{ComputeRecommendationsHandler, ComputeRecommendationsQuery};
pub use get_recommendations::{GetRecommendationsHandler, GetRecommendationsQuery};
pub use list_profiles::ListProfilesHandler;
pub use register_profile::{
    ProfileInput, RegisterProfileCommand, RegisterProfileHandler, RegisterProfileResult,
};
