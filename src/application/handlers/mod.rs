//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;

pub use profile::{
    ComputeRecommendationsHandler, ComputeRecommendationsQuery, GetRecommendationsHandler,
    GetRecommendationsQuery, ListProfilesHandler, ProfileInput, RegisterProfileCommand,
    RegisterProfileHandler, RegisterProfileResult,
};
