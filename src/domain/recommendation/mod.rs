//! Recommendation module - assembling phase recommendations for a profile.
//!
//! Pure and stateless: each call depends only on the profile, the catalog
//! and the reference day.

mod assembler;

pub use assembler::{
    PhaseRecommendation, RecommendationAssembler, RecommendationResult, NO_SAFE_FOODS,
};
