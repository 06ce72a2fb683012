//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `registry` - In-memory profile registry
//! - `http` - REST API (axum)
//! - `cli` - Interactive text menu

pub mod cli;
pub mod http;
pub mod registry;

pub use cli::Menu;
pub use http::{app_router, RecommendationHandlers};
pub use registry::{demo_profiles, InMemoryProfileRegistry};
