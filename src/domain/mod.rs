//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `cycle` - Preferences, phase definitions, catalogs and phase resolution
//! - `user` - The immutable user profile
//! - `recommendation` - Pure assembly of filtered recommendations

pub mod cycle;
pub mod foundation;
pub mod recommendation;
pub mod user;
