//! Registry Adapters
//!
//! Implementations of the ProfileRegistry port.
//!
//! - **InMemoryProfileRegistry** - Stores profiles in memory for the
//!   lifetime of the process

mod in_memory;

pub use in_memory::{demo_profiles, InMemoryProfileRegistry};
