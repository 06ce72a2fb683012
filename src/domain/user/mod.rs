//! User module - the profile a recommendation is computed for.
//!
//! # Domain Invariants
//!
//! 1. A profile has a non-empty name
//! 2. Cycle and period lengths are positive
//! 3. The period is shorter than the cycle
//! 4. A profile never changes after construction

pub mod profile;

pub use profile::{
    parse_start_date, registry_key, UserProfile, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH,
    START_DATE_FORMAT,
};
