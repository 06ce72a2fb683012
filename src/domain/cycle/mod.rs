//! Cycle module - phase definitions, catalogs and phase resolution.
//!
//! # Domain Invariants
//!
//! 1. A phase's day range is non-empty and starts on day 1 or later
//! 2. A validated catalog partitions `1..=cycle_length` in phase order
//! 3. Allergen matching is exact and case-insensitive
//! 4. Filtering keeps category and food order, including emptied categories
//! 5. A day no phase covers is undetermined, not an error

mod catalog;
mod phase;
mod preferences;
mod resolver;

pub use catalog::{reference_catalog, Catalog, CatalogError};
pub use phase::{FoodGroup, FoodGroups, PhaseDefinition, PhaseKind, EDUCATIONAL_MARKER};
pub use preferences::Preferences;
pub use resolver::{cycle_day, elapsed_days, CycleResolver, Resolution};
