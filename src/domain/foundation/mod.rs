//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the NutriCycle domain.

mod day_range;
mod errors;

pub use day_range::DayRange;
pub use errors::{DomainError, ErrorCode, ValidationError};
