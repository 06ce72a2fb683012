//! NutriCycle - Cycle-aware nutrition recommendations
//!
//! This crate maps a user's menstrual-cycle day to a phase and produces
//! food recommendations for that phase, filtered by the user's allergens.
//! It is served over HTTP and through an interactive terminal menu.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
