//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRegistry` - Session-scoped store of registered profiles

mod profile_registry;

pub use profile_registry::ProfileRegistry;
