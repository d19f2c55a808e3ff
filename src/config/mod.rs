//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutesConfig (validated)
//!     → RouteTable (frozen via the registry builder)
//! ```
//!
//! # Design Decisions
//! - Validation separates syntactic (serde) from semantic checks
//! - Semantic validation reports all errors, not just the first
//! - File-defined and code-defined tables share the builder's invariants

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{RouteEntry, RoutesConfig};
pub use validation::ValidationError;
