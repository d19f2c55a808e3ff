//! Route table construction errors.
//!
//! All variants are detected during the startup phase and are fatal: the
//! application must not proceed with an inconsistent route table. No runtime
//! errors exist on the lookup path; `resolve` is total.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A path was registered twice.
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// The fallback path does not match any registered route.
    #[error("Default path {0} does not match any registered route")]
    UnknownPath(String),

    /// A descriptor is missing a required field.
    #[error("Route {path:?} has an empty {field}")]
    EmptyField { path: String, field: &'static str },

    /// `build` was called before a default path was set.
    #[error("No default path set; resolve would not be total")]
    MissingDefault,
}
