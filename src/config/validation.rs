//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (default path names a declared route)
//! - Detect duplicate paths and empty required fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RoutesConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RoutesConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Route {path:?} has an empty {field}")]
    EmptyField { path: String, field: &'static str },

    #[error("Default path {0} does not match any declared route")]
    DanglingDefault(String),
}

/// Check the semantic invariants of a parsed route config.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for route in &config.routes {
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }
        let required = [
            ("path", &route.path),
            ("view", &route.view),
            ("controller", &route.controller),
            ("display name", &route.display_name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.push(ValidationError::EmptyField {
                    path: route.path.clone(),
                    field,
                });
            }
        }
    }

    if !seen.contains(config.default_path.as_str()) {
        errors.push(ValidationError::DanglingDefault(config.default_path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
