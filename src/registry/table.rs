//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Collect descriptors during the init phase (builder)
//! - Enforce table invariants before freezing
//! - Serve exact-match lookups with default-route fallback
//!
//! # Design Decisions
//! - Builder/table split: mutation is only possible before `build`
//! - O(1) path lookup via HashMap index over a registration-ordered Vec
//! - Immutable after construction (thread-safe without locks)
//! - Fallback instead of failure: `resolve` never returns an error

use std::collections::HashMap;

use crate::registry::descriptor::RouteDescriptor;
use crate::registry::error::RegistryError;

/// Accumulates route descriptors during application startup.
///
/// A failed `register` or `set_default` call leaves the builder unchanged,
/// so the caller sees a consistent table state when reporting the error.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteDescriptor>,
    index: HashMap<String, usize>,
    default_path: Option<String>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route. Paths must be unique and the descriptor's required
    /// fields (path, view, controller, display name) must be non-empty.
    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), RegistryError> {
        required_fields(&descriptor)?;
        if self.index.contains_key(&descriptor.path) {
            return Err(RegistryError::DuplicatePath(descriptor.path));
        }

        tracing::debug!(path = %descriptor.path, view = %descriptor.view, "Route registered");
        self.index.insert(descriptor.path.clone(), self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    /// Record the fallback path. The path must already be registered.
    pub fn set_default(&mut self, path: &str) -> Result<(), RegistryError> {
        if !self.index.contains_key(path) {
            return Err(RegistryError::UnknownPath(path.to_string()));
        }
        self.default_path = Some(path.to_string());
        Ok(())
    }

    /// Freeze the table. Fails if no default path was set.
    pub fn build(self) -> Result<RouteTable, RegistryError> {
        let default_path = self.default_path.ok_or(RegistryError::MissingDefault)?;
        // set_default verified the path, and registration never removes one.
        let default_index = self.index[&default_path];

        tracing::info!(routes = self.entries.len(), default = %default_path, "Route table built");
        Ok(RouteTable {
            entries: self.entries,
            index: self.index,
            default_path,
            default_index,
        })
    }
}

/// Immutable path → descriptor mapping, shared for the application session.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteDescriptor>,
    index: HashMap<String, usize>,
    default_path: String,
    default_index: usize,
}

impl RouteTable {
    /// Exact-match lookup. An unmatched path yields the default route's
    /// descriptor rather than an error.
    pub fn resolve(&self, requested_path: &str) -> &RouteDescriptor {
        match self.index.get(requested_path) {
            Some(&i) => &self.entries[i],
            None => {
                tracing::debug!(
                    path = %requested_path,
                    fallback = %self.default_path,
                    "No route matched, using default"
                );
                &self.entries[self.default_index]
            }
        }
    }

    /// All descriptors in registration order, for navigation rendering.
    pub fn entries(&self) -> &[RouteDescriptor] {
        &self.entries
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }
}

fn required_fields(descriptor: &RouteDescriptor) -> Result<(), RegistryError> {
    let checks = [
        ("path", &descriptor.path),
        ("view", &descriptor.view),
        ("controller", &descriptor.controller),
        ("display name", &descriptor.display_name),
    ];
    for (field, value) in checks {
        if value.is_empty() {
            return Err(RegistryError::EmptyField {
                path: descriptor.path.clone(),
                field,
            });
        }
    }
    Ok(())
}
