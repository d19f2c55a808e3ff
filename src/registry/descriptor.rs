//! Route descriptor definitions.
//!
//! A descriptor carries everything the application shell needs to activate
//! one page: the exact-match path, the opaque view/controller/icon keys
//! resolved by external collaborators, and the navigation metadata.

use serde::{Deserialize, Serialize};

/// Which side of the navigation bar a route's menu entry renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Left,
    Right,
}

/// Metadata for one navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteDescriptor {
    /// Exact-match lookup key (e.g., "/list"). Unique within a table.
    pub path: String,

    /// Opaque key into the view renderer's template store.
    pub view: String,

    /// Opaque key into the application's controller registry.
    pub controller: String,

    /// Human-readable label for the navigation menu.
    pub display_name: String,

    /// Navigation bar side for this route's menu entry.
    #[serde(default)]
    pub placement: Placement,

    /// Opaque icon key, passed through unmodified to the icon renderer.
    #[serde(default)]
    pub icon: String,
}
