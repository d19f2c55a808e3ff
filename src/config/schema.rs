//! Configuration schema definitions.
//!
//! Declarative route tables, deserialized from TOML. The schema mirrors
//! `RouteDescriptor` field for field so a validated config converts into a
//! frozen `RouteTable` through the registry builder.

use serde::{Deserialize, Serialize};

use crate::registry::{Placement, RouteDescriptor, RouteTable, RouteTableBuilder};

/// Root configuration: the declared routes plus the fallback path.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RoutesConfig {
    /// Route declarations, in navigation-menu order.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,

    /// Path to fall back to when no route matches. Must name a declared route.
    pub default_path: String,
}

/// One declared route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteEntry {
    /// Exact-match path (e.g., "/list").
    pub path: String,

    /// View template key, resolved by the renderer.
    pub view: String,

    /// Controller key, resolved by the controller registry.
    pub controller: String,

    /// Navigation menu label.
    pub display_name: String,

    /// Navigation bar side ("left" or "right").
    #[serde(default)]
    pub placement: Placement,

    /// Icon key, passed through to the icon renderer.
    #[serde(default)]
    pub icon: String,
}

impl From<RouteEntry> for RouteDescriptor {
    fn from(entry: RouteEntry) -> Self {
        RouteDescriptor {
            path: entry.path,
            view: entry.view,
            controller: entry.controller,
            display_name: entry.display_name,
            placement: entry.placement,
            icon: entry.icon,
        }
    }
}

impl RoutesConfig {
    /// Freeze a validated config into a route table.
    ///
    /// The builder re-checks the same invariants the semantic validation
    /// pass does, so a config that skipped validation still cannot produce
    /// an inconsistent table.
    pub fn build_table(self) -> Result<RouteTable, crate::registry::RegistryError> {
        let mut builder = RouteTableBuilder::new();
        for entry in self.routes {
            builder.register(entry.into())?;
        }
        builder.set_default(&self.default_path)?;
        builder.build()
    }
}
