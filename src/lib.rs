//! Static route registry for a single-page application shell.
//!
//! Maps exact-match URL paths to the view template, controller, and
//! navigation metadata needed to activate a page, with a validated fallback
//! route for unmatched paths.
//!
//! ```text
//! routes.toml ──▶ config ──▶ RouteTable ──▶ binding ──▶ Activation
//!                (load,      (frozen at     (resolve     (descriptor +
//!                 validate)   startup)       view/ctrl    view + controller)
//!                                            keys)
//!                                 │
//!                                 └────────▶ navigation (left/right menu)
//! ```
//!
//! The table is built once during startup; every construction error is fatal
//! there, and `resolve` never fails at runtime.

pub mod binding;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod registry;

pub use binding::{Activation, BindError, Binder, HandlerResolver, MapResolver};
pub use config::{load_config, parse_config, ConfigError, RoutesConfig};
pub use navigation::{menu, NavItem, NavMenu};
pub use registry::{Placement, RegistryError, RouteDescriptor, RouteTable, RouteTableBuilder};
