//! Route registry subsystem.
//!
//! # Data Flow
//! ```text
//! Route Declaration (at startup):
//!     RouteDescriptor[]
//!     → RouteTableBuilder (register, set_default)
//!     → Invariant checks (unique paths, registered fallback)
//!     → Freeze as immutable RouteTable
//!
//! Incoming path:
//!     table.resolve(path)
//!     → exact-match lookup
//!     → Return: matching descriptor, or the default route's descriptor
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - Exact-match only: no wildcards, no prefixes, no precedence
//! - `resolve` is total; unmatched paths degrade to the default route
//! - All construction errors are fatal to startup (no partial tables)

pub mod descriptor;
pub mod error;
pub mod table;

pub use descriptor::{Placement, RouteDescriptor};
pub use error::RegistryError;
pub use table::{RouteTable, RouteTableBuilder};
