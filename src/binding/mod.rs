//! View and controller binding.
//!
//! # Responsibilities
//! - Define the resolver seam the route table's opaque keys point into
//! - Turn a requested path into an activation: descriptor + view + controller
//!
//! # Design Decisions
//! - Resolvers are injected capabilities, not ambient name lookup
//! - The trait is the boundary contract; the HashMap impl is a convenience
//! - A dangling key is the collaborator's configuration error, surfaced
//!   explicitly rather than rendered as a blank page

pub mod resolver;

pub use resolver::{HandlerResolver, MapResolver};

use thiserror::Error;

use crate::registry::{RouteDescriptor, RouteTable};

/// Activation-time errors: the table resolved a route, but one of its opaque
/// keys has no entry in the injected resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("Route {route} names unknown view {key:?}")]
    UnknownView { route: String, key: String },

    #[error("Route {route} names unknown controller {key:?}")]
    UnknownController { route: String, key: String },
}

/// Everything needed to display one page.
#[derive(Debug)]
pub struct Activation<'a, V, C> {
    pub descriptor: &'a RouteDescriptor,
    pub view: &'a V,
    pub controller: &'a C,
}

/// Connects the route table to the view renderer and controller registry.
#[derive(Debug)]
pub struct Binder<'t, V, C> {
    table: &'t RouteTable,
    views: V,
    controllers: C,
}

impl<'t, V, C> Binder<'t, V, C>
where
    V: HandlerResolver,
    C: HandlerResolver,
{
    pub fn new(table: &'t RouteTable, views: V, controllers: C) -> Self {
        Self {
            table,
            views,
            controllers,
        }
    }

    /// Resolve a path to its descriptor and look up both opaque keys.
    /// Unmatched paths follow the table's default-route fallback first.
    pub fn activate(
        &self,
        requested_path: &str,
    ) -> Result<Activation<'_, V::Handler, C::Handler>, BindError> {
        let descriptor = self.table.resolve(requested_path);

        let view = self
            .views
            .lookup(&descriptor.view)
            .ok_or_else(|| BindError::UnknownView {
                route: descriptor.path.clone(),
                key: descriptor.view.clone(),
            })?;
        let controller =
            self.controllers
                .lookup(&descriptor.controller)
                .ok_or_else(|| BindError::UnknownController {
                    route: descriptor.path.clone(),
                    key: descriptor.controller.clone(),
                })?;

        Ok(Activation {
            descriptor,
            view,
            controller,
        })
    }
}
