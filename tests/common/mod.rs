//! Shared utilities for integration tests.
#![allow(dead_code)]

use route_registry::observability::init_logging;
use route_registry::{Placement, RouteDescriptor, RouteTable, RouteTableBuilder};

/// One descriptor from the canonical application route set.
pub fn descriptor(
    path: &str,
    view: &str,
    controller: &str,
    name: &str,
    placement: Placement,
    icon: &str,
) -> RouteDescriptor {
    RouteDescriptor {
        path: path.into(),
        view: view.into(),
        controller: controller.into(),
        display_name: name.into(),
        placement,
        icon: icon.into(),
    }
}

/// The four application routes with `/list` as the fallback.
pub fn canonical_table() -> RouteTable {
    init_logging("route_registry=debug");

    let mut builder = RouteTableBuilder::new();
    for route in canonical_routes() {
        builder.register(route).unwrap();
    }
    builder.set_default("/list").unwrap();
    builder.build().unwrap()
}

pub fn canonical_routes() -> Vec<RouteDescriptor> {
    vec![
        descriptor(
            "/list",
            "views/listView.html",
            "ListCtrl",
            "List",
            Placement::Left,
            "glyphicon-list",
        ),
        descriptor(
            "/map",
            "views/mapView.html",
            "MapCtrl",
            "Map",
            Placement::Left,
            "glyphicon-globe",
        ),
        descriptor(
            "/analytics",
            "views/analyticsView.html",
            "AnalyticsCtrl",
            "Analytics",
            Placement::Left,
            "glyphicon-stats",
        ),
        descriptor(
            "/about",
            "views/aboutView.html",
            "AboutCtrl",
            "About",
            Placement::Right,
            "glyphicon-info-sign",
        ),
    ]
}
