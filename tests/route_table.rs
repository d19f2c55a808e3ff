//! Route table behavior over the canonical application route set.

use route_registry::{menu, Placement, RegistryError, RouteTableBuilder};

mod common;

#[test]
fn test_resolve_registered_path() {
    let table = common::canonical_table();

    let map = table.resolve("/map");
    assert_eq!(map.path, "/map");
    assert_eq!(map.view, "views/mapView.html");
    assert_eq!(map.controller, "MapCtrl");
}

#[test]
fn test_resolve_every_registered_path_returns_its_own_descriptor() {
    let table = common::canonical_table();

    for route in common::canonical_routes() {
        assert_eq!(table.resolve(&route.path), &route);
    }
}

#[test]
fn test_unmatched_path_falls_back_to_default() {
    let table = common::canonical_table();

    let fallback = table.resolve("/unknown");
    assert_eq!(fallback.path, "/list");
    assert_eq!(fallback, table.resolve(table.default_path()));
}

#[test]
fn test_resolve_is_exact_match_only() {
    let table = common::canonical_table();

    // No prefix or partial matching: near-misses take the fallback.
    assert_eq!(table.resolve("/map/").path, "/list");
    assert_eq!(table.resolve("/mapping").path, "/list");
    assert_eq!(table.resolve("map").path, "/list");
    assert_eq!(table.resolve("").path, "/list");
}

#[test]
fn test_entries_in_registration_order() {
    let table = common::canonical_table();

    let paths: Vec<&str> = table.entries().iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, ["/list", "/map", "/analytics", "/about"]);
}

#[test]
fn test_duplicate_registration_fails_and_preserves_table() {
    let mut builder = RouteTableBuilder::new();
    for route in common::canonical_routes() {
        builder.register(route).unwrap();
    }

    let duplicate = common::descriptor(
        "/list",
        "views/otherView.html",
        "OtherCtrl",
        "Other",
        Placement::Left,
        "",
    );
    assert_eq!(
        builder.register(duplicate),
        Err(RegistryError::DuplicatePath("/list".into()))
    );

    builder.set_default("/list").unwrap();
    let table = builder.build().unwrap();
    assert_eq!(table.entries().len(), 4);
    assert_eq!(table.resolve("/list").controller, "ListCtrl");
}

#[test]
fn test_navigation_menu_groups_by_placement() {
    let table = common::canonical_table();

    let nav = menu(&table);
    let left: Vec<&str> = nav.left.iter().map(|i| i.label).collect();
    let right: Vec<&str> = nav.right.iter().map(|i| i.label).collect();

    assert_eq!(left, ["List", "Map", "Analytics"]);
    assert_eq!(right, ["About"]);
    assert_eq!(nav.right[0].icon, "glyphicon-info-sign");
}
