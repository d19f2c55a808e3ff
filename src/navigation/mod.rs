//! Navigation menu projection.
//!
//! # Responsibilities
//! - Project the route table into menu items for the navigation bar
//! - Group entries by placement, preserving registration order per side
//!
//! # Design Decisions
//! - Items borrow from the table; the menu is a view, not a copy
//! - Icon keys pass through unmodified to the icon renderer

use crate::registry::{Placement, RouteTable};

/// One navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem<'a> {
    pub path: &'a str,
    pub label: &'a str,
    pub icon: &'a str,
}

/// Menu entries grouped by navigation bar side.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NavMenu<'a> {
    pub left: Vec<NavItem<'a>>,
    pub right: Vec<NavItem<'a>>,
}

/// Build the navigation menu from a frozen route table.
pub fn menu(table: &RouteTable) -> NavMenu<'_> {
    let mut nav = NavMenu::default();
    for descriptor in table.entries() {
        let item = NavItem {
            path: &descriptor.path,
            label: &descriptor.display_name,
            icon: &descriptor.icon,
        };
        match descriptor.placement {
            Placement::Left => nav.left.push(item),
            Placement::Right => nav.right.push(item),
        }
    }
    nav
}
