// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: the menu item model and expansion-path state.
//!
//! This crate holds the static side of a hierarchical menu:
//!
//! - [`MenuItem`]: a recursive tree node with display text slots, decoration
//!   handles, [`ItemFlags`], and an ordered list of children.
//! - [`ItemKind`]: the derived classification of a node — divider, section
//!   heading, submenu parent, or leaf action.
//! - [`ExpansionPath`]: the ordered sequence of item ids describing which
//!   submenu chain is currently open, one id per depth.
//!
//! Item identifiers are a caller-chosen copyable key `K`, matching the rest
//! of the Trellis crates. Hosts that key items by strings should intern them
//! into a small handle first.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_tree::{ExpansionPath, ItemKind, MenuItem};
//!
//! let items = vec![
//!     MenuItem::new(1_u32).with_label("Open"),
//!     MenuItem::divider(2),
//!     MenuItem::new(3).with_label("Share").with_children(vec![
//!         MenuItem::new(31).with_label("Copy link"),
//!         MenuItem::new(32).with_label("Email"),
//!     ]),
//! ];
//!
//! assert_eq!(items[0].kind(), ItemKind::Action);
//! assert_eq!(items[1].kind(), ItemKind::Divider);
//! assert_eq!(items[2].kind(), ItemKind::Submenu);
//!
//! // Open the "Share" submenu and resolve the rows it shows.
//! let mut path = ExpansionPath::new();
//! path.open_to(0, 3);
//! let rows = trellis_tree::children_at_path(&items, path.ids()).unwrap();
//! assert_eq!(rows.len(), 2);
//! ```
//!
//! A stale path (for example after the host swaps the item list) is not an
//! error: [`ExpansionPath::retain_valid`] drops the first dangling entry and
//! everything below it, and lookups simply yield `None` for the rest.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod path;

pub use item::{ItemFlags, ItemKind, MenuItem, SlotId, children_at_path, find_item};
pub use path::ExpansionPath;
