// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Menu: a headless controller for hierarchical, keyboard-navigable
//! menus with submenus.
//!
//! This crate ties the Trellis building blocks together:
//!
//! - [`trellis_tree`]: the item model and the expansion path (which submenu
//!   chain is open).
//! - [`trellis_focus`]: the per-depth focus cursor with circular traversal
//!   over focusable rows.
//! - [`trellis_intent`]: the safe-triangle pointer-intent detector and the
//!   hover-switch debounce.
//! - [`trellis_placement`]: viewport-aware fixed positioning for submenu
//!   panels.
//!
//! A [`MenuController`] owns all interaction state for one open menu. Hosts
//! feed it pointer, keyboard, and resize events plus measured row/panel
//! rectangles; every event returns [`Effect`]s (activation, close requests,
//! checked-state changes, focus moves) in place of callbacks, and
//! [`MenuController::render`] produces a [`MenuFrame`] of per-depth panel
//! descriptors carrying the full ARIA surface (roles, `aria-expanded`,
//! `aria-checked`, roving `tabIndex`).
//!
//! There is no DOM, no timers, and no rendering here: time is a
//! caller-supplied millisecond clock, and a deferred hover switch exposes
//! its deadline through [`MenuController::next_deadline`] so the host
//! schedules exactly one wake-up.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_menu::{Effect, Key, MenuConfig, MenuController};
//! use trellis_tree::MenuItem;
//!
//! let items = vec![
//!     MenuItem::new(1_u32).with_label("Rename"),
//!     MenuItem::new(2).with_label("Delete").with_children(vec![
//!         MenuItem::new(21).with_label("Confirm"),
//!     ]),
//! ];
//! let mut menu = MenuController::new(MenuConfig::new(items));
//!
//! // The first focusable row starts focused.
//! let frame = menu.render();
//! assert_eq!(frame.focused_row().unwrap().item.id, 1);
//!
//! // ArrowDown, then ArrowRight opens the submenu and moves focus into it.
//! menu.on_key(Key::ArrowDown);
//! let effects = menu.on_key(Key::ArrowRight);
//! assert_eq!(effects.as_slice(), &[Effect::FocusRow(21)]);
//! assert_eq!(menu.expansion_path(), &[2]);
//!
//! // Activating the leaf reports it and asks to close.
//! let effects = menu.on_key(Key::Enter);
//! assert_eq!(effects.as_slice(), &[Effect::Activated(21), Effect::Close]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod frame;
mod types;

pub use controller::MenuController;
pub use frame::{Header, MenuFrame, OVERLAY_BASE_Z, Panel, Role, Row, RowState};
pub use types::{Anchor, Effect, Effects, Key, MenuConfig, SelectionControl, SelectionMode};
