// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Placement: fixed-position coordinates for submenu panels.
//!
//! Given the viewport-space rectangle of the parent row and the submenu
//! panel's (measured or estimated) size, [`place_submenu`] picks a side and
//! an origin:
//!
//! - The preferred side is tried first. The first submenu in a chain
//!   prefers [`Side::Right`]; deeper submenus prefer whatever side their
//!   chain already chose, so an open chain does not zig-zag.
//! - If the preferred side lacks horizontal room the other side is tried;
//!   if neither fits the panel goes to the right and overflows.
//! - Vertically the panel top-aligns with the parent row, shifting up just
//!   enough to fit the viewport, clamped to [`VIEWPORT_MARGIN`].
//!
//! [`place_root`] positions a context-menu root panel at an anchor point,
//! clamped into the viewport the same way.
//!
//! All coordinates are viewport-space (`position: fixed` semantics); the
//! host renders each panel through a top-level portal/overlay so panels
//! stack above regular content regardless of their logical parent.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use trellis_placement::{Side, place_submenu, SUBMENU_GAP};
//!
//! let parent_row = Rect::new(40.0, 100.0, 240.0, 132.0);
//! let viewport = Size::new(1024.0, 768.0);
//!
//! let p = place_submenu(parent_row, Size::new(200.0, 300.0), viewport, Side::Right);
//! assert_eq!(p.side, Side::Right);
//! assert_eq!(p.origin.x, 240.0 + SUBMENU_GAP);
//! assert_eq!(p.origin.y, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Point, Rect, Size};

/// Horizontal gap between a parent row and its submenu panel.
pub const SUBMENU_GAP: f64 = 4.0;

/// Minimum distance kept between a panel and the viewport edges.
pub const VIEWPORT_MARGIN: f64 = 8.0;

/// Horizontal side of the parent row a submenu opens on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Panel opens to the right of the parent row.
    #[default]
    Right,
    /// Panel opens to the left of the parent row.
    Left,
}

impl Side {
    /// The opposite side.
    pub fn flipped(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// A computed panel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner of the panel, viewport-space.
    pub origin: Point,
    /// Side that was actually chosen.
    pub side: Side,
}

/// Compute the fixed position for a submenu panel.
///
/// `parent_row` is the viewport-space rectangle of the row that owns the
/// submenu, `panel` the submenu's size, and `prefer` the side the open
/// chain already uses (pass [`Side::Right`] for the first submenu).
pub fn place_submenu(parent_row: Rect, panel: Size, viewport: Size, prefer: Side) -> Placement {
    let fits = |side: Side| match side {
        Side::Right => viewport.width - parent_row.x1 - SUBMENU_GAP >= panel.width,
        Side::Left => parent_row.x0 - SUBMENU_GAP - panel.width >= 0.0,
    };

    let side = if fits(prefer) {
        prefer
    } else if fits(prefer.flipped()) {
        prefer.flipped()
    } else {
        // Neither side has room; overflow to the right.
        Side::Right
    };

    let x = match side {
        Side::Right => parent_row.x1 + SUBMENU_GAP,
        Side::Left => parent_row.x0 - SUBMENU_GAP - panel.width,
    };
    let y = clamp_top(parent_row.y0, panel.height, viewport.height);

    Placement {
        origin: Point::new(x, y),
        side,
    }
}

/// Position a context-menu root panel at an anchor point.
///
/// The panel's top-left lands on the anchor; if it would overflow the right
/// or bottom viewport edge it flips to the other side of the anchor, then
/// clamps to [`VIEWPORT_MARGIN`].
pub fn place_root(anchor: Point, panel: Size, viewport: Size) -> Point {
    let x = if anchor.x + panel.width > viewport.width - VIEWPORT_MARGIN {
        (anchor.x - panel.width).max(VIEWPORT_MARGIN)
    } else {
        anchor.x
    };
    let y = if anchor.y + panel.height > viewport.height - VIEWPORT_MARGIN {
        (anchor.y - panel.height).max(VIEWPORT_MARGIN)
    } else {
        anchor.y
    };
    Point::new(x, y)
}

/// Top-align with the parent, shifting up just enough to fit the viewport.
fn clamp_top(parent_top: f64, panel_height: f64, viewport_height: f64) -> f64 {
    let mut y = parent_top;
    if y + panel_height > viewport_height {
        y = viewport_height - panel_height;
    }
    y.max(VIEWPORT_MARGIN)
}
