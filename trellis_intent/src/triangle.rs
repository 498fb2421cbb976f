// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-triangle test and safe-triangle construction.

use kurbo::{Point, Rect};

/// Padding applied above and below the panel edge when building the safe
/// triangle, so near-miss trajectories toward the panel's corners still
/// count as aimed at it.
pub const APEX_PAD: f64 = 5.0;

/// Barycentric point-in-triangle test via signed cross products.
///
/// Computes the doubled signed area of `(a, b, c)` and the two sub-areas
/// `s` and `t` spanned by `p`; after normalizing orientation, `p` is inside
/// when both scalars are non-negative and their sum does not exceed the
/// total. Points on an edge or vertex report inside. A degenerate triangle
/// only contains points on its segment.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let mut area2 = -b.y * c.x + a.y * (c.x - b.x) + a.x * (b.y - c.y) + b.x * c.y;
    let mut s = a.y * c.x - a.x * c.y + (c.y - a.y) * p.x + (a.x - c.x) * p.y;
    let mut t = a.x * b.y - a.y * b.x + (a.y - b.y) * p.x + (b.x - a.x) * p.y;
    if area2 < 0.0 {
        s = -s;
        t = -t;
        area2 = -area2;
    }
    s >= 0.0 && t >= 0.0 && s + t <= area2
}

/// Build the safe triangle for an open submenu panel.
///
/// The apex is the previous cursor position; the base spans the panel's near
/// edge (the edge facing the cursor), extended by [`APEX_PAD`] beyond both
/// corners. The near edge is the left edge when the cursor sits left of the
/// panel's center and the right edge otherwise, which matches panels opened
/// to the right and to the left of their parent respectively.
pub fn safe_triangle(panel: Rect, prev: Point) -> [Point; 3] {
    let edge_x = if prev.x <= panel.center().x {
        panel.x0
    } else {
        panel.x1
    };
    [
        prev,
        Point::new(edge_x, panel.y0 - APEX_PAD),
        Point::new(edge_x, panel.y1 + APEX_PAD),
    ]
}
