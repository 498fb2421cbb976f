// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Intent: pointer-intent detection for submenu hover switching.
//!
//! When a submenu is open and the pointer travels from its parent row toward
//! the submenu panel, it usually crosses sibling rows on the way. Switching
//! the open submenu on every crossed sibling makes the menu flicker. This
//! crate decides whether a pointer move is *aimed at the open panel*:
//!
//! - [`point_in_triangle`]: the sign-of-cross-product barycentric test.
//! - [`safe_triangle`]: builds the "safe triangle" spanned by the previous
//!   cursor position and the open panel's near edge.
//! - [`HoverIntent`]: a timestamp-driven state machine that defers a hover
//!   switch while motion stays inside the safe triangle and releases it once
//!   the debounce deadline passes.
//!
//! Time is a caller-supplied `u64` millisecond timestamp; there are no
//! timers in this crate. Hosts read [`HoverIntent::deadline`] to schedule a
//! single wake-up and then call [`HoverIntent::poll`], instead of polling on
//! an interval.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_intent::{HoverDecision, HoverIntent};
//!
//! let mut intent: HoverIntent<u32> = HoverIntent::new();
//! let panel = Rect::new(200.0, 0.0, 360.0, 240.0);
//!
//! // Pointer moving right, toward the open panel.
//! intent.record_move(Point::new(120.0, 100.0));
//! intent.record_move(Point::new(140.0, 104.0));
//!
//! // Hovering sibling 7 while aimed at the panel defers the switch…
//! let decision = intent.decide(7, Some(panel), 1_000);
//! assert!(matches!(decision, HoverDecision::Deferred { .. }));
//! assert_eq!(intent.poll(1_100), None);
//! // …until the debounce deadline passes.
//! assert_eq!(intent.poll(1_400), Some(7));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hover;
mod triangle;

pub use hover::{HOVER_SWITCH_DELAY_MS, HoverDecision, HoverIntent, PointerTrace};
pub use triangle::{APEX_PAD, point_in_triangle, safe_triangle};
