// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Focus: the per-depth focus cursor of a hierarchical menu.
//!
//! Each open menu panel (depth 0 is the root panel, depth `d` the panel
//! opened by the expansion path's `d - 1`th entry) has exactly one focused
//! row. This crate tracks the focused *focusable ordinal* per depth and
//! implements the traversal rules:
//!
//! - [`Motion`]: next/previous with circular wrap, and first/last jumps.
//!   Tab and Shift+Tab reuse next/previous — focus is trapped within the
//!   current depth.
//! - [`FocusCursor`]: the depth-indexed cursor map.
//! - [`focusable_ordinals`]: maps rows to their focusable positions so
//!   disabled rows, headings, and dividers never count toward the cursor.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_focus::{FocusCursor, Motion, focusable_ordinals, step};
//!
//! // Rows: A, disabled B, C — two focusable ordinals mapping to rows 0 and 2.
//! let focusable = focusable_ordinals(&[true, false, true], |f| *f);
//! assert_eq!(focusable, vec![0, 2]);
//!
//! let mut cursor = FocusCursor::new();
//! // ArrowDown from A skips B and lands on C…
//! cursor.apply(0, Motion::Next, focusable.len());
//! assert_eq!(focusable[cursor.index_at(0)], 2);
//! // …and another ArrowDown wraps back to A.
//! cursor.apply(0, Motion::Next, focusable.len());
//! assert_eq!(focusable[cursor.index_at(0)], 0);
//! # let _ = step(Motion::Last, 0, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use smallvec::SmallVec;

/// A focus movement within one depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Move to the next focusable row, wrapping past the end (ArrowDown, Tab).
    Next,
    /// Move to the previous focusable row, wrapping past the start
    /// (ArrowUp, Shift+Tab).
    Prev,
    /// Jump to the first focusable row (Home).
    First,
    /// Jump to the last focusable row (End).
    Last,
}

/// Apply a [`Motion`] to a focusable ordinal.
///
/// `count` is the number of focusable rows at the depth; a `count` of zero
/// pins the result to zero. Next/Prev wrap circularly.
pub fn step(motion: Motion, current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let current = current.min(count - 1);
    match motion {
        Motion::Next => (current + 1) % count,
        Motion::Prev => (current + count - 1) % count,
        Motion::First => 0,
        Motion::Last => count - 1,
    }
}

/// Collect the row indices that are focusable, in row order.
///
/// The returned vector maps each focusable ordinal to its row index; its
/// length is the `count` to feed [`step`].
pub fn focusable_ordinals<T>(rows: &[T], mut is_focusable: impl FnMut(&T) -> bool) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| is_focusable(row).then_some(i))
        .collect()
}

/// Depth-indexed map of focused focusable ordinals.
///
/// Depths missing from the map read as ordinal 0, which is also the initial
/// state: the first focusable row of a freshly opened panel is focused.
/// Inline storage covers eight depths, matching the expansion path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusCursor {
    ordinals: SmallVec<[usize; 8]>,
}

impl FocusCursor {
    /// Create a cursor with every depth at ordinal 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused focusable ordinal at `depth` (0 when never set).
    pub fn index_at(&self, depth: usize) -> usize {
        self.ordinals.get(depth).copied().unwrap_or(0)
    }

    /// Set the focused ordinal at `depth`, growing the map as needed.
    pub fn set(&mut self, depth: usize, ordinal: usize) {
        if self.ordinals.len() <= depth {
            self.ordinals.resize(depth + 1, 0);
        }
        self.ordinals[depth] = ordinal;
    }

    /// Apply a motion at `depth` over `count` focusable rows and return the
    /// new ordinal.
    pub fn apply(&mut self, depth: usize, motion: Motion, count: usize) -> usize {
        let next = step(motion, self.index_at(depth), count);
        self.set(depth, next);
        next
    }

    /// Forget cursor state deeper than `depth` (after closing submenus).
    pub fn truncate(&mut self, depth: usize) {
        self.ordinals.truncate(depth + 1);
    }

    /// Reset every depth.
    pub fn clear(&mut self) {
        self.ordinals.clear();
    }
}
