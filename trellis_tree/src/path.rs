// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion-path state: which submenu chain is currently open.

use smallvec::SmallVec;

use crate::item::MenuItem;
use crate::item::children_at_path;

/// Ordered sequence of item ids, one per open submenu depth.
///
/// Invariants (maintained by the operations below, given well-formed input):
///
/// - `len()` equals the number of open submenu panels.
/// - `ids()[i]` is a child of `ids()[i - 1]` (a top-level item for `i == 0`).
/// - Truncating at depth `d` closes every submenu at and below `d`.
///
/// Menus are shallow in practice, so the backing storage is inline up to
/// eight levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionPath<K> {
    ids: SmallVec<[K; 8]>,
}

impl<K: Copy + Eq> ExpansionPath<K> {
    /// Create an empty path (no submenus open).
    pub fn new() -> Self {
        Self {
            ids: SmallVec::new(),
        }
    }

    /// The open chain, outermost first.
    pub fn ids(&self) -> &[K] {
        &self.ids
    }

    /// Number of open submenu panels.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no submenu is open.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id open at `depth`, if any.
    pub fn at(&self, depth: usize) -> Option<K> {
        self.ids.get(depth).copied()
    }

    /// The innermost open id, if any.
    pub fn last(&self) -> Option<K> {
        self.ids.last().copied()
    }

    /// Open `id`'s submenu at `depth`, closing anything deeper first.
    pub fn open_to(&mut self, depth: usize, id: K) {
        self.ids.truncate(depth);
        self.ids.push(id);
    }

    /// Strict open/close toggle at `depth`.
    ///
    /// If `id` is already the innermost open entry it is popped (closing its
    /// submenu); otherwise its submenu opens at `depth`. Returns `true` when
    /// the submenu is open after the call.
    pub fn toggle(&mut self, depth: usize, id: K) -> bool {
        if self.ids.len() == depth + 1 && self.ids[depth] == id {
            self.ids.pop();
            false
        } else {
            self.open_to(depth, id);
            true
        }
    }

    /// Close the innermost submenu, returning the id that owned it.
    pub fn pop(&mut self) -> Option<K> {
        self.ids.pop()
    }

    /// Close submenus at and below `depth`.
    pub fn truncate(&mut self, depth: usize) {
        self.ids.truncate(depth);
    }

    /// Close every submenu.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop the first entry that no longer resolves against `items`, and
    /// everything after it.
    ///
    /// Returns `true` if the path was already valid. This is the self-heal
    /// step run before each render so that stale ids (for example after the
    /// host replaced the item list) simply stop rendering deeper panels.
    pub fn retain_valid(&mut self, items: &[MenuItem<K>]) -> bool {
        for depth in 0..self.ids.len() {
            if children_at_path(items, &self.ids[..=depth]).is_none() {
                self.ids.truncate(depth);
                return false;
            }
        }
        true
    }
}
