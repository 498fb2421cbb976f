// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu item nodes: flags, derived kinds, and tree lookups.

use alloc::string::String;
use alloc::vec::Vec;

/// Opaque handle for a host-interned decoration (icon, glyph, avatar, …)
/// rendered in an item's leading or trailing slot.
///
/// The host manages the meaning and lifecycle of individual slot ids, for
/// example via an interned asset table or static constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

bitflags::bitflags! {
    /// Advisory item flags.
    ///
    /// Flags are interaction hints, not a validated schema: a disabled item is
    /// skipped by focus traversal and ignores activation, a destructive or
    /// selected item only renders differently, and `DIVIDER` marks the node as
    /// a non-interactive separator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item cannot be focused or activated.
        const DISABLED    = 0b0000_0001;
        /// Item represents a destructive action (styling hint only).
        const DESTRUCTIVE = 0b0000_0010;
        /// Item renders in its selected variant (styling hint only).
        const SELECTED    = 0b0000_0100;
        /// Item is a divider row; non-interactive and non-focusable.
        const DIVIDER     = 0b0000_1000;
    }
}

/// Derived classification of a [`MenuItem`].
///
/// Exactly one kind applies per node, resolved in this precedence order:
/// divider flag, then heading text, then non-empty children, then action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Non-interactive separator row.
    Divider,
    /// Non-interactive section label.
    Heading,
    /// Parent row that owns a submenu (non-empty children).
    Submenu,
    /// Leaf action row.
    Action,
}

/// A node in the menu tree.
///
/// Generic over a copyable identifier `K` that must be unique within the
/// menu. Display slots are optional; a node with `heading` set is a section
/// label, a node with the [`ItemFlags::DIVIDER`] flag is a separator, and
/// every other node is either a leaf action or a submenu parent depending on
/// whether it has children.
#[derive(Clone, Debug)]
pub struct MenuItem<K> {
    /// Identifier, unique within the menu.
    pub id: K,
    /// Primary row text.
    pub label: Option<String>,
    /// Secondary row text rendered under the label.
    pub description: Option<String>,
    /// Section heading text; when set the node is non-interactive.
    pub heading: Option<String>,
    /// Trailing badge text.
    pub badge: Option<String>,
    /// Leading decoration slot.
    pub left_slot: Option<SlotId>,
    /// Trailing decoration slot.
    pub right_slot: Option<SlotId>,
    /// Advisory flags.
    pub flags: ItemFlags,
    /// Ordered children; non-empty makes this a submenu parent.
    pub children: Vec<MenuItem<K>>,
}

impl<K> MenuItem<K> {
    /// Create a bare action item.
    pub fn new(id: K) -> Self {
        Self {
            id,
            label: None,
            description: None,
            heading: None,
            badge: None,
            left_slot: None,
            right_slot: None,
            flags: ItemFlags::empty(),
            children: Vec::new(),
        }
    }

    /// Create a divider row.
    pub fn divider(id: K) -> Self {
        let mut item = Self::new(id);
        item.flags = ItemFlags::DIVIDER;
        item
    }

    /// Create a section heading row.
    pub fn heading(id: K, text: impl Into<String>) -> Self {
        let mut item = Self::new(id);
        item.heading = Some(text.into());
        item
    }

    /// Builder: set the row label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: set the secondary description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the trailing badge text.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Builder: set the leading decoration slot.
    pub fn with_left_slot(mut self, slot: SlotId) -> Self {
        self.left_slot = Some(slot);
        self
    }

    /// Builder: set the trailing decoration slot.
    pub fn with_right_slot(mut self, slot: SlotId) -> Self {
        self.right_slot = Some(slot);
        self
    }

    /// Builder: set flags.
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder: mark the item disabled.
    pub fn disabled(mut self) -> Self {
        self.flags |= ItemFlags::DISABLED;
        self
    }

    /// Builder: attach children, making this a submenu parent.
    pub fn with_children(mut self, children: Vec<MenuItem<K>>) -> Self {
        self.children = children;
        self
    }

    /// Derived kind of this node.
    pub fn kind(&self) -> ItemKind {
        if self.flags.contains(ItemFlags::DIVIDER) {
            ItemKind::Divider
        } else if self.heading.is_some() {
            ItemKind::Heading
        } else if !self.children.is_empty() {
            ItemKind::Submenu
        } else {
            ItemKind::Action
        }
    }

    /// Whether this node owns a submenu.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether focus traversal may land on this node.
    ///
    /// Headings and dividers never take focus; disabled items are skipped.
    pub fn is_focusable(&self) -> bool {
        matches!(self.kind(), ItemKind::Action | ItemKind::Submenu)
            && !self.flags.contains(ItemFlags::DISABLED)
    }

    /// Whether the item reacts to hover and activation at all.
    pub fn is_interactive(&self) -> bool {
        matches!(self.kind(), ItemKind::Action | ItemKind::Submenu)
    }
}

/// Resolve the rows shown at the end of an expansion path.
///
/// An empty path yields the top-level items. Each path entry must name a
/// submenu parent among the previous level's rows; the first dangling or
/// non-submenu entry makes the lookup yield `None`, which is how stale paths
/// self-heal at the next render.
pub fn children_at_path<'a, K: Copy + Eq>(
    items: &'a [MenuItem<K>],
    path: &[K],
) -> Option<&'a [MenuItem<K>]> {
    let mut rows = items;
    for id in path {
        let parent = rows.iter().find(|item| item.id == *id)?;
        if parent.children.is_empty() {
            return None;
        }
        rows = &parent.children;
    }
    Some(rows)
}

/// Find an item anywhere in the tree by id (depth-first).
pub fn find_item<'a, K: Copy + Eq>(items: &'a [MenuItem<K>], id: K) -> Option<&'a MenuItem<K>> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_item(&item.children, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Vec<MenuItem<u32>> {
        vec![
            MenuItem::heading(10, "Section"),
            MenuItem::new(1).with_label("Open"),
            MenuItem::divider(11),
            MenuItem::new(2).with_label("Export").with_children(vec![
                MenuItem::new(21).with_label("PNG"),
                MenuItem::new(22).with_label("SVG").disabled(),
            ]),
        ]
    }

    #[test]
    fn kind_precedence() {
        // A divider flag wins even when heading text or children are present.
        let mut odd = MenuItem::heading(1_u32, "x").with_children(vec![MenuItem::new(2)]);
        odd.flags |= ItemFlags::DIVIDER;
        assert_eq!(odd.kind(), ItemKind::Divider);

        let heading_with_children = MenuItem::heading(1_u32, "x").with_children(vec![MenuItem::new(2)]);
        assert_eq!(heading_with_children.kind(), ItemKind::Heading);
    }

    #[test]
    fn focusable_excludes_heading_divider_disabled() {
        let items = sample();
        assert!(!items[0].is_focusable()); // heading
        assert!(items[1].is_focusable()); // action
        assert!(!items[2].is_focusable()); // divider
        assert!(items[3].is_focusable()); // submenu parent
        assert!(!items[3].children[1].is_focusable()); // disabled leaf
    }

    #[test]
    fn children_at_path_walks_levels() {
        let items = sample();
        assert_eq!(children_at_path(&items, &[]).unwrap().len(), 4);
        let sub = children_at_path(&items, &[2]).unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[0].id, 21);
    }

    #[test]
    fn children_at_path_rejects_dangling_and_leaf_entries() {
        let items = sample();
        // Unknown id.
        assert!(children_at_path(&items, &[99]).is_none());
        // Leaf id cannot carry a deeper level.
        assert!(children_at_path(&items, &[1]).is_none());
        // Valid prefix, dangling tail.
        assert!(children_at_path(&items, &[2, 99]).is_none());
    }

    #[test]
    fn find_item_searches_nested_levels() {
        let items = sample();
        assert_eq!(find_item(&items, 22).unwrap().label.as_deref(), Some("SVG"));
        assert!(find_item(&items, 99).is_none());
    }
}
