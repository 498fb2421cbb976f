// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render descriptors: the flat panel/row tree a host draws from.
//!
//! A [`MenuFrame`] is rebuilt from scratch on every
//! [`render`](crate::MenuController::render) call, derived purely from the
//! current item data plus the expansion path. Panels are produced by an
//! iterative walk indexed by depth — one descriptor per open panel — rather
//! than by recursive per-depth component instantiation, so repositioning a
//! panel only touches its own descriptor.

use alloc::vec::Vec;

use kurbo::Point;
use trellis_placement::Side;
use trellis_tree::{ItemKind, MenuItem};

/// Base z-index for menu panels; depth `d` renders at `OVERLAY_BASE_Z + d`.
///
/// Hosts portal every panel directly under the document root and stack them
/// above regular page content.
pub const OVERLAY_BASE_Z: i32 = 1_000;

/// ARIA role strings produced by the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `role="menu"` (panels).
    Menu,
    /// `role="menuitem"`.
    MenuItem,
    /// `role="menuitemcheckbox"` (checkbox selection mode).
    MenuItemCheckbox,
    /// `role="menuitemradio"` (radio selection mode).
    MenuItemRadio,
}

impl Role {
    /// The exact ARIA attribute value.
    pub fn as_aria(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
        }
    }
}

/// Visual interaction state of a row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowState {
    /// No interaction.
    #[default]
    Default,
    /// Pointer is over the row.
    Hovered,
    /// Pointer is down on the row.
    Pressed,
    /// Row holds keyboard focus in the active panel.
    Focused,
}

/// One rendered row.
///
/// Borrows the underlying [`MenuItem`] for its display slots; interaction
/// and accessibility state is computed per frame.
#[derive(Clone, Debug)]
pub struct Row<'a, K> {
    /// The underlying item (labels, slots, badge, flags, children).
    pub item: &'a MenuItem<K>,
    /// Derived item kind.
    pub kind: ItemKind,
    /// ARIA role; `None` for headings and dividers.
    pub role: Option<Role>,
    /// `aria-disabled`.
    pub aria_disabled: bool,
    /// `aria-haspopup="menu"`, set when the row owns a submenu.
    pub aria_haspopup: bool,
    /// `aria-expanded`; `Some` only when the row owns a submenu.
    pub aria_expanded: Option<bool>,
    /// `aria-checked`; `Some` only in selection mode on leaf rows.
    pub aria_checked: Option<bool>,
    /// `0` for exactly one row per panel (the focused one), `-1` otherwise.
    pub tab_index: i8,
    /// Visual interaction state.
    pub state: RowState,
    /// Row renders in its selected variant (flag or checked set).
    pub selected: bool,
}

/// One floating panel: the root (depth 0) or an open submenu.
#[derive(Clone, Debug)]
pub struct Panel<'a, K> {
    /// Depth in the expansion chain; 0 is the root panel.
    pub depth: usize,
    /// Top-left corner, viewport-space (`position: fixed`). For a
    /// flow-anchored root this is `Point::ZERO` and the host positions the
    /// panel itself.
    pub origin: Point,
    /// Side the panel opened on relative to its parent row.
    pub side: Side,
    /// Stacking order for the host's portal layer.
    pub z_index: i32,
    /// Rows in display order, including headings and dividers.
    pub rows: Vec<Row<'a, K>>,
}

impl<K> Panel<'_, K> {
    /// Panel role: always `role="menu"`.
    pub const ROLE: Role = Role::Menu;
    /// Panel orientation: always `aria-orientation="vertical"`.
    pub const ARIA_ORIENTATION: &'static str = "vertical";
}

/// Optional title/description header rendered above the root panel's rows.
#[derive(Copy, Clone, Debug)]
pub struct Header<'a> {
    /// Header title.
    pub title: Option<&'a str>,
    /// Header description.
    pub description: Option<&'a str>,
}

/// A complete render of the menu.
#[derive(Clone, Debug)]
pub struct MenuFrame<'a, K> {
    /// Title/description header, when configured.
    pub header: Option<Header<'a>>,
    /// Empty-state text; `Some` only when the item list is empty and the
    /// configured text is non-empty.
    pub empty_text: Option<&'a str>,
    /// Open panels, outermost first; always at least the root panel.
    pub panels: Vec<Panel<'a, K>>,
}

impl<'a, K> MenuFrame<'a, K> {
    /// The innermost (keyboard-active) panel.
    pub fn active_panel(&self) -> &Panel<'a, K> {
        // `panels` always holds at least the root panel.
        &self.panels[self.panels.len() - 1]
    }

    /// The row that should receive real focus after this frame, if any.
    pub fn focused_row(&self) -> Option<&Row<'a, K>> {
        self.active_panel().rows.iter().find(|r| r.tab_index == 0)
    }
}
