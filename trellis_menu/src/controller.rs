// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller: one instance per open menu.

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Size};
use smallvec::smallvec;
use trellis_focus::{FocusCursor, Motion, focusable_ordinals};
use trellis_intent::{HoverDecision, HoverIntent};
use trellis_placement::{Side, place_root, place_submenu};
use trellis_tree::{ExpansionPath, ItemFlags, ItemKind, MenuItem, children_at_path};

use crate::frame::{Header, MenuFrame, OVERLAY_BASE_Z, Panel, Role, Row, RowState};
use crate::types::{Anchor, Effect, Effects, Key, MenuConfig, SelectionControl, SelectionMode};

/// Payload of a deferred hover switch: the depth it applies at and the
/// submenu id to open there (`None` truncates the path to that depth).
type HoverTarget<K> = (usize, Option<K>);

/// Headless controller for one hierarchical menu instance.
///
/// The controller owns every piece of interaction state — the expansion
/// path, the per-depth focus cursor, the pointer trace and pending hover
/// switch, measured geometry, and the selection-mode checked set. Hosts feed
/// it pointer/keyboard/resize events plus measured rectangles, apply the
/// [`Effect`]s each event returns, and draw the [`MenuFrame`] that
/// [`render`](Self::render) produces.
///
/// All state is created when the menu opens and dropped when it closes;
/// independent instances never share anything. Time is a caller-supplied
/// `u64` millisecond clock; [`next_deadline`](Self::next_deadline) tells the
/// host when to schedule its next [`poll`](Self::poll) wake-up.
#[derive(Clone, Debug)]
pub struct MenuController<K> {
    items: Vec<MenuItem<K>>,
    anchor: Anchor,
    title: Option<String>,
    description: Option<String>,
    empty_text: String,
    selection: Option<SelectionMode<K>>,
    trigger_rect: Option<Rect>,
    viewport: Size,
    panel_size_hint: Size,

    path: ExpansionPath<K>,
    cursor: FocusCursor,
    intent: HoverIntent<HoverTarget<K>>,
    hovered: Option<K>,
    pressed: Option<K>,
    row_rects: HashMap<K, Rect>,
    panel_rects: HashMap<usize, Rect>,
}

impl<K: Copy + Eq + Hash> MenuController<K> {
    /// Create a controller from a configuration.
    pub fn new(config: MenuConfig<K>) -> Self {
        Self {
            items: config.items,
            anchor: config.anchor,
            title: config.title,
            description: config.description,
            empty_text: config.empty_text,
            selection: config.selection,
            trigger_rect: config.trigger_rect,
            viewport: config.viewport,
            panel_size_hint: config.panel_size_hint,
            path: ExpansionPath::new(),
            cursor: FocusCursor::new(),
            intent: HoverIntent::new(),
            hovered: None,
            pressed: None,
            row_rects: HashMap::new(),
            panel_rects: HashMap::new(),
        }
    }

    /// The currently open submenu chain.
    pub fn expansion_path(&self) -> &[K] {
        self.path.ids()
    }

    /// Replace the item data.
    ///
    /// The expansion path is not touched here; entries that no longer
    /// resolve self-heal at the next [`render`](Self::render).
    pub fn set_items(&mut self, items: Vec<MenuItem<K>>) {
        self.items = items;
    }

    /// The selection-mode checked set, when selection mode is on.
    pub fn checked(&self) -> Option<&HashSet<K>> {
        self.selection.as_ref().map(|s| &s.checked)
    }

    /// Timestamp at which the host should call [`poll`](Self::poll) next,
    /// if a hover switch is pending.
    pub fn next_deadline(&self) -> Option<u64> {
        self.intent.deadline()
    }

    // ---- geometry intake -------------------------------------------------

    /// Report the measured viewport rectangle of a row.
    pub fn set_row_rect(&mut self, id: K, rect: Rect) {
        self.row_rects.insert(id, rect);
    }

    /// Report the measured viewport rectangle of the panel at `depth`.
    pub fn set_panel_rect(&mut self, depth: usize, rect: Rect) {
        self.panel_rects.insert(depth, rect);
    }

    /// Update the estimated panel extent used before panels are measured.
    pub fn set_panel_size_hint(&mut self, size: Size) {
        self.panel_size_hint = size;
    }

    // ---- pointer events --------------------------------------------------

    /// Feed a pointer move. Also releases a pending hover switch whose
    /// deadline has already passed.
    pub fn on_pointer_move(&mut self, p: Point, now: u64) -> Effects<K> {
        self.intent.record_move(p);
        self.poll(now)
    }

    /// The pointer entered the row `id`.
    ///
    /// Focus follows hover at the row's depth. If the row owns a submenu the
    /// expansion path switches to it — immediately, or after the debounce
    /// when the pointer is travelling toward the currently open panel.
    /// Hovering a leaf schedules closing the deeper chain under the same
    /// rule. Headings, dividers, and disabled rows are inert.
    pub fn on_hover(&mut self, id: K, now: u64) -> Effects<K> {
        let Some((depth, item)) = self.locate(id) else {
            return Effects::new();
        };
        if !item.is_focusable() {
            return Effects::new();
        }
        let desired = item.has_children().then_some(id);
        self.hovered = Some(id);
        if let Some(ordinal) = self.focusable_ordinal(depth, id) {
            self.cursor.set(depth, ordinal);
        }

        // Already in the desired state: nothing to switch, and a pending
        // switch away from here is obsolete.
        let unchanged = match desired {
            Some(open) => self.path.at(depth) == Some(open),
            None => self.path.len() <= depth,
        };
        if unchanged {
            self.intent.cancel();
            return Effects::new();
        }

        // The safe-triangle test runs against the panel the switch would
        // replace: the one opened from this row's depth, when present.
        let open_panel = if self.path.at(depth).is_some() {
            self.panel_rects.get(&(depth + 1)).copied()
        } else {
            None
        };
        if let HoverDecision::Immediate = self.intent.decide((depth, desired), open_panel, now) {
            self.apply_hover(depth, desired);
        }
        Effects::new()
    }

    /// The pointer left the menu entirely.
    pub fn on_hover_leave(&mut self) -> Effects<K> {
        self.hovered = None;
        self.pressed = None;
        self.intent.cancel();
        Effects::new()
    }

    /// Release a pending hover switch once its deadline passed.
    pub fn poll(&mut self, now: u64) -> Effects<K> {
        if let Some((depth, desired)) = self.intent.poll(now) {
            self.apply_hover(depth, desired);
        }
        Effects::new()
    }

    /// Pointer down, viewport-space.
    ///
    /// Inside a panel this records the pressed row; inside the trigger it is
    /// ignored (the host owns trigger toggling); anywhere else it closes the
    /// menu. With no measured panel geometry at all, nothing closes.
    pub fn on_pointer_down(&mut self, p: Point) -> Effects<K> {
        if self.trigger_rect.is_some_and(|r| r.contains(p)) {
            return Effects::new();
        }
        if self.panel_rects.values().any(|r| r.contains(p)) {
            self.pressed = self
                .row_rects
                .iter()
                .find(|(_, r)| r.contains(p))
                .map(|(id, _)| *id);
            return Effects::new();
        }
        if self.panel_rects.is_empty() {
            // Geometry never reported; refuse to close blind.
            return Effects::new();
        }
        self.reset();
        smallvec![Effect::Close]
    }

    /// Pointer up anywhere; clears the pressed row.
    pub fn on_pointer_up(&mut self) -> Effects<K> {
        self.pressed = None;
        Effects::new()
    }

    /// Activate row `id` (pointer click, or Enter/Space via [`on_key`](Self::on_key)).
    ///
    /// A submenu parent toggles open/closed, keeping focus on itself. A leaf
    /// emits [`Effect::Activated`] and closes — except in selection mode,
    /// where activation toggles the checked set instead.
    pub fn on_activate(&mut self, id: K) -> Effects<K> {
        self.pressed = None;
        let Some((depth, item)) = self.locate(id) else {
            return Effects::new();
        };
        if !item.is_focusable() {
            return Effects::new();
        }

        if item.has_children() {
            self.path.toggle(depth, id);
            self.after_path_change(depth, id);
            return smallvec![Effect::FocusRow(id)];
        }

        match self.selection.as_mut() {
            Some(selection) => match selection.control {
                SelectionControl::Checkbox => {
                    let checked = if selection.checked.remove(&id) {
                        false
                    } else {
                        selection.checked.insert(id);
                        true
                    };
                    smallvec![Effect::CheckChanged { id, checked }]
                }
                SelectionControl::Radio => {
                    selection.checked.clear();
                    selection.checked.insert(id);
                    self.reset();
                    smallvec![
                        Effect::CheckChanged { id, checked: true },
                        Effect::Activated(id),
                        Effect::Close,
                    ]
                }
            },
            None => {
                self.reset();
                smallvec![Effect::Activated(id), Effect::Close]
            }
        }
    }

    // ---- keyboard --------------------------------------------------------

    /// Handle a keyboard intent at the innermost open panel.
    pub fn on_key(&mut self, key: Key) -> Effects<K> {
        let depth = self.path.len();
        match key {
            Key::ArrowDown | Key::Tab => self.move_focus(depth, Motion::Next),
            Key::ArrowUp | Key::ShiftTab => self.move_focus(depth, Motion::Prev),
            Key::Home => self.move_focus(depth, Motion::First),
            Key::End => self.move_focus(depth, Motion::Last),
            Key::ArrowRight => {
                let Some(id) = self.focused_id(depth) else {
                    return Effects::new();
                };
                let Some((_, item)) = self.locate(id) else {
                    return Effects::new();
                };
                if !item.has_children() {
                    return Effects::new();
                }
                // Unlike activation, ArrowRight moves focus into the child.
                let first_child = item.children.iter().find(|c| c.is_focusable()).map(|c| c.id);
                self.path.open_to(depth, id);
                self.after_path_change(depth, id);
                self.cursor.set(depth + 1, 0);
                match first_child {
                    Some(child) => smallvec![Effect::FocusRow(child)],
                    None => Effects::new(),
                }
            }
            Key::ArrowLeft => match self.path.pop() {
                Some(popped) => {
                    let parent_depth = self.path.len();
                    self.cursor.truncate(parent_depth);
                    if let Some(ordinal) = self.focusable_ordinal(parent_depth, popped) {
                        self.cursor.set(parent_depth, ordinal);
                    }
                    self.drop_stale_panels();
                    self.intent.cancel();
                    smallvec![Effect::FocusRow(popped)]
                }
                None => {
                    self.reset();
                    smallvec![Effect::Close, Effect::FocusTrigger]
                }
            },
            Key::Enter | Key::Space => match self.focused_id(depth) {
                Some(id) => self.on_activate(id),
                None => Effects::new(),
            },
            Key::Escape => {
                // Root-level semantics at any depth: close outright.
                self.reset();
                smallvec![Effect::Close, Effect::FocusTrigger]
            }
        }
    }

    /// The host asked the menu to close.
    pub fn close(&mut self) -> Effects<K> {
        self.reset();
        smallvec![Effect::Close]
    }

    /// The viewport changed size; cached panel positions are stale, so every
    /// submenu closes.
    pub fn on_viewport_resize(&mut self, size: Size) -> Effects<K> {
        self.viewport = size;
        self.path.clear();
        self.cursor.truncate(0);
        self.intent.cancel();
        self.panel_rects.retain(|depth, _| *depth == 0);
        Effects::new()
    }

    // ---- rendering -------------------------------------------------------

    /// Produce the frame for the current state.
    ///
    /// The frame is always derived fresh from the item data plus the
    /// expansion path; a stale path self-heals here before panels are built.
    pub fn render(&mut self) -> MenuFrame<'_, K> {
        self.path.retain_valid(&self.items);
        self.drop_stale_panels();

        let open = self.path.len();
        let mut panels = Vec::with_capacity(open + 1);
        let mut prefer = Side::Right;

        for depth in 0..=open {
            let rows_src = children_at_path(&self.items, &self.path.ids()[..depth])
                .unwrap_or(&[]);
            let size = self
                .panel_rects
                .get(&depth)
                .map(|r| r.size())
                .unwrap_or(self.panel_size_hint);

            let (origin, side) = if depth == 0 {
                match self.anchor {
                    Anchor::Flow => (Point::ZERO, Side::Right),
                    Anchor::Point(p) => (place_root(p, size, self.viewport), Side::Right),
                }
            } else {
                let parent_id = self.path.ids()[depth - 1];
                let parent_rect = self
                    .row_rects
                    .get(&parent_id)
                    .copied()
                    .unwrap_or(Rect::ZERO);
                let placement = place_submenu(parent_rect, size, self.viewport, prefer);
                prefer = placement.side;
                (placement.origin, placement.side)
            };

            panels.push(self.build_panel(depth, rows_src, origin, side, depth == open));
        }

        MenuFrame {
            header: (self.title.is_some() || self.description.is_some()).then(|| Header {
                title: self.title.as_deref(),
                description: self.description.as_deref(),
            }),
            empty_text: (self.items.is_empty() && !self.empty_text.is_empty())
                .then_some(self.empty_text.as_str()),
            panels,
        }
    }

    fn build_panel<'a>(
        &self,
        depth: usize,
        rows_src: &'a [MenuItem<K>],
        origin: Point,
        side: Side,
        active: bool,
    ) -> Panel<'a, K> {
        let ordinals = focusable_ordinals(rows_src, |item| item.is_focusable());
        let focused_row = if ordinals.is_empty() {
            None
        } else {
            let ordinal = self.cursor.index_at(depth).min(ordinals.len() - 1);
            Some(ordinals[ordinal])
        };

        let rows = rows_src
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let focused = focused_row == Some(index);
                self.build_row(depth, item, focused, active)
            })
            .collect();

        Panel {
            depth,
            origin,
            side,
            z_index: OVERLAY_BASE_Z + depth as i32,
            rows,
        }
    }

    fn build_row<'a>(
        &self,
        depth: usize,
        item: &'a MenuItem<K>,
        focused: bool,
        active: bool,
    ) -> Row<'a, K> {
        let kind = item.kind();
        let interactive = item.is_interactive();
        let disabled = !item.is_focusable() && interactive;
        let has_children = item.has_children();

        let in_selection = self.selection.is_some() && kind == ItemKind::Action;
        let role = match kind {
            ItemKind::Heading | ItemKind::Divider => None,
            ItemKind::Submenu => Some(Role::MenuItem),
            ItemKind::Action => Some(match self.selection.as_ref().map(|s| s.control) {
                Some(SelectionControl::Checkbox) => Role::MenuItemCheckbox,
                Some(SelectionControl::Radio) => Role::MenuItemRadio,
                None => Role::MenuItem,
            }),
        };
        let checked = in_selection.then(|| {
            self.selection
                .as_ref()
                .is_some_and(|s| s.checked.contains(&item.id))
        });

        let state = if self.pressed == Some(item.id) {
            RowState::Pressed
        } else if self.hovered == Some(item.id) {
            RowState::Hovered
        } else if focused && active {
            RowState::Focused
        } else {
            RowState::Default
        };

        Row {
            item,
            kind,
            role,
            aria_disabled: disabled,
            aria_haspopup: has_children,
            aria_expanded: has_children.then(|| self.path.at(depth) == Some(item.id)),
            aria_checked: checked,
            tab_index: if focused { 0 } else { -1 },
            state,
            selected: item.flags.contains(ItemFlags::SELECTED) || checked == Some(true),
        }
    }

    // ---- internals -------------------------------------------------------

    /// Rows visible in the panel at `depth` under the current path.
    fn rows_at(&self, depth: usize) -> &[MenuItem<K>] {
        children_at_path(&self.items, &self.path.ids()[..depth.min(self.path.len())])
            .unwrap_or(&[])
    }

    /// Find the visible depth of `id` among the currently open panels.
    fn locate(&self, id: K) -> Option<(usize, &MenuItem<K>)> {
        for depth in 0..=self.path.len() {
            if let Some(item) = self.rows_at(depth).iter().find(|item| item.id == id) {
                return Some((depth, item));
            }
        }
        None
    }

    /// Focusable ordinal of `id` within the panel at `depth`.
    fn focusable_ordinal(&self, depth: usize, id: K) -> Option<usize> {
        self.rows_at(depth)
            .iter()
            .filter(|item| item.is_focusable())
            .position(|item| item.id == id)
    }

    fn focused_id(&self, depth: usize) -> Option<K> {
        let rows = self.rows_at(depth);
        let ordinals = focusable_ordinals(rows, |item| item.is_focusable());
        if ordinals.is_empty() {
            return None;
        }
        let ordinal = self.cursor.index_at(depth).min(ordinals.len() - 1);
        Some(rows[ordinals[ordinal]].id)
    }

    fn move_focus(&mut self, depth: usize, motion: Motion) -> Effects<K> {
        let count = focusable_ordinals(self.rows_at(depth), |item| item.is_focusable()).len();
        if count == 0 {
            return Effects::new();
        }
        self.cursor.apply(depth, motion, count);
        match self.focused_id(depth) {
            Some(id) => smallvec![Effect::FocusRow(id)],
            None => Effects::new(),
        }
    }

    /// Apply a (possibly deferred) hover switch.
    fn apply_hover(&mut self, depth: usize, desired: Option<K>) {
        match desired {
            Some(id) => {
                self.path.open_to(depth, id);
                self.after_path_change(depth, id);
            }
            None => {
                self.path.truncate(depth);
                self.cursor.truncate(depth);
                self.drop_stale_panels();
            }
        }
    }

    /// Housekeeping after the path changed at `depth` through `id`.
    fn after_path_change(&mut self, depth: usize, id: K) {
        self.cursor.truncate(depth);
        if let Some(ordinal) = self.focusable_ordinal(depth, id) {
            self.cursor.set(depth, ordinal);
        }
        self.drop_stale_panels();
        self.intent.cancel();
    }

    fn drop_stale_panels(&mut self) {
        let open = self.path.len();
        self.panel_rects.retain(|depth, _| *depth <= open);
    }

    fn reset(&mut self) {
        self.path.clear();
        self.cursor.clear();
        self.intent.cancel();
        self.hovered = None;
        self.pressed = None;
        self.row_rects.clear();
        self.panel_rects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use trellis_intent::HOVER_SWITCH_DELAY_MS;

    fn flat() -> Vec<MenuItem<u32>> {
        vec![
            MenuItem::new(1).with_label("A"),
            MenuItem::new(2).with_label("B").disabled(),
            MenuItem::new(3).with_label("C"),
        ]
    }

    fn nested() -> Vec<MenuItem<u32>> {
        vec![
            MenuItem::new(1).with_label("File").with_children(vec![
                MenuItem::new(11).with_label("Export").with_children(vec![
                    MenuItem::new(111).with_label("PNG"),
                ]),
                MenuItem::new(12).with_label("Close tab"),
            ]),
            MenuItem::new(2).with_label("Edit"),
            MenuItem::new(3).with_label("View").with_children(vec![
                MenuItem::new(31).with_label("Zoom in"),
            ]),
        ]
    }

    fn menu(items: Vec<MenuItem<u32>>) -> MenuController<u32> {
        MenuController::new(MenuConfig::new(items))
    }

    #[test]
    fn initial_focus_is_first_focusable_row() {
        let mut m = menu(vec![
            MenuItem::heading(9, "Section"),
            MenuItem::new(1).with_label("A").disabled(),
            MenuItem::new(2).with_label("B"),
        ]);
        let frame = m.render();
        assert_eq!(frame.focused_row().unwrap().item.id, 2);
        // Exactly one row per panel carries tabIndex 0.
        let zeros = frame.panels[0].rows.iter().filter(|r| r.tab_index == 0).count();
        assert_eq!(zeros, 1);
    }

    #[test]
    fn arrow_down_skips_disabled_and_wraps() {
        let mut m = menu(flat());
        // From A, Down lands on C (B is disabled)…
        assert_eq!(m.on_key(Key::ArrowDown).as_slice(), &[Effect::FocusRow(3)]);
        // …and Down again wraps back to A.
        assert_eq!(m.on_key(Key::ArrowDown).as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn arrow_up_wraps_backward() {
        let mut m = menu(flat());
        assert_eq!(m.on_key(Key::ArrowUp).as_slice(), &[Effect::FocusRow(3)]);
        assert_eq!(m.on_key(Key::ArrowUp).as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn n_arrow_downs_return_to_start() {
        let mut m = menu(flat());
        // Two focusable rows: two Downs wrap to the start.
        m.on_key(Key::ArrowDown);
        let effects = m.on_key(Key::ArrowDown);
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn tab_is_trapped_within_the_current_depth() {
        let mut m = menu(flat());
        assert_eq!(m.on_key(Key::Tab).as_slice(), &[Effect::FocusRow(3)]);
        assert_eq!(m.on_key(Key::Tab).as_slice(), &[Effect::FocusRow(1)]);
        assert_eq!(m.on_key(Key::ShiftTab).as_slice(), &[Effect::FocusRow(3)]);
        // The expansion path never changed; focus stayed inside the menu.
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn home_and_end_jump_to_extremes() {
        let mut m = menu(flat());
        assert_eq!(m.on_key(Key::End).as_slice(), &[Effect::FocusRow(3)]);
        assert_eq!(m.on_key(Key::Home).as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn arrow_right_opens_one_level_and_moves_focus_in() {
        let mut m = menu(nested());
        let effects = m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1]);
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(11)]);

        // One more level, never two per key press.
        let effects = m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1, 11]);
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(111)]);
    }

    #[test]
    fn arrow_right_on_leaf_is_inert() {
        let mut m = menu(nested());
        m.on_key(Key::ArrowDown); // Edit (leaf)
        assert!(m.on_key(Key::ArrowRight).is_empty());
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn arrow_left_closes_one_level_and_restores_parent_focus() {
        let mut m = menu(nested());
        m.on_key(Key::ArrowRight);
        m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1, 11]);

        let effects = m.on_key(Key::ArrowLeft);
        assert_eq!(m.expansion_path(), &[1]);
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(11)]);

        let effects = m.on_key(Key::ArrowLeft);
        assert!(m.expansion_path().is_empty());
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn arrow_left_at_root_closes_and_returns_focus_to_trigger() {
        let mut m = menu(nested());
        let effects = m.on_key(Key::ArrowLeft);
        assert_eq!(effects.as_slice(), &[Effect::Close, Effect::FocusTrigger]);
    }

    #[test]
    fn escape_closes_outright_at_any_depth() {
        let mut m = menu(nested());
        m.on_key(Key::ArrowRight);
        m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1, 11]);

        // Root-level semantics: no single pop.
        let effects = m.on_key(Key::Escape);
        assert_eq!(effects.as_slice(), &[Effect::Close, Effect::FocusTrigger]);
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn activation_toggles_submenu_and_keeps_focus_on_parent() {
        let mut m = menu(nested());
        let effects = m.on_activate(1);
        assert_eq!(m.expansion_path(), &[1]);
        // Focus stays on the parent, unlike ArrowRight.
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(1)]);

        let effects = m.on_activate(1);
        assert!(m.expansion_path().is_empty());
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(1)]);
    }

    #[test]
    fn even_number_of_activations_restores_the_path() {
        let mut m = menu(nested());
        m.on_activate(1);
        let before = m.expansion_path().to_vec();
        m.on_activate(11);
        m.on_activate(11);
        assert_eq!(m.expansion_path(), before.as_slice());
    }

    #[test]
    fn leaf_activation_reports_and_closes() {
        let mut m = menu(nested());
        m.on_activate(1);
        let effects = m.on_activate(12);
        assert_eq!(effects.as_slice(), &[Effect::Activated(12), Effect::Close]);
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn enter_and_space_activate_the_focused_row() {
        let mut m = menu(nested());
        let effects = m.on_key(Key::Enter);
        // Focused row is the submenu parent: toggles open, focus stays.
        assert_eq!(m.expansion_path(), &[1]);
        assert_eq!(effects.as_slice(), &[Effect::FocusRow(1)]);

        let mut m = menu(flat());
        let effects = m.on_key(Key::Space);
        assert_eq!(effects.as_slice(), &[Effect::Activated(1), Effect::Close]);
    }

    #[test]
    fn disabled_heading_and_divider_rows_are_inert() {
        let mut m = menu(vec![
            MenuItem::heading(9, "Section"),
            MenuItem::divider(8),
            MenuItem::new(2).with_label("B").disabled(),
            MenuItem::new(3).with_label("C"),
        ]);
        assert!(m.on_activate(9).is_empty());
        assert!(m.on_activate(8).is_empty());
        assert!(m.on_activate(2).is_empty());
        assert!(m.on_hover(2, 0).is_empty());
    }

    #[test]
    fn hover_opens_submenu_immediately_when_no_sibling_panel_is_open() {
        let mut m = menu(nested());
        m.on_hover(1, 1_000);
        assert_eq!(m.expansion_path(), &[1]);

        let frame = m.render();
        assert_eq!(frame.panels.len(), 2);
        let ids: Vec<u32> = frame.panels[1].rows.iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn hover_switch_is_deferred_while_travelling_toward_open_panel() {
        let mut m = menu(nested());
        m.on_hover(1, 0);
        m.set_panel_rect(1, Rect::new(200.0, 0.0, 360.0, 240.0));

        // Motion aimed at the open panel.
        m.on_pointer_move(Point::new(120.0, 100.0), 500);
        m.on_pointer_move(Point::new(140.0, 104.0), 600);
        m.on_hover(3, 1_000);

        // Switch held until the debounce deadline.
        assert_eq!(m.expansion_path(), &[1]);
        assert_eq!(m.next_deadline(), Some(1_000 + HOVER_SWITCH_DELAY_MS));
        m.poll(1_200);
        assert_eq!(m.expansion_path(), &[1]);
        m.poll(1_000 + HOVER_SWITCH_DELAY_MS);
        assert_eq!(m.expansion_path(), &[3]);
    }

    #[test]
    fn hover_switch_is_immediate_when_moving_away_from_panel() {
        let mut m = menu(nested());
        m.on_hover(1, 0);
        m.set_panel_rect(1, Rect::new(200.0, 0.0, 360.0, 240.0));

        // Straight down, past the safe triangle.
        m.on_pointer_move(Point::new(120.0, 100.0), 500);
        m.on_pointer_move(Point::new(121.0, 300.0), 600);
        m.on_hover(3, 1_000);
        assert_eq!(m.expansion_path(), &[3]);
    }

    #[test]
    fn hovering_leaf_defers_closing_the_open_chain_too() {
        let mut m = menu(nested());
        m.on_hover(1, 0);
        m.set_panel_rect(1, Rect::new(200.0, 0.0, 360.0, 240.0));

        m.on_pointer_move(Point::new(120.0, 100.0), 500);
        m.on_pointer_move(Point::new(140.0, 104.0), 600);
        m.on_hover(2, 1_000); // leaf sibling
        assert_eq!(m.expansion_path(), &[1]);
        m.poll(2_000);
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn hovering_back_onto_open_parent_cancels_pending_switch() {
        let mut m = menu(nested());
        m.on_hover(1, 0);
        m.set_panel_rect(1, Rect::new(200.0, 0.0, 360.0, 240.0));

        m.on_pointer_move(Point::new(120.0, 100.0), 500);
        m.on_pointer_move(Point::new(140.0, 104.0), 600);
        m.on_hover(3, 1_000);
        assert!(m.next_deadline().is_some());

        m.on_hover(1, 1_100);
        assert_eq!(m.next_deadline(), None);
        m.poll(10_000);
        assert_eq!(m.expansion_path(), &[1]);
    }

    #[test]
    fn hover_leave_cancels_pending_switch() {
        let mut m = menu(nested());
        m.on_hover(1, 0);
        m.set_panel_rect(1, Rect::new(200.0, 0.0, 360.0, 240.0));
        m.on_pointer_move(Point::new(120.0, 100.0), 500);
        m.on_pointer_move(Point::new(140.0, 104.0), 600);
        m.on_hover(3, 1_000);

        m.on_hover_leave();
        m.poll(10_000);
        assert_eq!(m.expansion_path(), &[1]);
    }

    #[test]
    fn viewport_resize_closes_every_submenu() {
        let mut m = menu(nested());
        m.on_key(Key::ArrowRight);
        m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1, 11]);

        m.on_viewport_resize(Size::new(800.0, 600.0));
        assert!(m.expansion_path().is_empty());
        assert_eq!(m.render().panels.len(), 1);
    }

    #[test]
    fn outside_pointer_down_closes_but_inside_and_trigger_do_not() {
        let trigger = Rect::new(0.0, 0.0, 40.0, 20.0);
        let mut m = MenuController::new(
            MenuConfig::new(nested()).with_trigger_rect(trigger),
        );
        m.set_panel_rect(0, Rect::new(0.0, 30.0, 220.0, 300.0));

        assert!(m.on_pointer_down(Point::new(100.0, 100.0)).is_empty());
        assert!(m.on_pointer_down(Point::new(10.0, 10.0)).is_empty());
        let effects = m.on_pointer_down(Point::new(500.0, 500.0));
        assert_eq!(effects.as_slice(), &[Effect::Close]);
    }

    #[test]
    fn outside_click_never_fires_without_measured_geometry() {
        let mut m = menu(nested());
        assert!(m.on_pointer_down(Point::new(500.0, 500.0)).is_empty());
    }

    #[test]
    fn pressed_row_state_follows_pointer_down_and_up() {
        let mut m = menu(flat());
        m.set_panel_rect(0, Rect::new(0.0, 0.0, 220.0, 120.0));
        m.set_row_rect(1, Rect::new(0.0, 0.0, 220.0, 32.0));

        m.on_pointer_down(Point::new(10.0, 10.0));
        let frame = m.render();
        assert_eq!(frame.panels[0].rows[0].state, RowState::Pressed);

        m.on_pointer_up();
        let frame = m.render();
        assert_ne!(frame.panels[0].rows[0].state, RowState::Pressed);
    }

    #[test]
    fn checkbox_selection_toggles_and_keeps_menu_open() {
        let mut m = MenuController::new(MenuConfig::new(flat()).with_selection(SelectionMode {
            control: SelectionControl::Checkbox,
            checked: HashSet::new(),
        }));

        let effects = m.on_activate(1);
        assert_eq!(
            effects.as_slice(),
            &[Effect::CheckChanged { id: 1, checked: true }]
        );
        assert!(m.checked().unwrap().contains(&1));

        let frame = m.render();
        let row = &frame.panels[0].rows[0];
        assert_eq!(row.role, Some(Role::MenuItemCheckbox));
        assert_eq!(row.aria_checked, Some(true));
        assert!(row.selected);

        let effects = m.on_activate(1);
        assert_eq!(
            effects.as_slice(),
            &[Effect::CheckChanged { id: 1, checked: false }]
        );
        assert!(!m.checked().unwrap().contains(&1));
    }

    #[test]
    fn radio_selection_replaces_checked_set_and_closes() {
        let mut checked = HashSet::new();
        checked.insert(1_u32);
        let mut m = MenuController::new(MenuConfig::new(flat()).with_selection(SelectionMode {
            control: SelectionControl::Radio,
            checked,
        }));

        let effects = m.on_activate(3);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::CheckChanged { id: 3, checked: true },
                Effect::Activated(3),
                Effect::Close,
            ]
        );
        let checked = m.checked().unwrap();
        assert!(checked.contains(&3) && !checked.contains(&1));
    }

    #[test]
    fn rows_expose_the_aria_surface() {
        let mut m = menu(vec![
            MenuItem::heading(9, "Section"),
            MenuItem::divider(8),
            MenuItem::new(1).with_label("Parent").with_children(vec![
                MenuItem::new(11).with_label("Child"),
            ]),
            MenuItem::new(2).with_label("Leaf").disabled(),
        ]);

        let frame = m.render();
        let rows = &frame.panels[0].rows;
        assert_eq!(rows[0].role, None); // heading
        assert_eq!(rows[0].tab_index, -1);
        assert_eq!(rows[1].role, None); // divider
        assert_eq!(rows[2].role, Some(Role::MenuItem));
        assert!(rows[2].aria_haspopup);
        assert_eq!(rows[2].aria_expanded, Some(false));
        assert!(rows[3].aria_disabled);
        assert_eq!(rows[3].aria_expanded, None);
        assert_eq!(Panel::<u32>::ROLE.as_aria(), "menu");
        assert_eq!(Panel::<u32>::ARIA_ORIENTATION, "vertical");

        m.on_activate(1);
        let frame = m.render();
        assert_eq!(frame.panels[0].rows[2].aria_expanded, Some(true));
    }

    #[test]
    fn stale_expansion_path_self_heals_on_render() {
        let mut m = menu(nested());
        m.on_key(Key::ArrowRight);
        m.on_key(Key::ArrowRight);
        assert_eq!(m.expansion_path(), &[1, 11]);

        // The host swaps the item data out from under the open chain.
        m.set_items(vec![MenuItem::new(2_u32).with_label("Edit")]);
        let frame = m.render();
        assert_eq!(frame.panels.len(), 1);
        assert!(m.expansion_path().is_empty());
    }

    #[test]
    fn submenu_flips_left_when_right_side_overflows() {
        let mut m = menu(nested());
        m.on_activate(1);
        // Parent row ends at x=1000 in a 1024-wide viewport; the 220-wide
        // hinted panel cannot fit on the right.
        m.set_row_rect(1, Rect::new(800.0, 100.0, 1000.0, 132.0));

        let frame = m.render();
        assert_eq!(frame.panels[1].side, Side::Left);
        assert_eq!(frame.panels[1].origin.x, 800.0 - 4.0 - 220.0);
    }

    #[test]
    fn chained_submenus_stick_to_the_chosen_side() {
        let mut m = menu(nested());
        m.on_activate(1);
        m.on_activate(11);
        m.set_row_rect(1, Rect::new(800.0, 100.0, 1000.0, 132.0));
        // Both sides fit for the inner parent row; stickiness keeps Left.
        m.set_row_rect(11, Rect::new(580.0, 140.0, 796.0, 172.0));

        let frame = m.render();
        assert_eq!(frame.panels[1].side, Side::Left);
        assert_eq!(frame.panels[2].side, Side::Left);
    }

    #[test]
    fn point_anchor_clamps_root_panel_into_the_viewport() {
        let mut m = MenuController::new(
            MenuConfig::new(flat()).at_point(Point::new(1000.0, 700.0)),
        );
        let frame = m.render();
        // Hinted 220x280 panel flips to the other side of the anchor.
        assert_eq!(frame.panels[0].origin, Point::new(780.0, 420.0));
    }

    #[test]
    fn empty_item_list_renders_the_empty_state_text() {
        let mut m = menu(vec![]);
        assert_eq!(m.render().empty_text, Some("No options"));

        let mut m = MenuController::new(
            MenuConfig::new(Vec::<MenuItem<u32>>::new()).with_empty_text("Nothing here"),
        );
        assert_eq!(m.render().empty_text, Some("Nothing here"));

        // Explicitly empty text renders nothing at all.
        let mut m = MenuController::new(
            MenuConfig::new(Vec::<MenuItem<u32>>::new()).with_empty_text(""),
        );
        assert_eq!(m.render().empty_text, None);
    }

    #[test]
    fn header_renders_when_title_or_description_is_set() {
        let mut m = MenuController::new(
            MenuConfig::new(flat())
                .with_title("Actions")
                .with_description("Pick one"),
        );
        let frame = m.render();
        let header = frame.header.unwrap();
        assert_eq!(header.title, Some("Actions"));
        assert_eq!(header.description, Some("Pick one"));

        let mut m = menu(flat());
        assert!(m.render().header.is_none());
    }
}

