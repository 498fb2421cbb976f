// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller inputs and outputs: configuration, key intents, and effects.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use trellis_tree::MenuItem;

/// Where the root panel renders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Anchor {
    /// In normal document flow; the host positions the root panel itself and
    /// the controller leaves its origin at zero.
    #[default]
    Flow,
    /// Context-menu style invocation at an absolute viewport position.
    Point(Point),
}

/// Inline selection control rendered per item in selection mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionControl {
    /// Independent per-item toggles; activation keeps the menu open.
    Checkbox,
    /// Single choice; activation replaces the checked set and closes.
    Radio,
}

/// Selection mode: items render an inline check control and activation
/// toggles membership in the checked-id set.
#[derive(Clone, Debug)]
pub struct SelectionMode<K> {
    /// Which control the rows render.
    pub control: SelectionControl,
    /// Initially checked item ids.
    pub checked: HashSet<K>,
}

/// Configuration for a [`MenuController`](crate::MenuController).
///
/// Everything beyond `items` is optional; builder methods cover the common
/// cases.
#[derive(Clone, Debug)]
pub struct MenuConfig<K> {
    /// The item tree.
    pub items: Vec<MenuItem<K>>,
    /// Root panel anchoring.
    pub anchor: Anchor,
    /// Optional header title.
    pub title: Option<String>,
    /// Optional header description.
    pub description: Option<String>,
    /// Text shown when `items` is empty. Setting it to the empty string
    /// renders nothing.
    pub empty_text: String,
    /// Optional checkbox/radio selection mode.
    pub selection: Option<SelectionMode<K>>,
    /// Viewport rectangle of the external trigger element, if any; pointer
    /// downs inside it never count as outside clicks.
    pub trigger_rect: Option<Rect>,
    /// Viewport size used by the placement engine until the first
    /// [`on_viewport_resize`](crate::MenuController::on_viewport_resize).
    pub viewport: Size,
    /// Estimated panel extent used before the host reports measured panel
    /// rectangles.
    pub panel_size_hint: Size,
}

impl<K> MenuConfig<K> {
    /// Configuration with the given items and defaults everywhere else.
    pub fn new(items: Vec<MenuItem<K>>) -> Self {
        Self {
            items,
            anchor: Anchor::Flow,
            title: None,
            description: None,
            empty_text: String::from("No options"),
            selection: None,
            trigger_rect: None,
            viewport: Size::new(1024.0, 768.0),
            panel_size_hint: Size::new(220.0, 280.0),
        }
    }

    /// Builder: context-menu invocation at an absolute position.
    pub fn at_point(mut self, p: Point) -> Self {
        self.anchor = Anchor::Point(p);
        self
    }

    /// Builder: header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: header description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: custom empty-state text (empty string renders nothing).
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Builder: enable selection mode.
    pub fn with_selection(mut self, selection: SelectionMode<K>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Builder: register the external trigger rectangle.
    pub fn with_trigger_rect(mut self, rect: Rect) -> Self {
        self.trigger_rect = Some(rect);
        self
    }

    /// Builder: initial viewport size.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Keyboard intents the controller understands.
///
/// The host maps raw key events to these; everything else is ignored by the
/// menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move focus to the next focusable row at the current depth.
    ArrowDown,
    /// Move focus to the previous focusable row at the current depth.
    ArrowUp,
    /// Open the focused submenu and move focus into it.
    ArrowRight,
    /// Close the current submenu, or close the menu at the root.
    ArrowLeft,
    /// Jump focus to the first focusable row.
    Home,
    /// Jump focus to the last focusable row.
    End,
    /// Activate the focused row.
    Enter,
    /// Activate the focused row.
    Space,
    /// Close the menu and return focus to the trigger.
    Escape,
    /// Cycle focus forward within the current depth (focus trap).
    Tab,
    /// Cycle focus backward within the current depth (focus trap).
    ShiftTab,
}

/// Externally observable outcome of a state transition.
///
/// Effects replace the item-click / close / check-changed callbacks of a
/// retained-widget menu: event methods return them and the host reacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<K> {
    /// A leaf item was activated.
    Activated(K),
    /// Selection mode toggled an item's checked state.
    CheckChanged {
        /// The toggled item.
        id: K,
        /// Its new checked state.
        checked: bool,
    },
    /// The menu requests to close (leaf activation, outside click, Escape,
    /// ArrowLeft at the root, or an explicit close).
    Close,
    /// Keyboard focus should return to the external trigger element.
    FocusTrigger,
    /// The host should move real focus to this row after the next render.
    /// Focusing a row that no longer exists is a no-op.
    FocusRow(K),
}

/// Effect list returned by controller event methods.
///
/// Most transitions emit zero, one, or two effects; the inline capacity
/// covers the common cases without allocation.
pub type Effects<K> = SmallVec<[Effect<K>; 2]>;
