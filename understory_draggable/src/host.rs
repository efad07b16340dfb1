// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between a drag controller and the UI it runs in.
//!
//! Controllers never touch a document directly. Everything they need from the
//! environment (listener wiring, bounding boxes, computed style, style and
//! attribute writes, frame scheduling) goes through [`DragHost`]. A browser
//! binding implements it on top of the DOM; tests implement it with plain
//! maps and vectors.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect};

use crate::registry::ControllerId;

/// A place where pointer events are observed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Surface<E> {
    /// The global window.
    Window,
    /// The global document.
    #[default]
    Document,
    /// The document's root element.
    DocumentElement,
    /// Any other element.
    Element(E),
}

impl<E> Surface<E> {
    /// Returns `true` for the window, the document and its root element.
    ///
    /// A release anywhere in the viewport is reported on these surfaces, so a
    /// drag released on them cannot get stuck.
    pub fn is_top_level(&self) -> bool {
        !matches!(self, Self::Element(_))
    }
}

/// Which of a controller's handlers a listener runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer pressed on the handle.
    Press,
    /// Pointer moved on the movement surface.
    Move,
    /// Pointer released on the release surface.
    Release,
    /// Pointer left the leave surface.
    Leave,
}

impl ListenerKind {
    /// The DOM event name this listener subscribes to.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Press => "mousedown",
            Self::Move => "mousemove",
            Self::Release => "mouseup",
            Self::Leave => "mouseleave",
        }
    }
}

/// Identity of an attached handler.
///
/// Each controller creates one of these per [`ListenerKind`] when it is
/// constructed and hands the same value to [`DragHost::add_listener`] and
/// [`DragHost::remove_listener`], so hosts can match removals by equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Listener {
    /// The controller that owns the handler.
    pub controller: ControllerId,
    /// The handler to run.
    pub kind: ListenerKind,
}

impl Listener {
    /// The DOM event name this listener subscribes to.
    pub fn event_name(&self) -> &'static str {
        self.kind.event_name()
    }
}

/// Mouse button carried by a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button, by DOM button index.
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// A raw pointer event as delivered by the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The button that changed state (or the primary button for moves).
    pub button: PointerButton,
    /// Pointer position in viewport coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// A primary-button event at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Returns this event with a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Style properties a controller reads and writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `left`, in pixels.
    Left,
    /// `top`, in pixels.
    Top,
    /// `transform`.
    Transform,
}

impl StyleProperty {
    /// The CSS property name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Transform => "transform",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Services a drag controller needs from its environment.
pub trait DragHost {
    /// Handle type for elements in the host's tree.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Subscribes `listener` on `surface` for [`Listener::event_name`].
    fn add_listener(&mut self, surface: &Surface<Self::Element>, listener: Listener);

    /// Removes a subscription previously made with the same `surface` and `listener`.
    fn remove_listener(&mut self, surface: &Surface<Self::Element>, listener: Listener);

    /// Bounding box of `element` in viewport coordinates.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Parent container of `element`, if any.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Computed value of `property` on `element`, or `None` when unset.
    fn computed_style(&self, element: &Self::Element, property: StyleProperty) -> Option<String>;

    /// Overwrites `property` on `element`'s inline style.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);

    /// Sets an attribute such as `data-x` on `element`.
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Asks for [`DragRegistry::run_frame`](crate::DragRegistry::run_frame) to be
    /// called for `controller` on the next animation frame.
    fn request_frame(&mut self, controller: ControllerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_surfaces_are_top_level() {
        assert!(Surface::<u32>::Window.is_top_level());
        assert!(Surface::<u32>::Document.is_top_level());
        assert!(Surface::<u32>::DocumentElement.is_top_level());
        assert!(!Surface::Element(7_u32).is_top_level());
    }

    #[test]
    fn default_surface_is_document() {
        assert_eq!(Surface::<u32>::default(), Surface::Document);
    }

    #[test]
    fn dom_button_mapping() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Auxiliary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Other(4));
    }

    #[test]
    fn listener_event_names() {
        let id = ControllerId::from_raw(3);
        let press = Listener {
            controller: id,
            kind: ListenerKind::Press,
        };
        assert_eq!(press.event_name(), "mousedown");
        assert_eq!(ListenerKind::Move.event_name(), "mousemove");
        assert_eq!(ListenerKind::Release.event_name(), "mouseup");
        assert_eq!(ListenerKind::Leave.event_name(), "mouseleave");
    }
}
