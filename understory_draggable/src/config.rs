// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a draggable relationship.
//!
//! Only the handle is required. Everything else defaults:
//!
//! | field           | default                         |
//! |-----------------|---------------------------------|
//! | target          | the handle                      |
//! | move surface    | [`Surface::Document`]           |
//! | release surface | [`Surface::Document`]           |
//! | leave surface   | [`Surface::Document`]           |
//! | containment     | [`Containment::Parent`]         |
//! | mode            | [`PositioningMode::Offset`]     |
//! | leave tracking  | off                             |
//! | callbacks       | none                            |
//!
//! ```
//! use understory_draggable::{Containment, DragConfig, PositioningMode, Surface};
//!
//! let config = DragConfig::new(1_u32)
//!     .with_target(2)
//!     .with_containment(Containment::from_edges(0.0, 800.0, 0.0, 600.0))
//!     .with_mode(PositioningMode::Absolute)
//!     .with_release_surface(Surface::Element(3))
//!     .with_leave_tracking(true)
//!     .on_release(|_event, info| {
//!         let _ = info.position;
//!     });
//! assert!(config.advisory().is_none());
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::bounds::Containment;
use crate::controller::DragInfo;
use crate::host::{PointerEvent, Surface};
use crate::position::PositioningMode;

/// A user hook, given the raw event and a snapshot of the controller.
pub type DragCallback = Box<dyn FnMut(&PointerEvent, &DragInfo)>;

/// Hooks run on press, move, release, and leave.
#[derive(Default)]
pub struct DragCallbacks {
    /// After a qualifying press starts a drag.
    pub on_press: Option<DragCallback>,
    /// After a frame applied a move.
    pub on_move: Option<DragCallback>,
    /// After a drag ended, by release or by leaving.
    pub on_release: Option<DragCallback>,
    /// After a drag ended by the pointer leaving the leave surface.
    pub on_leave: Option<DragCallback>,
}

impl DragCallbacks {
    pub(crate) fn press(&mut self, event: &PointerEvent, info: &DragInfo) {
        if let Some(f) = self.on_press.as_mut() {
            f(event, info);
        }
    }

    pub(crate) fn moved(&mut self, event: &PointerEvent, info: &DragInfo) {
        if let Some(f) = self.on_move.as_mut() {
            f(event, info);
        }
    }

    pub(crate) fn release(&mut self, event: &PointerEvent, info: &DragInfo) {
        if let Some(f) = self.on_release.as_mut() {
            f(event, info);
        }
    }

    pub(crate) fn leave(&mut self, event: &PointerEvent, info: &DragInfo) {
        if let Some(f) = self.on_leave.as_mut() {
            f(event, info);
        }
    }
}

impl fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_press", &self.on_press.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_release", &self.on_release.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

/// Everything needed to make an element draggable.
#[derive(Debug)]
pub struct DragConfig<E> {
    /// The element whose press starts a drag.
    pub handle: E,
    /// The element that moves; the handle when `None`.
    pub target: Option<E>,
    /// Where movement is observed.
    pub move_surface: Surface<E>,
    /// Where release is observed.
    pub release_surface: Surface<E>,
    /// Where "pointer left" is observed when leave tracking is on.
    pub leave_surface: Surface<E>,
    /// The rectangle the target must stay inside.
    pub containment: Containment<E>,
    /// How the position is written.
    pub mode: PositioningMode,
    /// End the drag when the pointer leaves [`leave_surface`](Self::leave_surface).
    pub track_leave: bool,
    /// User hooks.
    pub callbacks: DragCallbacks,
}

impl<E> DragConfig<E> {
    /// A configuration with every optional field at its default.
    pub fn new(handle: E) -> Self {
        Self {
            handle,
            target: None,
            move_surface: Surface::Document,
            release_surface: Surface::Document,
            leave_surface: Surface::Document,
            containment: Containment::Parent,
            mode: PositioningMode::Offset,
            track_leave: false,
            callbacks: DragCallbacks::default(),
        }
    }

    /// Moves `target` instead of the handle.
    #[must_use]
    pub fn with_target(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    /// Observes movement on `surface`.
    #[must_use]
    pub fn with_move_surface(mut self, surface: Surface<E>) -> Self {
        self.move_surface = surface;
        self
    }

    /// Observes release on `surface`.
    #[must_use]
    pub fn with_release_surface(mut self, surface: Surface<E>) -> Self {
        self.release_surface = surface;
        self
    }

    /// Observes "pointer left" on `surface`.
    #[must_use]
    pub fn with_leave_surface(mut self, surface: Surface<E>) -> Self {
        self.leave_surface = surface;
        self
    }

    /// Keeps the target inside `containment`.
    #[must_use]
    pub fn with_containment(mut self, containment: Containment<E>) -> Self {
        self.containment = containment;
        self
    }

    /// Writes the position with `mode`.
    #[must_use]
    pub fn with_mode(mut self, mode: PositioningMode) -> Self {
        self.mode = mode;
        self
    }

    /// Ends the drag when the pointer leaves the leave surface.
    #[must_use]
    pub fn with_leave_tracking(mut self, track_leave: bool) -> Self {
        self.track_leave = track_leave;
        self
    }

    /// Runs `f` after a drag starts.
    #[must_use]
    pub fn on_press(mut self, f: impl FnMut(&PointerEvent, &DragInfo) + 'static) -> Self {
        self.callbacks.on_press = Some(Box::new(f));
        self
    }

    /// Runs `f` after each applied move.
    #[must_use]
    pub fn on_move(mut self, f: impl FnMut(&PointerEvent, &DragInfo) + 'static) -> Self {
        self.callbacks.on_move = Some(Box::new(f));
        self
    }

    /// Runs `f` after a drag ends.
    #[must_use]
    pub fn on_release(mut self, f: impl FnMut(&PointerEvent, &DragInfo) + 'static) -> Self {
        self.callbacks.on_release = Some(Box::new(f));
        self
    }

    /// Runs `f` after a drag ends because the pointer left the leave surface.
    #[must_use]
    pub fn on_leave(mut self, f: impl FnMut(&PointerEvent, &DragInfo) + 'static) -> Self {
        self.callbacks.on_leave = Some(Box::new(f));
        self
    }

    /// Checks the release and leave wiring for combinations that are
    /// redundant or can leave a drag stuck.
    pub fn advisory(&self) -> Option<ConfigAdvisory> {
        match (self.release_surface.is_top_level(), self.track_leave) {
            (true, true) => Some(ConfigAdvisory::RedundantLeaveTracking),
            (false, false) => Some(ConfigAdvisory::UntrackedRelease),
            _ => None,
        }
    }
}

/// A non-fatal problem with a [`DragConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigAdvisory {
    /// Release is observed on the window or document, which already sees
    /// every release, so leave tracking adds nothing.
    RedundantLeaveTracking,
    /// Release is observed on an element and leave tracking is off; a release
    /// outside that element is never seen and the drag does not end.
    UntrackedRelease,
}

impl fmt::Display for ConfigAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedundantLeaveTracking => f.write_str(
                "leave tracking is enabled but release is observed on the window or document; \
                 releases there are always seen",
            ),
            Self::UntrackedRelease => f.write_str(
                "release is observed on an element without leave tracking; \
                 a release outside it will leave the drag active",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DragConfig::new(1_u32);
        assert_eq!(config.target, None);
        assert_eq!(config.move_surface, Surface::Document);
        assert_eq!(config.release_surface, Surface::Document);
        assert_eq!(config.leave_surface, Surface::Document);
        assert_eq!(config.containment, Containment::Parent);
        assert_eq!(config.mode, PositioningMode::Offset);
        assert!(!config.track_leave);
        assert!(config.callbacks.on_press.is_none());
    }

    #[test]
    fn default_wiring_is_sound() {
        assert_eq!(DragConfig::new(1_u32).advisory(), None);
    }

    #[test]
    fn leave_tracking_on_top_level_is_redundant() {
        for surface in [Surface::Window, Surface::Document, Surface::DocumentElement] {
            let config = DragConfig::new(1_u32)
                .with_release_surface(surface)
                .with_leave_tracking(true);
            assert_eq!(
                config.advisory(),
                Some(ConfigAdvisory::RedundantLeaveTracking)
            );
        }
    }

    #[test]
    fn element_release_needs_leave_tracking() {
        let config = DragConfig::new(1_u32).with_release_surface(Surface::Element(9));
        assert_eq!(config.advisory(), Some(ConfigAdvisory::UntrackedRelease));

        let config = config.with_leave_tracking(true);
        assert_eq!(config.advisory(), None);
    }

    #[test]
    fn callbacks_debug_shows_presence() {
        let config = DragConfig::new(1_u32).on_move(|_, _| {});
        let debug = alloc::format!("{:?}", config.callbacks);
        assert!(debug.contains("on_move: true"), "unexpected: {debug}");
        assert!(debug.contains("on_press: false"), "unexpected: {debug}");
    }
}
