// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One draggable relationship: a handle that moves a target.
//!
//! A controller is idle until a primary-button press on its handle. The
//! press attaches the movement and release listeners (and the leave listener
//! when leave tracking is on); release or leave detaches them again. Only the
//! press listener lives as long as the controller.
//!
//! Movement is throttled to one recomputation per animation frame with a
//! [`FrameGate`]. The recomputation takes the raw delta from the previous
//! processed event, clamps it against the containment bounds, and writes the
//! result through the controller's [`PositioningMode`].
//!
//! Controllers are created and destroyed through a
//! [`DragRegistry`](crate::DragRegistry), which also routes host events to them.

use kurbo::{Point, Vec2};

use crate::bounds::{Bounds, clamp_offset};
use crate::config::{DragCallbacks, DragConfig};
use crate::drag::DragState;
use crate::frame::FrameGate;
use crate::host::{DragHost, Listener, ListenerKind, PointerButton, PointerEvent, Surface};
use crate::position::PositioningMode;
use crate::registry::ControllerId;

/// Controller state handed to user hooks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragInfo {
    /// The controller that ran the hook.
    pub id: ControllerId,
    /// The target's logical position after the event.
    pub position: Point,
    /// The clamped offset applied by the last move of this drag.
    pub offset: Vec2,
    /// Raw pointer distance from the press to this event.
    pub total: Vec2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EndReason {
    Release,
    Leave,
}

/// Listener values created once at construction and reused for every
/// attach and detach.
#[derive(Copy, Clone, Debug)]
struct Listeners {
    press: Listener,
    movement: Listener,
    release: Listener,
    leave: Listener,
}

impl Listeners {
    fn new(controller: ControllerId) -> Self {
        let make = |kind| Listener { controller, kind };
        Self {
            press: make(ListenerKind::Press),
            movement: make(ListenerKind::Move),
            release: make(ListenerKind::Release),
            leave: make(ListenerKind::Leave),
        }
    }
}

/// Drives one handle/target pair.
#[derive(Debug)]
pub struct DraggableController<E> {
    id: ControllerId,
    handle: E,
    target: E,
    move_surface: Surface<E>,
    release_surface: Surface<E>,
    leave_surface: Surface<E>,
    bounds: Bounds<E>,
    mode: PositioningMode,
    track_leave: bool,
    callbacks: DragCallbacks,
    listeners: Listeners,
    drag: DragState,
    gate: FrameGate<PointerEvent>,
    position: Point,
    last_offset: Vec2,
}

impl<E> DraggableController<E> {
    /// The registry id.
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// The element whose press starts a drag.
    pub fn handle(&self) -> &E {
        &self.handle
    }

    /// The element that moves.
    pub fn target(&self) -> &E {
        &self.target
    }

    /// How the target's position is written.
    pub fn mode(&self) -> PositioningMode {
        self.mode
    }

    /// Returns `true` between a qualifying press and its release or leave.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a move waits for its animation frame.
    pub fn has_pending_frame(&self) -> bool {
        self.gate.is_pending()
    }

    /// The target's last known logical position: translation in offset mode,
    /// `left`/`top` in absolute mode.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The resolved containment.
    pub fn bounds(&self) -> &Bounds<E> {
        &self.bounds
    }

    /// A snapshot for hooks and callers.
    pub fn info(&self, pointer: Point) -> DragInfo {
        DragInfo {
            id: self.id,
            position: self.position,
            offset: self.last_offset,
            total: self.drag.total_offset(pointer).unwrap_or(Vec2::ZERO),
        }
    }
}

impl<E> DraggableController<E>
where
    E: Clone + PartialEq + core::fmt::Debug,
{
    /// Resolves `config`'s defaults. Does not touch the host's listeners.
    pub(crate) fn new<H>(host: &H, id: ControllerId, config: DragConfig<E>) -> Self
    where
        H: DragHost<Element = E>,
    {
        let DragConfig {
            handle,
            target,
            move_surface,
            release_surface,
            leave_surface,
            containment,
            mode,
            track_leave,
            callbacks,
        } = config;
        let target = target.unwrap_or_else(|| handle.clone());
        let bounds = containment.resolve(host, &target);
        let position = mode.current_position(host, &target);
        Self {
            id,
            handle,
            target,
            move_surface,
            release_surface,
            leave_surface,
            bounds,
            mode,
            track_leave,
            callbacks,
            listeners: Listeners::new(id),
            drag: DragState::default(),
            gate: FrameGate::new(),
            position,
            last_offset: Vec2::ZERO,
        }
    }

    pub(crate) fn attach<H>(&self, host: &mut H)
    where
        H: DragHost<Element = E>,
    {
        host.add_listener(&Surface::Element(self.handle.clone()), self.listeners.press);
    }

    /// Removes every listener this controller has on the host.
    pub(crate) fn detach<H>(&mut self, host: &mut H)
    where
        H: DragHost<Element = E>,
    {
        if self.drag.is_dragging() {
            self.detach_session(host);
            self.drag.release();
            self.gate.close();
        }
        host.remove_listener(&Surface::Element(self.handle.clone()), self.listeners.press);
    }

    /// Handles a press on the handle.
    ///
    /// Returns `false` and does nothing for any button but the primary one.
    pub fn handle_press<H>(&mut self, host: &mut H, event: &PointerEvent) -> bool
    where
        H: DragHost<Element = E>,
    {
        if event.button != PointerButton::Primary {
            return false;
        }
        let fresh = self.drag.press(event.position);
        // A move queued before this press was measured against the old
        // baseline; its frame must not apply it against the new one.
        self.gate.close();
        self.gate.arm();
        if fresh {
            host.add_listener(&self.move_surface, self.listeners.movement);
            host.add_listener(&self.release_surface, self.listeners.release);
            if self.track_leave {
                host.add_listener(&self.leave_surface, self.listeners.leave);
            }
        }
        self.position = self.mode.current_position(&*host, &self.target);
        self.last_offset = Vec2::ZERO;
        log::debug!("drag {} started at {:?}", self.id, event.position);

        let info = self.info(event.position);
        self.callbacks.press(event, &info);
        true
    }

    /// Handles a move on the movement surface.
    ///
    /// Returns `true` when a frame was requested. While a frame is pending the
    /// event replaces the queued one and nothing else happens.
    pub fn handle_move<H>(&mut self, host: &mut H, event: &PointerEvent) -> bool
    where
        H: DragHost<Element = E>,
    {
        if !self.drag.is_dragging() {
            return false;
        }
        let schedule = self.gate.offer(*event);
        if schedule {
            host.request_frame(self.id);
        }
        schedule
    }

    /// Runs the recomputation scheduled by [`handle_move`](Self::handle_move).
    ///
    /// Returns the clamped offset that was applied, or `None` when nothing was
    /// pending (for example because the drag ended before the frame).
    pub fn run_frame<H>(&mut self, host: &mut H) -> Option<Vec2>
    where
        H: DragHost<Element = E>,
    {
        let event = self.gate.take()?;
        let Some(raw) = self.drag.step(event.position) else {
            self.gate.arm();
            return None;
        };

        let target_box = host.bounding_rect(&self.target);
        let bounds = self.bounds.rect(&*host);
        let offset = clamp_offset(target_box, bounds, raw);
        self.position = self.mode.apply(host, &self.target, offset);
        self.last_offset = offset;
        self.gate.arm();
        log::trace!(
            "drag {}: raw {:?} clamped to {:?}, now at {:?}",
            self.id,
            raw,
            offset,
            self.position
        );

        let info = self.info(event.position);
        self.callbacks.moved(&event, &info);
        Some(offset)
    }

    /// Handles a release on the release surface. Returns `false` when idle.
    pub fn handle_release<H>(&mut self, host: &mut H, event: &PointerEvent) -> bool
    where
        H: DragHost<Element = E>,
    {
        self.end(host, event, EndReason::Release)
    }

    /// Handles the pointer leaving the leave surface.
    ///
    /// Ends the drag exactly as a release does, then runs the leave hook
    /// before the release hook.
    pub fn handle_leave<H>(&mut self, host: &mut H, event: &PointerEvent) -> bool
    where
        H: DragHost<Element = E>,
    {
        self.end(host, event, EndReason::Leave)
    }

    fn end<H>(&mut self, host: &mut H, event: &PointerEvent, reason: EndReason) -> bool
    where
        H: DragHost<Element = E>,
    {
        if !self.drag.is_dragging() {
            return false;
        }
        self.detach_session(host);
        self.gate.close();
        let info = self.info(event.position);
        self.drag.release();
        log::debug!("drag {} ended by {:?} at {:?}", self.id, reason, self.position);

        if reason == EndReason::Leave {
            self.callbacks.leave(event, &info);
        }
        self.callbacks.release(event, &info);
        true
    }

    fn detach_session<H>(&mut self, host: &mut H)
    where
        H: DragHost<Element = E>,
    {
        host.remove_listener(&self.move_surface, self.listeners.movement);
        host.remove_listener(&self.release_surface, self.listeners.release);
        if self.track_leave {
            host.remove_listener(&self.leave_surface, self.listeners.leave);
        }
    }
}
