// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned collection of live controllers.
//!
//! A [`DragRegistry`] hands out ids, wires the press listener on creation,
//! unwires everything on destruction, and routes host events to the
//! controller a [`Listener`] belongs to. Applications usually keep one per
//! document; tests can build as many isolated ones as they like.
//!
//! Ids increase monotonically and are never reused within a registry.

use alloc::vec::Vec;
use core::fmt;

use crate::config::DragConfig;
use crate::controller::DraggableController;
use crate::host::{DragHost, Listener, ListenerKind, PointerEvent};

/// Identifies a controller within its registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    /// Wraps a raw id value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned when an id does not name a live controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownController(pub ControllerId);

impl fmt::Display for UnknownController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no draggable controller {} is registered", self.0)
    }
}

impl core::error::Error for UnknownController {}

/// Live controllers, in creation order.
#[derive(Debug)]
pub struct DragRegistry<E> {
    controllers: Vec<DraggableController<E>>,
    next_id: u64,
}

impl<E> Default for DragRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DragRegistry<E> {
    /// An empty registry.
    pub const fn new() -> Self {
        Self {
            controllers: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of live controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if no controllers are live.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Ids of live controllers, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ControllerId> + '_ {
        self.controllers.iter().map(DraggableController::id)
    }

    /// Returns `true` if `id` names a live controller.
    pub fn contains(&self, id: ControllerId) -> bool {
        self.position_of(id).is_some()
    }

    /// The controller with `id`.
    pub fn get(&self, id: ControllerId) -> Option<&DraggableController<E>> {
        self.controllers.iter().find(|c| c.id() == id)
    }

    /// The controller with `id`, mutably.
    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut DraggableController<E>> {
        self.controllers.iter_mut().find(|c| c.id() == id)
    }

    fn position_of(&self, id: ControllerId) -> Option<usize> {
        self.controllers.iter().position(|c| c.id() == id)
    }
}

impl<E> DragRegistry<E>
where
    E: Clone + PartialEq + fmt::Debug,
{
    /// Creates a controller from `config`, attaches its press listener, and
    /// registers it.
    ///
    /// Risky or redundant release wiring is logged as a warning; it never
    /// prevents creation.
    pub fn create<H>(&mut self, host: &mut H, config: DragConfig<E>) -> ControllerId
    where
        H: DragHost<Element = E>,
    {
        let id = ControllerId(self.next_id);
        self.next_id += 1;

        if let Some(advisory) = config.advisory() {
            log::warn!("draggable {id}: {advisory}");
        }
        let controller = DraggableController::new(host, id, config);
        controller.attach(host);
        log::debug!(
            "draggable {id} created: handle {:?}, target {:?}, {:?} mode",
            controller.handle(),
            controller.target(),
            controller.mode()
        );
        self.controllers.push(controller);
        id
    }

    /// Detaches and removes the controller with `id`, returning it.
    pub fn destroy<H>(
        &mut self,
        host: &mut H,
        id: ControllerId,
    ) -> Result<DraggableController<E>, UnknownController>
    where
        H: DragHost<Element = E>,
    {
        let index = self.position_of(id).ok_or(UnknownController(id))?;
        let mut controller = self.controllers.remove(index);
        controller.detach(host);
        log::debug!("draggable {id} destroyed");
        Ok(controller)
    }

    /// Detaches and removes every controller, oldest first.
    pub fn destroy_all<H>(&mut self, host: &mut H)
    where
        H: DragHost<Element = E>,
    {
        let count = self.controllers.len();
        for mut controller in self.controllers.drain(..) {
            controller.detach(host);
        }
        log::debug!("destroyed {count} draggable controllers");
    }

    /// Routes an event the host observed for `listener`.
    ///
    /// Returns `Ok(true)` when the controller acted on it: a drag started or
    /// ended, or a move scheduled a frame.
    pub fn dispatch<H>(
        &mut self,
        host: &mut H,
        listener: Listener,
        event: &PointerEvent,
    ) -> Result<bool, UnknownController>
    where
        H: DragHost<Element = E>,
    {
        let controller = self
            .get_mut(listener.controller)
            .ok_or(UnknownController(listener.controller))?;
        Ok(match listener.kind {
            ListenerKind::Press => controller.handle_press(host, event),
            ListenerKind::Move => controller.handle_move(host, event),
            ListenerKind::Release => controller.handle_release(host, event),
            ListenerKind::Leave => controller.handle_leave(host, event),
        })
    }

    /// Runs the animation frame requested for `id`.
    ///
    /// Returns the clamped offset that was applied, if any.
    pub fn run_frame<H>(
        &mut self,
        host: &mut H,
        id: ControllerId,
    ) -> Result<Option<kurbo::Vec2>, UnknownController>
    where
        H: DragHost<Element = E>,
    {
        let controller = self.get_mut(id).ok_or(UnknownController(id))?;
        Ok(controller.run_frame(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_and_raw() {
        let id = ControllerId::from_raw(42);
        assert_eq!(id.to_raw(), 42);
        assert_eq!(alloc::format!("{id}"), "#42");
    }

    #[test]
    fn unknown_controller_message() {
        let err = UnknownController(ControllerId::from_raw(7));
        assert_eq!(
            alloc::format!("{err}"),
            "no draggable controller #7 is registered"
        );
    }

    #[test]
    fn empty_registry() {
        let registry = DragRegistry::<u32>::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.ids().count(), 0);
        assert!(!registry.contains(ControllerId::from_raw(0)));
    }
}
