// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! At most one pending recomputation per animation frame.
//!
//! [`FrameGate`] does not know about any scheduler. [`offer`](FrameGate::offer)
//! reports whether the caller has to request a frame; while one is pending,
//! further offers only replace the queued item, so a burst of moves inside
//! one frame interval collapses to its most recent event.
//!
//! ```
//! use understory_draggable::frame::FrameGate;
//!
//! let mut gate = FrameGate::new();
//! gate.arm();
//!
//! assert!(gate.offer(1));  // schedule a frame
//! assert!(!gate.offer(2)); // already pending, coalesced
//! assert!(!gate.offer(3));
//!
//! assert_eq!(gate.take(), Some(3));
//! gate.arm();              // recomputation finished
//! assert!(gate.offer(4));
//! ```

/// Single-pending-task throttle.
///
/// The gate starts closed; [`arm`](Self::arm) opens it.
#[derive(Clone, Debug)]
pub struct FrameGate<T> {
    ready: bool,
    pending: Option<T>,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameGate<T> {
    /// A closed gate with nothing queued.
    pub const fn new() -> Self {
        Self {
            ready: false,
            pending: None,
        }
    }

    /// Opens the gate for the next offer.
    pub fn arm(&mut self) {
        self.ready = true;
    }

    /// Returns `true` if an offer would schedule a new frame.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns `true` while an item waits for its frame.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Queues `item`.
    ///
    /// Returns `true` when this call closed the gate and the caller must
    /// schedule a frame. Returns `false` when the item only replaced one that
    /// is already waiting, or when the gate is closed with nothing pending, in
    /// which case the item is dropped.
    pub fn offer(&mut self, item: T) -> bool {
        if self.ready {
            self.ready = false;
            self.pending = Some(item);
            true
        } else {
            if let Some(pending) = self.pending.as_mut() {
                *pending = item;
            }
            false
        }
    }

    /// Takes the queued item for the frame that is running now.
    ///
    /// The gate stays closed; call [`arm`](Self::arm) once the work is done.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops anything queued and closes the gate.
    pub fn close(&mut self) {
        self.ready = false;
        self.pending = None;
    }
}
