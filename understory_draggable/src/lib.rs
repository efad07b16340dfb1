// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_draggable --heading-base-level=0

//! Understory Draggable: pointer dragging of an element inside a bounding box.
//!
//! A press on a **handle** element starts a drag; movement moves a **target**
//! element (the handle itself unless configured otherwise); release ends it.
//! Each step is clamped so the target's box stays inside the **containment**
//! rectangle, and the result is written either as a translation transform or
//! as `left`/`top` pixels.
//!
//! The crate owns no event loop and no document. It talks to the UI through
//! the [`DragHost`] trait: the host attaches and detaches listeners when asked,
//! answers bounding-box and computed-style queries, applies style writes, and
//! schedules animation frames. Events flow back through
//! [`DragRegistry::dispatch`] and [`DragRegistry::run_frame`].
//!
//! ## Pieces
//!
//! - [`registry`]: [`DragRegistry`] creates, destroys, and routes to controllers.
//! - [`controller`]: [`DraggableController`], the press/move/release state machine.
//! - [`config`]: [`DragConfig`] with defaults, user hooks, and the wiring check.
//! - [`bounds`]: [`Containment`] and [`clamp_offset`](bounds::clamp_offset).
//! - [`position`]: [`PositioningMode`] and the transform and pixel codecs.
//! - [`frame`]: [`FrameGate`](frame::FrameGate), one pending recomputation per frame.
//! - [`drag`]: [`DragState`](drag::DragState), the per-session pointer baseline.
//! - [`host`]: the [`DragHost`] trait and event types.
//!
//! ## Lifecycle
//!
//! ```text
//! idle --primary press--> dragging --release / leave--> idle
//!                           |    ^
//!                      move |    | frame: clamp, apply, on_move
//!                           v    |
//!                        frame pending
//! ```
//!
//! While idle, only the press listener is attached. Controllers stay
//! registered, and keep that listener, until [`DragRegistry::destroy`] or
//! [`DragRegistry::destroy_all`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_draggable::{
//!     ControllerId, DragConfig, DragHost, DragRegistry, Listener, PointerEvent,
//!     StyleProperty, Surface,
//! };
//!
//! #[derive(Default)]
//! struct Page {
//!     listeners: Vec<(Surface<u32>, Listener)>,
//!     transform: Option<String>,
//!     frames: Vec<ControllerId>,
//! }
//!
//! impl DragHost for Page {
//!     type Element = u32;
//!     fn add_listener(&mut self, surface: &Surface<u32>, listener: Listener) {
//!         self.listeners.push((surface.clone(), listener));
//!     }
//!     fn remove_listener(&mut self, surface: &Surface<u32>, listener: Listener) {
//!         self.listeners.retain(|l| l != &(surface.clone(), listener));
//!     }
//!     fn bounding_rect(&self, element: &u32) -> Rect {
//!         match element {
//!             0 => Rect::new(0.0, 0.0, 500.0, 500.0),
//!             _ => Rect::new(10.0, 10.0, 60.0, 60.0),
//!         }
//!     }
//!     fn parent(&self, element: &u32) -> Option<u32> {
//!         (*element != 0).then_some(0)
//!     }
//!     fn computed_style(&self, _: &u32, property: StyleProperty) -> Option<String> {
//!         match property {
//!             StyleProperty::Transform => self.transform.clone(),
//!             _ => None,
//!         }
//!     }
//!     fn set_style(&mut self, _: &u32, property: StyleProperty, value: &str) {
//!         if property == StyleProperty::Transform {
//!             self.transform = Some(value.to_owned());
//!         }
//!     }
//!     fn set_attribute(&mut self, _: &u32, _: &str, _: &str) {}
//!     fn request_frame(&mut self, controller: ControllerId) {
//!         self.frames.push(controller);
//!     }
//! }
//!
//! let mut page = Page::default();
//! let mut registry = DragRegistry::new();
//! let id = registry.create(&mut page, DragConfig::new(1));
//!
//! // Press on the handle, move, let the frame run, release.
//! let press = page.listeners[0].1;
//! registry.dispatch(&mut page, press, &PointerEvent::new(20.0, 20.0)).unwrap();
//! let movement = page.listeners[1].1;
//! registry.dispatch(&mut page, movement, &PointerEvent::new(32.0, 25.0)).unwrap();
//! for frame in core::mem::take(&mut page.frames) {
//!     registry.run_frame(&mut page, frame).unwrap();
//! }
//! assert_eq!(page.transform.as_deref(), Some("translate(12px,5px)"));
//!
//! let release = page.listeners[2].1;
//! registry.dispatch(&mut page, release, &PointerEvent::new(32.0, 25.0)).unwrap();
//! assert_eq!(page.listeners.len(), 1);
//!
//! registry.destroy(&mut page, id).unwrap();
//! assert!(page.listeners.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: forwarded to `kurbo` for `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`). Diagnostics go through
//! the [`log`] facade: configuration problems at `warn`, drag lifecycle at
//! `debug`, per-frame offsets at `trace`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod config;
pub mod controller;
pub mod drag;
pub mod frame;
pub mod host;
pub mod position;
pub mod registry;

pub use bounds::{Bounds, Containment};
pub use config::{ConfigAdvisory, DragCallback, DragCallbacks, DragConfig};
pub use controller::{DragInfo, DraggableController};
pub use host::{
    DragHost, Listener, ListenerKind, PointerButton, PointerEvent, StyleProperty, Surface,
};
pub use position::PositioningMode;
pub use registry::{ControllerId, DragRegistry, UnknownController};
