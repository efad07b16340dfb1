// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment bounds and the per-axis clamp.
//!
//! Containment is checked one step at a time against the target's current
//! box, so only the edge a step moves toward can be clamped.
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_draggable::bounds::clamp_offset;
//!
//! let target = Rect::new(100.0, 100.0, 150.0, 150.0);
//! let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
//!
//! // The right edge lands exactly on the boundary.
//! assert_eq!(clamp_offset(target, bounds, Vec2::new(80.0, 0.0)), Vec2::new(50.0, 0.0));
//! ```

use core::fmt;

use kurbo::{Rect, Vec2};

use crate::host::DragHost;

/// A rectangle with no edges.
pub const UNBOUNDED: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// Where the target is allowed to go, as configured.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Containment<E> {
    /// The target's parent container, read live on every move.
    #[default]
    Parent,
    /// Another element, read live on every move.
    Element(E),
    /// A fixed rectangle captured once.
    Rect(Rect),
}

impl<E> Containment<E> {
    /// A fixed rectangle from its edges.
    pub fn from_edges(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self::Rect(Rect::new(left, top, right, bottom))
    }

    /// Resolves the parent default against `target`.
    ///
    /// A target without a parent is unbounded.
    pub fn resolve<H>(self, host: &H, target: &E) -> Bounds<E>
    where
        E: fmt::Debug,
        H: DragHost<Element = E>,
    {
        match self {
            Self::Parent => match host.parent(target) {
                Some(parent) => Bounds::Live(parent),
                None => {
                    log::debug!("drag target {target:?} has no parent; containment is unbounded");
                    Bounds::Static(UNBOUNDED)
                }
            },
            Self::Element(element) => Bounds::Live(element),
            Self::Rect(rect) => Bounds::Static(rect),
        }
    }
}

/// Containment after construction-time defaults are applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Bounds<E> {
    /// Bounds of this element, queried each time they are needed.
    Live(E),
    /// A snapshot.
    Static(Rect),
}

impl<E> Bounds<E> {
    /// The current containment rectangle.
    pub fn rect<H>(&self, host: &H) -> Rect
    where
        H: DragHost<Element = E>,
    {
        match self {
            Self::Live(element) => host.bounding_rect(element),
            Self::Static(rect) => *rect,
        }
    }
}

/// Clamps `offset` so that moving `target` by it keeps each edge inside `bounds`.
///
/// Each axis is handled on its own. The near edge is checked first: a step
/// that would put `target`'s left (top) edge before `bounds`' left (top) edge
/// is shortened to land on it; otherwise a step that would put the right
/// (bottom) edge past `bounds`' is shortened the same way.
pub fn clamp_offset(target: Rect, bounds: Rect, offset: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(target.x0, target.x1, bounds.x0, bounds.x1, offset.x),
        clamp_axis(target.y0, target.y1, bounds.y0, bounds.y1, offset.y),
    )
}

fn clamp_axis(start: f64, end: f64, min: f64, max: f64, delta: f64) -> f64 {
    if start + delta < min {
        min - start
    } else if end + delta > max {
        max - end
    } else {
        delta
    }
}
