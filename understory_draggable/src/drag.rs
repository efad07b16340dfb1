// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-session pointer baseline: raw movement between processed events.
//!
//! A session runs from a qualifying press to its release. Inside it, each
//! processed move is measured from the previous processed event (the press
//! itself for the first one), and the baseline always advances to the raw
//! pointer position, never to a clamped result. Holding the pointer past a
//! containment edge therefore keeps producing fresh per-step deltas instead of
//! accumulating a debt that would have to be paid back before the target moves.
//!
//! A press during a session re-baselines it without starting a new one, so
//! callers can tell whether session-scoped resources (listeners) still need
//! to be set up.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_draggable::drag::DragState;
//!
//! let mut drag = DragState::default();
//! assert!(drag.press(Point::new(10.0, 20.0)));
//! assert_eq!(drag.step(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! // Pressing again keeps the session but moves the baseline.
//! assert!(!drag.press(Point::new(40.0, 40.0)));
//! assert_eq!(drag.step(Point::new(41.0, 40.0)), Some(Vec2::new(1.0, 0.0)));
//! assert_eq!(drag.total_offset(Point::new(41.0, 40.0)), Some(Vec2::new(1.0, 0.0)));
//!
//! assert!(drag.release());
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Session {
    origin: Point,
    baseline: Point,
}

/// Tracks the active drag session, if any.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    session: Option<Session>,
}

impl DragState {
    /// Records a press at `pos`.
    ///
    /// Returns `true` when this starts a session, `false` when it only
    /// re-baselines one already in progress.
    pub fn press(&mut self, pos: Point) -> bool {
        let fresh = self.session.is_none();
        self.session = Some(Session {
            origin: pos,
            baseline: pos,
        });
        fresh
    }

    /// Measures `pos` against the baseline and advances the baseline to it.
    ///
    /// Returns `None` outside a session.
    pub fn step(&mut self, pos: Point) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        let delta = pos - session.baseline;
        session.baseline = pos;
        Some(delta)
    }

    /// Raw distance from the session's press to `pos`.
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.session.map(|s| pos - s.origin)
    }

    /// Where the session's latest press happened.
    pub fn origin(&self) -> Option<Point> {
        self.session.map(|s| s.origin)
    }

    /// Ends the session. Returns `false` if none was active.
    pub fn release(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// Returns `true` between a press and its release.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_pressed() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.origin(), None);
        assert_eq!(drag.step(Point::new(15.0, 25.0)), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
        assert!(!drag.release());
    }

    #[test]
    fn steps_measure_from_the_previous_event() {
        let mut drag = DragState::default();
        drag.press(Point::new(0.0, 0.0));

        assert_eq!(drag.step(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.step(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.step(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(drag.total_offset(Point::new(6.0, 7.0)), Some(Vec2::new(6.0, 7.0)));
    }

    #[test]
    fn repeating_a_position_gives_zero() {
        let mut drag = DragState::default();
        let at = Point::new(50.0, 50.0);
        drag.press(at);

        assert_eq!(drag.step(at), Some(Vec2::ZERO));
        assert_eq!(drag.step(at), Some(Vec2::ZERO));
    }

    #[test]
    fn second_press_rebaselines_the_same_session() {
        let mut drag = DragState::default();
        assert!(drag.press(Point::new(0.0, 0.0)));
        drag.step(Point::new(10.0, 10.0));

        assert!(!drag.press(Point::new(50.0, 60.0)));
        assert_eq!(drag.origin(), Some(Point::new(50.0, 60.0)));
        assert_eq!(drag.step(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn release_then_press_starts_fresh() {
        let mut drag = DragState::default();
        drag.press(Point::new(10.0, 20.0));
        assert!(drag.release());

        assert!(drag.press(Point::new(1.0, 1.0)));
        assert_eq!(drag.total_offset(Point::new(3.0, 1.0)), Some(Vec2::new(2.0, 0.0)));
    }
}
