// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a clamped offset to the target's style.
//!
//! Two strategies are available, picked once per controller:
//!
//! - [`PositioningMode::Offset`] keeps the element in flow and moves it with a
//!   `translate(..)` transform. The logical position is the cumulative
//!   translation.
//! - [`PositioningMode::Absolute`] moves a positioned element by rewriting
//!   `left` and `top`. The logical position is those pixel values.
//!
//! Both write the whole property. Offset mode keeps only the translation of
//! whatever transform was there before, so scale, skew and rotation are lost.
//!
//! The codecs ([`parse_translation`], [`parse_pixels`], [`format_translation`],
//! [`format_pixels`]) are usable without a host.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_draggable::position::{format_translation, parse_translation};
//!
//! let current = parse_translation(Some("translate(10px,20px)"));
//! let next = current + Vec2::new(5.0, -3.0);
//! assert_eq!(format_translation(next), "translate(15px,17px)");
//! ```

use alloc::format;
use alloc::string::{String, ToString};

use kurbo::{Point, Vec2};

use crate::host::{DragHost, StyleProperty};

/// Attribute recording the target's last applied horizontal position.
pub const DATA_X: &str = "data-x";
/// Attribute recording the target's last applied vertical position.
pub const DATA_Y: &str = "data-y";

/// How the target's position is expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PositioningMode {
    /// Move with a translation transform.
    #[default]
    Offset,
    /// Move with `left`/`top`.
    Absolute,
}

impl PositioningMode {
    /// Reads the target's current logical position from its computed style.
    pub fn current_position<H: DragHost>(self, host: &H, target: &H::Element) -> Point {
        match self {
            Self::Offset => {
                let transform = host.computed_style(target, StyleProperty::Transform);
                parse_translation(transform.as_deref()).to_point()
            }
            Self::Absolute => {
                let left = host.computed_style(target, StyleProperty::Left);
                let top = host.computed_style(target, StyleProperty::Top);
                Point::new(parse_pixels(left.as_deref()), parse_pixels(top.as_deref()))
            }
        }
    }

    /// Moves `target` by `offset`, records the result as data attributes, and
    /// returns the new logical position.
    pub fn apply<H: DragHost>(self, host: &mut H, target: &H::Element, offset: Vec2) -> Point {
        let next = self.current_position(&*host, target) + offset;
        match self {
            Self::Offset => {
                host.set_style(
                    target,
                    StyleProperty::Transform,
                    &format_translation(next.to_vec2()),
                );
            }
            Self::Absolute => {
                host.set_style(target, StyleProperty::Left, &format_pixels(next.x));
                host.set_style(target, StyleProperty::Top, &format_pixels(next.y));
            }
        }
        host.set_attribute(target, DATA_X, &next.x.to_string());
        host.set_attribute(target, DATA_Y, &next.y.to_string());
        next
    }
}

/// Extracts the translation from a CSS transform value.
///
/// The last two numbers are taken as `(x, y)`, which covers both
/// `translate(10px, 20px)` and the computed `matrix(a, b, c, d, 10, 20)` form.
/// `none`, a missing value, or anything with fewer than two numbers is zero.
pub fn parse_translation(transform: Option<&str>) -> Vec2 {
    let Some(transform) = transform else {
        return Vec2::ZERO;
    };
    let mut last = None;
    let mut prev = None;
    for n in numbers(transform) {
        prev = last;
        last = Some(n);
    }
    match (prev, last) {
        (Some(x), Some(y)) => Vec2::new(x, y),
        _ => Vec2::ZERO,
    }
}

/// Parses a pixel length such as `"12.5px"`; anything else (`auto`, empty) is zero.
pub fn parse_pixels(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .map(|v| v.strip_suffix("px").unwrap_or(v))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Formats a translation-only transform.
pub fn format_translation(translation: Vec2) -> String {
    format!("translate({}px,{}px)", translation.x, translation.y)
}

/// Formats a pixel length.
pub fn format_pixels(value: f64) -> String {
    format!("{value}px")
}

fn numbers(s: &str) -> impl Iterator<Item = f64> + '_ {
    s.split(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
