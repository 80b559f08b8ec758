// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use crate::Point;

/// A circle.
///
/// This is the rendered geometry of a [`CircleModel`](crate::CircleModel),
/// and also the shape a [`DrawingSurface`](crate::DrawingSurface) places for
/// the outline and for each control-point handle.
///
/// # Examples
///
/// ```
/// use circle_limit::{Circle, Point};
/// let handle = Circle::new((300.0, 200.0), 5.0);
/// assert!(handle.contains(Point::new(303.0, 204.0)));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Does the closed disc bounded by this circle contain `pt`?
    ///
    /// Points on the boundary count as inside, which is what pointer hit
    /// testing on small handles wants.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        (pt - self.center).hypot2() <= self.radius * self.radius
    }
}
