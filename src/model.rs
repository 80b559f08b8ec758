// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The logical state of a draggable circle.

use crate::common::approx_eq_at;
use crate::{Circle, ControlPoint, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle described by its center, a point on its edge, and the radius
/// derived from them.
///
/// The radius always equals the distance between the center and the edge
/// point once an update has completed. The edge is stored relative to the
/// center, so moving the center never disturbs the radius. The fields are
/// private so that only the constructors and
/// [`CircleController`](crate::CircleController) can change them.
///
/// # Examples
///
/// ```
/// use circle_limit::{CircleModel, Point};
///
/// let model = CircleModel::new((200.0, 200.0), 100.0);
/// assert_eq!(model.edge(), Point::new(300.0, 200.0));
/// assert_eq!(model.radius(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CircleModel {
    center: Point,
    offset: Vec2,
    radius: f64,
}

impl CircleModel {
    /// The center used by [`CircleModel::default`].
    pub const DEFAULT_CENTER: Point = Point::new(200.0, 200.0);

    /// The radius used by [`CircleModel::default`].
    pub const DEFAULT_RADIUS: f64 = 100.0;

    /// The center used by [`CircleModel::top_left`].
    pub const TOP_LEFT_CENTER: Point = Point::new(120.0, 120.0);

    /// A circle around `center` with its edge point `radius` units to the
    /// right of the center.
    ///
    /// A negative radius is treated as its absolute value.
    pub fn new(center: impl Into<Point>, radius: f64) -> CircleModel {
        let center = center.into();
        let radius = radius.abs();
        CircleModel {
            center,
            offset: Vec2::new(radius, 0.0),
            radius,
        }
    }

    /// A default-sized circle tucked into the top-left corner of the canvas,
    /// 20 units in from each side. Pairs with [`WidgetStyle::bold`].
    ///
    /// [`WidgetStyle::bold`]: crate::WidgetStyle::bold
    pub fn top_left() -> CircleModel {
        CircleModel::new(Self::TOP_LEFT_CENTER, Self::DEFAULT_RADIUS)
    }

    /// A circle around `center` passing through `edge`.
    ///
    /// Coincident points are allowed and give a radius of zero.
    pub fn from_points(center: impl Into<Point>, edge: impl Into<Point>) -> CircleModel {
        let center = center.into();
        let offset = edge.into() - center;
        CircleModel {
            center,
            offset,
            radius: offset.hypot(),
        }
    }

    /// The center control point.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The edge control point.
    #[inline]
    pub fn edge(&self) -> Point {
        self.center + self.offset
    }

    /// The radius, equal to the distance from center to edge.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The position of the given control point.
    #[inline]
    pub fn position(&self, target: ControlPoint) -> Point {
        match target {
            ControlPoint::Center => self.center,
            ControlPoint::Edge => self.edge(),
        }
    }

    /// The circle to draw for this model.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Does the stored radius match the center to edge distance within
    /// `epsilon`?
    ///
    /// The tolerance is relative to the largest coordinate of either control
    /// point, since placing the edge point rounds at that scale whatever the
    /// radius is.
    pub fn is_consistent(&self, epsilon: f64) -> bool {
        let edge = self.edge();
        let magnitude = self
            .center
            .x
            .abs()
            .max(self.center.y.abs())
            .max(edge.x.abs())
            .max(edge.y.abs());
        approx_eq_at(self.radius, self.center.distance(edge), epsilon, magnitude)
    }

    /// Is every coordinate, and the radius, finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.edge().is_finite() && self.radius.is_finite()
    }

    /// Rigidly translate both control points.
    pub(crate) fn translated(self, delta: Vec2) -> Self {
        CircleModel {
            center: self.center + delta,
            ..self
        }
    }

    /// Replace the edge point, recomputing the radius from the current center.
    pub(crate) fn with_edge(self, edge: Point) -> Self {
        CircleModel::from_points(self.center, edge)
    }
}

impl Default for CircleModel {
    fn default() -> Self {
        CircleModel::new(Self::DEFAULT_CENTER, Self::DEFAULT_RADIUS)
    }
}

impl From<CircleModel> for Circle {
    fn from(model: CircleModel) -> Circle {
        model.circle()
    }
}
