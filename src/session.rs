// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{CircleModel, ControlPoint, Point, Vec2};

/// Per-gesture state captured when a control point is grabbed.
///
/// Drag deltas are cumulative from the start of the gesture, so every update
/// is computed from these anchors rather than from the previous update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    target: ControlPoint,
    origin: CircleModel,
}

impl DragSession {
    /// Anchor a gesture on `target` at the model's current state.
    pub fn capture(target: ControlPoint, model: &CircleModel) -> DragSession {
        DragSession {
            target,
            origin: *model,
        }
    }

    /// The control point this gesture is dragging.
    #[inline]
    pub fn target(&self) -> ControlPoint {
        self.target
    }

    /// The center when the gesture started.
    #[inline]
    pub fn origin_center(&self) -> Point {
        self.origin.center()
    }

    /// The edge point when the gesture started.
    #[inline]
    pub fn origin_edge(&self) -> Point {
        self.origin.edge()
    }

    /// The radius when the gesture started.
    #[inline]
    pub fn origin_radius(&self) -> f64 {
        self.origin.radius()
    }

    /// The model that results from applying `delta` to `current`.
    ///
    /// A center drag translates the anchored circle rigidly, so the radius is
    /// exactly the anchor radius. An edge drag moves only the edge and measures the radius from
    /// the center of `current`, which may already reflect a concurrent center
    /// drag.
    pub(crate) fn resolve(&self, current: &CircleModel, delta: Vec2) -> CircleModel {
        match self.target {
            ControlPoint::Center => self.origin.translated(delta),
            ControlPoint::Edge => current.with_edge(self.origin.edge() + delta),
        }
    }
}
