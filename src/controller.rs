// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag handling for a circle's two control points.

use core::fmt;

use arrayvec::ArrayVec;

use crate::{CircleModel, ControlPoint, DragSession, Vec2};

/// Keeps a [`CircleModel`] consistent while its control points are dragged.
///
/// Each control point has its own independent drag session, so the center and
/// the edge can be held at the same time (for example by two touch points).
/// Updates are applied in call order and the last write wins.
///
/// # Examples
///
/// ```
/// use circle_limit::{CircleController, CircleModel, ControlPoint, Point, Vec2};
///
/// let mut controller = CircleController::new(CircleModel::new((200.0, 200.0), 100.0));
/// controller.begin_drag(ControlPoint::Edge);
/// let model = controller.apply_drag(ControlPoint::Edge, Vec2::new(0.0, 100.0)).unwrap();
/// controller.end_drag(ControlPoint::Edge);
///
/// assert_eq!(model.edge(), Point::new(300.0, 300.0));
/// assert!((model.radius() - 141.42135623730951).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CircleController {
    model: CircleModel,
    sessions: ArrayVec<DragSession, 2>,
}

/// The reason a drag update was not applied.
///
/// The model is left untouched whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    /// The delta had a NaN or infinite component.
    NonFiniteDelta {
        /// The control point the update was aimed at.
        target: ControlPoint,
    },
    /// No drag session is active for the control point.
    NotDragging {
        /// The control point the update was aimed at.
        target: ControlPoint,
    },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::NonFiniteDelta { target } => {
                write!(f, "Non-finite drag delta for the {target} point")
            }
            DragError::NotDragging { target } => {
                write!(f, "The {target} point is not being dragged")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DragError {}

impl CircleController {
    /// A controller owning `model`, with no gesture in progress.
    pub fn new(model: CircleModel) -> CircleController {
        CircleController {
            model,
            sessions: ArrayVec::new(),
        }
    }

    /// The current model.
    #[inline]
    pub fn model(&self) -> &CircleModel {
        &self.model
    }

    /// The active session for `target`, if it is being dragged.
    pub fn session(&self, target: ControlPoint) -> Option<&DragSession> {
        self.sessions.iter().find(|s| s.target() == target)
    }

    /// Is `target` currently being dragged?
    #[inline]
    pub fn is_dragging(&self, target: ControlPoint) -> bool {
        self.session(target).is_some()
    }

    /// Start a gesture on `target`, anchoring it at the current model.
    ///
    /// If `target` is already being dragged its session is re-anchored.
    pub fn begin_drag(&mut self, target: ControlPoint) {
        let session = DragSession::capture(target, &self.model);
        match self.sessions.iter_mut().find(|s| s.target() == target) {
            Some(existing) => *existing = session,
            // At most one session per control point, so this never overflows.
            None => self.sessions.push(session),
        }
        log::trace!(
            "begin drag on {target} at center {} edge {}",
            self.model.center(),
            self.model.edge()
        );
    }

    /// Apply `delta`, the cumulative offset since [`begin_drag`], to `target`.
    ///
    /// Dragging the center translates the center and the edge together and
    /// leaves the radius alone. Dragging the edge moves only the edge and
    /// recomputes the radius from the current center. Coordinates are not
    /// clamped.
    ///
    /// Returns the updated model.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NonFiniteDelta`] if `delta` has a NaN or infinite
    /// component, and [`DragError::NotDragging`] if no session is active for
    /// `target`. The model is unchanged in both cases.
    ///
    /// [`begin_drag`]: CircleController::begin_drag
    pub fn apply_drag(
        &mut self,
        target: ControlPoint,
        delta: impl Into<Vec2>,
    ) -> Result<CircleModel, DragError> {
        let delta = delta.into();
        if !delta.is_finite() {
            log::debug!("rejecting non-finite drag delta {delta:?} on {target}");
            return Err(DragError::NonFiniteDelta { target });
        }
        let session = self
            .session(target)
            .copied()
            .ok_or(DragError::NotDragging { target })?;
        let next = session.resolve(&self.model, delta);
        if !next.is_finite() {
            // Finite deltas can still overflow far from the origin.
            log::debug!("rejecting drag delta {delta:?} on {target}: result overflows");
            return Err(DragError::NonFiniteDelta { target });
        }
        self.model = next;
        Ok(next)
    }

    /// End the gesture on `target`. Calling this when `target` is not being
    /// dragged does nothing.
    pub fn end_drag(&mut self, target: ControlPoint) {
        if let Some(ix) = self.sessions.iter().position(|s| s.target() == target) {
            self.sessions.swap_remove(ix);
            log::trace!("end drag on {target}");
        }
    }

    /// End every active gesture, for example when pointer capture is lost.
    pub fn end_all(&mut self) {
        if !self.sessions.is_empty() {
            log::trace!("ending {} active drag(s)", self.sessions.len());
        }
        self.sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RADIUS_EPSILON;
    use crate::Point;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    fn scenario_start() -> CircleController {
        CircleController::new(CircleModel::new((200.0, 200.0), 100.0))
    }

    #[test]
    fn edge_drag_scenario() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Edge);
        let model = c.apply_drag(ControlPoint::Edge, (0.0, 100.0)).unwrap();
        assert_eq!(model.center(), Point::new(200.0, 200.0));
        assert_eq!(model.edge(), Point::new(300.0, 300.0));
        assert_approx_eq(model.radius(), 141.42135623730951);
        assert_eq!(c.model(), &model);
    }

    #[test]
    fn center_drag_scenario() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Center);
        let model = c.apply_drag(ControlPoint::Center, (50.0, -20.0)).unwrap();
        assert_eq!(model.center(), Point::new(250.0, 180.0));
        assert_eq!(model.edge(), Point::new(350.0, 180.0));
        assert_eq!(model.radius(), 100.0);
    }

    #[test]
    fn center_drag_far_from_origin_stays_consistent() {
        let mut c = CircleController::new(CircleModel::from_points((0.1, 0.1), (0.2, 0.3)));
        let radius = c.model().radius();
        c.begin_drag(ControlPoint::Center);
        for delta in [(1e8, 1e8), (-3e12, 7e11), (1e15, -1e15)] {
            let model = c.apply_drag(ControlPoint::Center, delta).unwrap();
            assert_eq!(model.radius(), radius);
            assert!(
                model.is_consistent(RADIUS_EPSILON),
                "radius {} drifted from {} at {}",
                model.radius(),
                model.center().distance(model.edge()),
                model.center()
            );
        }
    }

    #[test]
    fn deltas_are_cumulative() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Edge);
        c.apply_drag(ControlPoint::Edge, (0.0, 40.0)).unwrap();
        c.apply_drag(ControlPoint::Edge, (0.0, 70.0)).unwrap();
        let model = c.apply_drag(ControlPoint::Edge, (0.0, 100.0)).unwrap();
        assert_eq!(model.edge(), Point::new(300.0, 300.0));

        // A new gesture anchors at the new position.
        c.end_drag(ControlPoint::Edge);
        c.begin_drag(ControlPoint::Edge);
        let model = c.apply_drag(ControlPoint::Edge, (-100.0, -100.0)).unwrap();
        assert_eq!(model.edge(), Point::new(200.0, 200.0));
        assert_eq!(model.radius(), 0.0);
    }

    #[test]
    fn edge_onto_center_is_stable() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Edge);
        let model = c.apply_drag(ControlPoint::Edge, (-100.0, 0.0)).unwrap();
        assert_eq!(model.edge(), model.center());
        assert_eq!(model.radius(), 0.0);
        assert!(model.is_consistent(RADIUS_EPSILON));

        // Dragging a zero-radius circle by its center keeps it degenerate.
        c.begin_drag(ControlPoint::Center);
        let model = c.apply_drag(ControlPoint::Center, (3.0, 4.0)).unwrap();
        assert_eq!(model.center(), Point::new(203.0, 204.0));
        assert_eq!(model.radius(), 0.0);
    }

    #[test]
    fn non_finite_delta_is_rejected() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Center);
        c.begin_drag(ControlPoint::Edge);
        let before = *c.model();
        for delta in [
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(0.0, f64::INFINITY),
            Vec2::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            for target in ControlPoint::ALL {
                assert_eq!(
                    c.apply_drag(target, delta),
                    Err(DragError::NonFiniteDelta { target })
                );
            }
        }
        assert_eq!(c.model(), &before);

        let overflow = c.apply_drag(ControlPoint::Edge, (f64::MAX, f64::MAX));
        assert_eq!(
            overflow,
            Err(DragError::NonFiniteDelta {
                target: ControlPoint::Edge
            })
        );
        assert_eq!(c.model(), &before);
    }

    #[test]
    fn drag_without_session_is_rejected() {
        let mut c = scenario_start();
        assert_eq!(
            c.apply_drag(ControlPoint::Edge, (1.0, 1.0)),
            Err(DragError::NotDragging {
                target: ControlPoint::Edge
            })
        );
        c.begin_drag(ControlPoint::Center);
        assert!(c.apply_drag(ControlPoint::Edge, (1.0, 1.0)).is_err());
        assert_eq!(c.model(), &CircleModel::new((200.0, 200.0), 100.0));
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Edge);
        c.begin_drag(ControlPoint::Center);
        c.apply_drag(ControlPoint::Edge, (0.0, 100.0)).unwrap();

        c.end_drag(ControlPoint::Edge);
        let after_first = (*c.model(), c.is_dragging(ControlPoint::Edge));
        c.end_drag(ControlPoint::Edge);
        c.end_drag(ControlPoint::Edge);
        assert_eq!((*c.model(), c.is_dragging(ControlPoint::Edge)), after_first);
        assert!(!c.is_dragging(ControlPoint::Edge));
        // The other control point's session is untouched.
        assert!(c.is_dragging(ControlPoint::Center));

        c.end_all();
        c.end_all();
        assert!(!c.is_dragging(ControlPoint::Center));
    }

    #[test]
    fn begin_drag_reanchors() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Center);
        c.apply_drag(ControlPoint::Center, (10.0, 0.0)).unwrap();
        c.begin_drag(ControlPoint::Center);
        let session = c.session(ControlPoint::Center).unwrap();
        assert_eq!(session.origin_center(), Point::new(210.0, 200.0));
        let model = c.apply_drag(ControlPoint::Center, (10.0, 0.0)).unwrap();
        assert_eq!(model.center(), Point::new(220.0, 200.0));
    }

    #[test]
    fn simultaneous_drags_apply_in_order() {
        let mut c = scenario_start();
        c.begin_drag(ControlPoint::Center);
        c.begin_drag(ControlPoint::Edge);

        // The center moves first; the edge radius is measured from the moved
        // center.
        c.apply_drag(ControlPoint::Center, (-100.0, 0.0)).unwrap();
        let model = c.apply_drag(ControlPoint::Edge, (0.0, 0.0)).unwrap();
        assert_eq!(model.center(), Point::new(100.0, 200.0));
        assert_eq!(model.edge(), Point::new(300.0, 200.0));
        assert_eq!(model.radius(), 200.0);

        // A later center update translates its own anchors: last write wins.
        let model = c.apply_drag(ControlPoint::Center, (-50.0, 0.0)).unwrap();
        assert_eq!(model.center(), Point::new(150.0, 200.0));
        assert_eq!(model.edge(), Point::new(250.0, 200.0));
        assert_eq!(model.radius(), 100.0);
        assert!(model.is_consistent(RADIUS_EPSILON));
    }

    #[test]
    fn radius_invariant_holds_for_random_gestures() {
        let mut rng = StdRng::seed_from_u64(0x5eed_c12c);
        let mut c = CircleController::default();
        for _ in 0..2_000 {
            let target = if rng.random_bool(0.5) {
                ControlPoint::Center
            } else {
                ControlPoint::Edge
            };
            if !c.is_dragging(target) {
                c.begin_drag(target);
            }
            let before = *c.model();
            // Mix gestures near the canvas with ones far from the origin.
            let scale = 10_f64.powi(rng.random_range(0..10));
            let delta = Vec2::new(
                rng.random_range(-1.0..1.0) * scale,
                rng.random_range(-1.0..1.0) * scale,
            );
            let session = *c.session(target).unwrap();
            let model = c.apply_drag(target, delta).unwrap();
            assert!(
                model.is_consistent(RADIUS_EPSILON),
                "radius {} drifted from {} at {}",
                model.radius(),
                model.center().distance(model.edge()),
                model.center()
            );
            let expected_edge = session.origin_edge() + delta;
            let tolerance = RADIUS_EPSILON
                * [
                    session.origin_center(),
                    session.origin_edge(),
                    expected_edge,
                    model.center(),
                ]
                .iter()
                .fold(1_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
            assert!(
                model.edge().distance(expected_edge) < tolerance,
                "edge {} is not at {}",
                model.edge(),
                expected_edge
            );
            match target {
                ControlPoint::Center => {
                    assert_eq!(model.center(), session.origin_center() + delta);
                    assert_eq!(model.radius(), session.origin_radius());
                }
                ControlPoint::Edge => {
                    assert_eq!(model.center(), before.center());
                }
            }
            if rng.random_bool(0.1) {
                c.end_drag(target);
            }
        }
    }

    #[test]
    fn error_display() {
        let err = DragError::NotDragging {
            target: ControlPoint::Center,
        };
        assert_eq!(err.to_string(), "The center point is not being dragged");
        let err = DragError::NonFiniteDelta {
            target: ControlPoint::Edge,
        };
        assert_eq!(err.to_string(), "Non-finite drag delta for the edge point");
    }
}
