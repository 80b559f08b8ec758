// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle with draggable center and edge handles on a drawing surface.

use crate::{
    Circle, CircleController, CircleModel, ControlPoint, DragError, DrawingSurface, PointerEvent,
    Vec2, WidgetStyle,
};

/// Binds a [`CircleController`] to three shapes on a [`DrawingSurface`]: the
/// circle outline, the edge handle and the center handle.
///
/// The host forwards pointer events on those shapes to [`handle_event`]; the
/// widget updates the model and moves the shapes to match. The surface is
/// borrowed per call rather than owned, so the host keeps control of it.
///
/// [`handle_event`]: CircleWidget::handle_event
#[derive(Debug)]
pub struct CircleWidget<S: DrawingSurface> {
    controller: CircleController,
    outline: S::Handle,
    center: S::Handle,
    edge: S::Handle,
}

impl<S: DrawingSurface> CircleWidget<S> {
    /// Place the circle and its handles on `surface`.
    ///
    /// The center handle is placed last so it sits on top when the two
    /// handles overlap.
    pub fn new(surface: &mut S, model: CircleModel, style: &WidgetStyle) -> Self {
        let outline = surface.place_circle(model.circle(), &style.outline);
        let edge = surface.place_circle(
            Circle::new(model.edge(), style.handle_radius),
            &style.handle,
        );
        let center = surface.place_circle(
            Circle::new(model.center(), style.handle_radius),
            &style.handle,
        );
        CircleWidget {
            controller: CircleController::new(model),
            outline,
            center,
            edge,
        }
    }

    /// The controller driving this widget.
    #[inline]
    pub fn controller(&self) -> &CircleController {
        &self.controller
    }

    /// The current model.
    #[inline]
    pub fn model(&self) -> &CircleModel {
        self.controller.model()
    }

    /// The handle of the circle outline.
    #[inline]
    pub fn outline(&self) -> S::Handle {
        self.outline
    }

    /// The shape drawn for `target`.
    pub fn handle(&self, target: ControlPoint) -> S::Handle {
        match target {
            ControlPoint::Center => self.center,
            ControlPoint::Edge => self.edge,
        }
    }

    /// The control point drawn by `handle`, if it is one of this widget's
    /// handles.
    pub fn control_point(&self, handle: S::Handle) -> Option<ControlPoint> {
        if handle == self.center {
            Some(ControlPoint::Center)
        } else if handle == self.edge {
            Some(ControlPoint::Edge)
        } else {
            None
        }
    }

    /// Dispatch a pointer event.
    ///
    /// Events on the outline, or on shapes that are not part of this widget,
    /// are ignored. Returns the updated model when a drag moved it.
    ///
    /// # Errors
    ///
    /// Propagates [`DragError`] from the controller; the surface is not
    /// touched in that case.
    pub fn handle_event(
        &mut self,
        surface: &mut S,
        event: PointerEvent<S::Handle>,
    ) -> Result<Option<CircleModel>, DragError> {
        match event {
            PointerEvent::Down(handle) => {
                self.pointer_down(handle);
                Ok(None)
            }
            PointerEvent::Drag(handle, delta) => self.drag(surface, handle, delta),
            PointerEvent::Up(handle) => {
                self.pointer_up(handle);
                Ok(None)
            }
        }
    }

    /// Start dragging the control point drawn by `handle`. Returns `false`
    /// if `handle` is not a control-point handle.
    pub fn pointer_down(&mut self, handle: S::Handle) -> bool {
        match self.control_point(handle) {
            Some(target) => {
                self.controller.begin_drag(target);
                true
            }
            None => false,
        }
    }

    /// Apply a cumulative drag delta to the control point drawn by `handle`
    /// and sync the surface.
    ///
    /// # Errors
    ///
    /// See [`CircleController::apply_drag`].
    pub fn drag(
        &mut self,
        surface: &mut S,
        handle: S::Handle,
        delta: impl Into<Vec2>,
    ) -> Result<Option<CircleModel>, DragError> {
        let Some(target) = self.control_point(handle) else {
            return Ok(None);
        };
        let model = self.controller.apply_drag(target, delta)?;
        self.sync(surface);
        Ok(Some(model))
    }

    /// Stop dragging the control point drawn by `handle`.
    pub fn pointer_up(&mut self, handle: S::Handle) {
        if let Some(target) = self.control_point(handle) {
            self.controller.end_drag(target);
        }
    }

    /// Move and resize the shapes to match the model.
    pub fn sync(&self, surface: &mut S) {
        let model = self.controller.model();
        surface.move_shape(self.outline, model.center());
        surface.resize_circle(self.outline, model.radius());
        surface.move_shape(self.center, model.center());
        surface.move_shape(self.edge, model.edge());
    }
}
