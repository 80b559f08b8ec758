// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory drawing surface that renders to SVG.

use core::fmt;

use smallvec::SmallVec;

#[cfg(feature = "std")]
use std::io;

use crate::{Circle, DrawingSurface, Point, ShapeStyle};

/// Identifies a circle on an [`SvgSurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SvgHandle(usize);

#[derive(Clone, Debug)]
struct SvgShape {
    circle: Circle,
    style: ShapeStyle,
}

/// A [`DrawingSurface`] that keeps its shapes in memory and formats them as
/// an SVG document through [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use circle_limit::{CircleModel, CircleWidget, SvgSurface, WidgetStyle};
///
/// let mut surface = SvgSurface::new(400.0, 400.0);
/// let _widget = CircleWidget::new(&mut surface, CircleModel::default(), &WidgetStyle::default());
/// let svg = surface.to_string();
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<circle").count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    shapes: SmallVec<[SvgShape; 4]>,
}

impl SvgSurface {
    /// An empty surface of the given size.
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface {
            width,
            height,
            shapes: SmallVec::new(),
        }
    }

    /// The number of shapes placed.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Is the surface empty?
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The current geometry of a shape.
    pub fn circle(&self, handle: SvgHandle) -> Option<Circle> {
        self.shapes.get(handle.0).map(|s| s.circle)
    }

    /// The style a shape was placed with.
    pub fn style(&self, handle: SvgHandle) -> Option<&ShapeStyle> {
        self.shapes.get(handle.0).map(|s| &s.style)
    }

    /// Write out the SVG document to anything implementing `io::Write`.
    #[cfg(feature = "std")]
    pub fn write_to(&self, mut w: impl io::Write) -> io::Result<()> {
        write!(w, "{self}")
    }

    fn shape_mut(&mut self, handle: SvgHandle) -> Option<&mut SvgShape> {
        let shape = self.shapes.get_mut(handle.0);
        if shape.is_none() {
            log::warn!("ignoring update to unknown shape {handle:?}");
        }
        shape
    }
}

impl DrawingSurface for SvgSurface {
    type Handle = SvgHandle;

    fn place_circle(&mut self, circle: Circle, style: &ShapeStyle) -> SvgHandle {
        self.shapes.push(SvgShape {
            circle,
            style: *style,
        });
        SvgHandle(self.shapes.len() - 1)
    }

    fn move_shape(&mut self, handle: SvgHandle, position: Point) {
        if let Some(shape) = self.shape_mut(handle) {
            shape.circle.center = position;
        }
    }

    fn resize_circle(&mut self, handle: SvgHandle, radius: f64) {
        if let Some(shape) = self.shape_mut(handle) {
            shape.circle.radius = radius;
        }
    }

    fn hit_test(&self, pt: Point) -> Option<SvgHandle> {
        self.shapes
            .iter()
            .rposition(|s| s.circle.contains(pt))
            .map(SvgHandle)
    }
}

impl fmt::Display for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            self.width, self.height
        )?;
        for shape in &self.shapes {
            let Circle { center, radius } = shape.circle;
            write!(f, r#"  <circle cx="{}" cy="{}" r="{}""#, center.x, center.y, radius)?;
            match shape.style.fill {
                Some(color) => write!(f, r#" fill="{color}""#)?,
                None => write!(f, r#" fill="none""#)?,
            }
            if let Some(stroke) = shape.style.stroke {
                write!(
                    f,
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.color, stroke.width
                )?;
            }
            writeln!(f, " />")?;
        }
        write!(f, "</svg>")
    }
}
