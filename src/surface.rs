// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a circle widget renders onto.

use core::fmt;

use crate::{Circle, Point, Vec2};

/// A rendering backend that can place, move and resize circles.
///
/// Shapes are stacked in placement order; later shapes are drawn on top and
/// win hit tests.
pub trait DrawingSurface {
    /// Identifies a shape placed on this surface.
    type Handle: Copy + Eq + fmt::Debug;

    /// Add a circle to the surface and return its handle.
    fn place_circle(&mut self, circle: Circle, style: &ShapeStyle) -> Self::Handle;

    /// Move the center of a shape to `position`.
    fn move_shape(&mut self, handle: Self::Handle, position: Point);

    /// Change the radius of a circle.
    fn resize_circle(&mut self, handle: Self::Handle, radius: f64);

    /// The top-most shape under `pt`, if any.
    fn hit_test(&self, pt: Point) -> Option<Self::Handle>;
}

/// Pointer input on a shape, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent<H> {
    /// The pointer was pressed on the shape.
    Down(H),
    /// The pointer moved while pressed. The delta is cumulative since
    /// the matching [`PointerEvent::Down`].
    Drag(H, Vec2),
    /// The pointer was released.
    Up(H),
}

impl<H: Copy> PointerEvent<H> {
    /// The shape this event targets.
    pub fn handle(&self) -> H {
        match *self {
            PointerEvent::Down(h) | PointerEvent::Drag(h, _) | PointerEvent::Up(h) => h,
        }
    }
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    /// Opaque red.
    pub const RED: Color = Color::rgb8(255, 0, 0);

    /// An opaque color.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// A color with the given alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    /// CSS notation, e.g. `#ff0000` or `#ff000080`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// An outline drawn around a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// How a shape is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeStyle {
    /// Interior color, or `None` for an unfilled shape.
    pub fill: Option<Color>,
    /// Outline, or `None` for no outline.
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    /// An unfilled outline.
    pub const fn outline(color: Color, width: f64) -> ShapeStyle {
        ShapeStyle {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    /// A filled shape with no outline.
    pub const fn filled(color: Color) -> ShapeStyle {
        ShapeStyle {
            fill: Some(color),
            stroke: None,
        }
    }
}

/// The styles a [`CircleWidget`](crate::CircleWidget) draws with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetStyle {
    /// The circle itself.
    pub outline: ShapeStyle,
    /// Both control-point handles.
    pub handle: ShapeStyle,
    /// Radius of the control-point handles.
    pub handle_radius: f64,
}

impl WidgetStyle {
    /// A thin black outline with red handles of radius 5.
    pub const THIN: WidgetStyle = WidgetStyle {
        outline: ShapeStyle::outline(Color::BLACK, 1.0),
        handle: ShapeStyle::filled(Color::RED),
        handle_radius: 5.0,
    };

    /// The same as [`WidgetStyle::THIN`] but with a 5 unit outline, for use
    /// with [`CircleModel::top_left`](crate::CircleModel::top_left).
    pub const fn bold() -> WidgetStyle {
        WidgetStyle {
            outline: ShapeStyle::outline(Color::BLACK, 5.0),
            ..Self::THIN
        }
    }
}

impl Default for WidgetStyle {
    fn default() -> Self {
        Self::THIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display() {
        assert_eq!(Color::RED.to_string(), "#ff0000");
        assert_eq!(Color::rgba8(0, 16, 255, 128).to_string(), "#0010ff80");
    }

    #[test]
    fn event_handle() {
        assert_eq!(PointerEvent::Down(3_u32).handle(), 3);
        assert_eq!(PointerEvent::Drag(4_u32, Vec2::ZERO).handle(), 4);
        assert_eq!(PointerEvent::Up(5_u32).handle(), 5);
    }

    #[test]
    fn default_widget_style() {
        let style = WidgetStyle::default();
        assert_eq!(style.outline.fill, None);
        assert_eq!(
            style.outline.stroke,
            Some(Stroke {
                color: Color::BLACK,
                width: 1.0
            })
        );
        assert_eq!(style.handle.fill, Some(Color::RED));
        assert_eq!(style.handle_radius, 5.0);
    }

    #[test]
    fn bold_widget_style() {
        let style = WidgetStyle::bold();
        assert_eq!(style.outline, ShapeStyle::outline(Color::BLACK, 5.0));
        assert_eq!(style.handle, WidgetStyle::default().handle);
        assert_eq!(style.handle_radius, 5.0);
    }
}
