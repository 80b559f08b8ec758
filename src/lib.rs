// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle you can drag by its center or by a point on its edge.
//!
//! The circle is described by a [`CircleModel`]: a center, an edge point and
//! the radius between them. A [`CircleController`] applies drag gestures to
//! either control point and keeps the radius equal to the center to edge
//! distance after every update. A [`CircleWidget`] mirrors the model onto any
//! [`DrawingSurface`], such as the in-memory [`SvgSurface`].
//!
//! # Examples
//!
//! Dragging the control points directly:
//! ```
//! use circle_limit::{CircleController, CircleModel, ControlPoint, Point, Vec2};
//!
//! let mut controller = CircleController::new(CircleModel::new((200.0, 200.0), 100.0));
//!
//! controller.begin_drag(ControlPoint::Center);
//! controller.apply_drag(ControlPoint::Center, Vec2::new(50.0, -20.0)).unwrap();
//! controller.end_drag(ControlPoint::Center);
//!
//! let model = controller.model();
//! assert_eq!(model.center(), Point::new(250.0, 180.0));
//! assert_eq!(model.edge(), Point::new(350.0, 180.0));
//! assert_eq!(model.radius(), 100.0);
//! ```
//!
//! Routing pointer events from a drawing surface:
//! ```
//! use circle_limit::{
//!     CircleModel, CircleWidget, DrawingSurface, Point, PointerEvent, SvgSurface, Vec2,
//!     WidgetStyle,
//! };
//!
//! let mut surface = SvgSurface::new(400.0, 400.0);
//! let mut widget = CircleWidget::new(&mut surface, CircleModel::default(), &WidgetStyle::default());
//!
//! let grabbed = surface.hit_test(Point::new(300.0, 200.0)).unwrap();
//! widget.handle_event(&mut surface, PointerEvent::Down(grabbed)).unwrap();
//! widget
//!     .handle_event(&mut surface, PointerEvent::Drag(grabbed, Vec2::new(0.0, 100.0)))
//!     .unwrap();
//! widget.handle_event(&mut surface, PointerEvent::Up(grabbed)).unwrap();
//!
//! assert!((widget.model().radius() - 141.42135623730951).abs() < 1e-9);
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of points and vectors with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the geometry
//!   and style types, so a [`WidgetStyle`] can be loaded from configuration.
//! - `schemars`: Add support for using these types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! # Logging
//!
//! Drag lifecycle events are reported through the [`log`] facade at `trace`
//! level, and rejected updates at `debug` level. No logger is installed by
//! this crate.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::exhaustive_enums,
    clippy::missing_assert_message,
    clippy::use_self,
    clippy::return_self_not_must_use
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("circle-limit requires either the `std` or `libm` feature");

mod circle;
pub mod common;
mod control;
mod controller;
mod model;
mod point;
mod session;
mod surface;
mod svg;
mod vec2;
mod widget;

pub use crate::circle::*;
pub use crate::control::*;
pub use crate::controller::*;
pub use crate::model::*;
pub use crate::point::*;
pub use crate::session::*;
pub use crate::surface::*;
pub use crate::svg::*;
pub use crate::vec2::*;
pub use crate::widget::*;
