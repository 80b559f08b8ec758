// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// One of the two draggable points that define a circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlPoint {
    /// The center; dragging it moves the whole circle.
    Center,
    /// A point on the circumference; dragging it resizes the circle.
    Edge,
}

impl ControlPoint {
    /// Both control points, in the order their handles are stacked
    /// bottom to top.
    pub const ALL: [ControlPoint; 2] = [ControlPoint::Edge, ControlPoint::Center];
}

impl fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPoint::Center => f.write_str("center"),
            ControlPoint::Edge => f.write_str("edge"),
        }
    }
}
