// Copyright 2026 the Circle Limit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("circle-limit requires either the `std` or `libm` feature")
            })+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("circle-limit requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs/fabsf;
    fn sqrt(self) -> Self => sqrt/sqrtf;
}

/// Default tolerance used when checking that a model's radius matches the
/// distance between its control points.
pub const RADIUS_EPSILON: f64 = 1e-9;

/// Returns `true` if `a` and `b` differ by less than `epsilon`, scaled by the
/// larger of their magnitudes (and never by less than 1).
///
/// Only the compared values set the scale. When `a` and `b` were derived
/// from larger inputs, use [`approx_eq_at`] with the magnitude of those
/// inputs instead.
///
/// # Examples
///
/// ```
/// use circle_limit::common::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(approx_eq(1e12 + 1e-3, 1e12, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// ```
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    approx_eq_at(a, b, epsilon, 0.0)
}

/// Like [`approx_eq`], but the tolerance is also scaled by `magnitude`.
///
/// A length measured between two points carries rounding error proportional
/// to the points' coordinates, not to the length itself, so pass the largest
/// coordinate magnitude involved.
///
/// # Examples
///
/// ```
/// use circle_limit::common::{approx_eq, approx_eq_at};
///
/// // A short length measured between points near 1e8.
/// assert!(!approx_eq(0.2236067977, 0.2236068044, 1e-9));
/// assert!(approx_eq_at(0.2236067977, 0.2236068044, 1e-9, 1e8));
/// ```
pub fn approx_eq_at(a: f64, b: f64, epsilon: f64, magnitude: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(magnitude.abs()).max(1.0);
    (a - b).abs() < epsilon * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_is_symmetric() {
        assert!(approx_eq(141.42135623730951, 141.4213562373095, RADIUS_EPSILON));
        assert!(approx_eq(141.4213562373095, 141.42135623730951, RADIUS_EPSILON));
        assert!(!approx_eq(100.0, 100.001, RADIUS_EPSILON));
    }

    #[test]
    fn approx_eq_handles_zero_and_infinities() {
        assert!(approx_eq(0.0, 0.0, 0.0));
        assert!(approx_eq(0.0, -0.0, 0.0));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, RADIUS_EPSILON));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, RADIUS_EPSILON));
        assert!(!approx_eq(f64::NAN, f64::NAN, RADIUS_EPSILON));
    }

    #[test]
    fn approx_eq_at_scales_with_magnitude() {
        let (a, b) = (0.22360679774997896, 0.22360680441398095);
        assert!(!approx_eq(a, b, RADIUS_EPSILON));
        assert!(!approx_eq_at(a, b, RADIUS_EPSILON, 1.0));
        assert!(approx_eq_at(a, b, RADIUS_EPSILON, 1e8));
        assert!(approx_eq_at(a, b, RADIUS_EPSILON, -1e8));
        assert!(!approx_eq_at(a, a + 1.0, RADIUS_EPSILON, 1e8));
    }
}
