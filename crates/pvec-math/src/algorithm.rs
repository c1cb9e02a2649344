//! Scalar algorithms: interpolation, clamping and wrapping.
//!
//! These work on plain scalars; [`lerp`] also works on vectors since it
//! only needs `T + T` and `T * S`.
//!
//! # Usage
//!
//! ```rust
//! use pvec_math::{clamp, lerp, saturate, vec3, wrap};
//!
//! assert_eq!(lerp(0.0f32, 10.0, 0.5), 5.0);
//! assert_eq!(lerp(vec3(0.0f32, 0.0, 0.0), vec3(10.0, 20.0, 30.0), 0.5), vec3(5.0, 10.0, 15.0));
//! assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
//! assert_eq!(saturate(-0.5f32), 0.0);
//! assert_eq!(wrap(370.0f64, 0.0, 360.0), 10.0);
//! ```

use pvec_core::{Component, Real};
use std::ops::{Add, Mul};

/// `std::min` semantics: returns `a` unless `b < a`.
#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// `std::max` semantics: returns `a` unless `a < b`.
#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

/// Linear interpolation between two values.
///
/// Computed as `begin * (1 - amount) + end * amount`, so `T` needs no
/// subtraction. `amount` outside `[0, 1]` extrapolates.
///
/// # Example
///
/// ```rust
/// use pvec_math::lerp;
///
/// assert_eq!(lerp(2.0f64, 4.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0f64, 4.0, 1.0), 4.0);
/// assert_eq!(lerp(2.0f64, 4.0, 2.0), 6.0);
/// ```
#[inline]
pub fn lerp<T, S>(begin: T, end: T, amount: S) -> T
where
    T: Add<Output = T> + Mul<S, Output = T>,
    S: Real,
{
    begin * (S::one() - amount) + end * amount
}

/// Restricts `val` to `[vmin, vmax]`: `max(min(val, vmax), vmin)`.
///
/// When `vmin > vmax` the result is `vmin`.
#[inline]
pub fn clamp<T: PartialOrd>(val: T, vmin: T, vmax: T) -> T {
    partial_max(partial_min(val, vmax), vmin)
}

/// [`clamp`] with the bounds given as a `(min, max)` pair.
#[inline]
pub fn clamp_range<T: PartialOrd>(val: T, (vmin, vmax): (T, T)) -> T {
    clamp(val, vmin, vmax)
}

/// Forces a value into `[0, 1]`.
#[inline]
pub fn saturate<T: Component>(val: T) -> T {
    clamp(val, T::zero(), T::one())
}

/// Wraps `value` into the range starting at `lower` with period
/// `upper - lower`. Useful for angles.
///
/// # Example
///
/// ```rust
/// use pvec_math::wrap;
///
/// assert_eq!(wrap(-90.0f32, 0.0, 360.0), 270.0);
/// assert_eq!(wrap(5.0f32, -1.0, 1.0), -1.0);
/// ```
#[inline]
pub fn wrap<T: Real>(value: T, lower: T, upper: T) -> T {
    let distance = upper - lower;
    let times = ((value - lower) / distance).floor();
    value - times * distance
}

/// [`wrap`] with the range given as a `(lower, upper)` pair.
#[inline]
pub fn wrap_range<T: Real>(value: T, (lower, upper): (T, T)) -> T {
    wrap(value, lower, upper)
}
