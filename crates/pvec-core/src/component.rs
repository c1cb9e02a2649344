//! Scalar component types and the color range convention.
//!
//! Every vector and matrix in pvec stores components of a single numeric
//! type implementing [`Component`]. The trait carries the numeric
//! operations the generic containers need plus the **color range
//! convention**: the value that means "full intensity" when a vector is
//! read as a color.
//!
//! | Type                  | `color_max()` |
//! |-----------------------|---------------|
//! | `f32`, `f64`, `f16`   | `1.0`         |
//! | `u8`                  | `255`         |
//! | other integers        | `T::MAX`      |
//!
//! # Example
//!
//! ```
//! use pvec_core::{scale_byte, to_byte, Component};
//!
//! assert_eq!(u8::color_max(), 255);
//! assert_eq!(f32::color_max(), 1.0);
//!
//! // 0x88 in the float range, and back
//! let g: f32 = scale_byte(0x88);
//! assert!((g - 0.5333).abs() < 1e-3);
//! assert_eq!(to_byte(g), 0x88);
//! ```

use half::f16;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for vector and matrix component types.
///
/// Implemented for `f32`, `f64`, [`f16`], and the primitive integers
/// `u8, i8, u16, i16, u32, i32, u64, i64`.
///
/// # Constants
///
/// - [`BITS`](Component::BITS) - width of the type in bits
/// - [`IS_FLOAT`](Component::IS_FLOAT) - whether the type is floating point
pub trait Component:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Number of bits in the type.
    const BITS: u32;

    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Full intensity under the color range convention.
    ///
    /// `1.0` for floating types, the type's maximum for integers.
    fn color_max() -> Self;

    /// Absolute value. Identity for unsigned types; wraps for `MIN` of
    /// signed integers.
    fn abs(self) -> Self;

    /// Widening conversion to `f64`.
    fn to_f64(self) -> f64;

    /// Conversion from `f64`.
    ///
    /// Integral types round toward zero and saturate at their bounds.
    fn from_f64(v: f64) -> Self;

    /// `self + rhs`, wrapping around at the bounds of integral types.
    fn add_wrapping(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping around at the bounds of integral types.
    fn sub_wrapping(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around at the bounds of integral types.
    fn mul_wrapping(self, rhs: Self) -> Self;

    /// `self / rhs`; `MIN / -1` wraps for signed integers.
    ///
    /// Integer division by zero still panics.
    fn div_wrapping(self, rhs: Self) -> Self;
}

/// Floating-point components: the types `sqrt` and `floor` make sense for.
pub trait Real: Component + Neg<Output = Self> {
    /// Square root.
    fn sqrt(self) -> Self;

    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const BITS: u32 = <$t>::BITS;
            const IS_FLOAT: bool = false;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn color_max() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const BITS: u32 = <$t>::BITS;
            const IS_FLOAT: bool = false;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn color_max() -> Self {
                <$t>::MAX
            }

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
            const IS_FLOAT: bool = true;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn color_max() -> Self {
                1.0
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self / rhs
            }
        }

        impl Real for $t {
            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);
impl_float!(f32, f64);

impl Component for f16 {
    const BITS: u32 = 16;
    const IS_FLOAT: bool = true;

    #[inline]
    fn zero() -> Self {
        f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        f16::ONE
    }

    #[inline]
    fn color_max() -> Self {
        f16::ONE
    }

    #[inline]
    fn abs(self) -> Self {
        f16::from_f32(f16::to_f32(self).abs())
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn add_wrapping(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub_wrapping(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul_wrapping(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn div_wrapping(self, rhs: Self) -> Self {
        self / rhs
    }
}

/// Maps a byte (0..=255) into `T`'s color range.
///
/// Computes `byte * color_max / 255`; integral results round toward zero.
#[inline]
pub fn scale_byte<T: Component>(byte: u8) -> T {
    T::from_f64(f64::from(byte) * T::color_max().to_f64() / 255.0)
}

/// Maps a component in `T`'s color range to a byte.
///
/// Computes `value / color_max * 255`, rounded toward zero and clamped
/// to 0..=255.
#[inline]
pub fn to_byte<T: Component>(value: T) -> u8 {
    let scaled = value.to_f64() * 255.0 / T::color_max().to_f64();
    scaled.clamp(0.0, 255.0) as u8
}
