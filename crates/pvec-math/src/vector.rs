//! Fixed-size vector type.
//!
//! [`Vector<T, N>`] holds `N` components of one [`Component`] type in a
//! single backing array. Vectors of 2, 3 and 4 components get named
//! accessors (`x y z w`, `s t p q`, `r g b a`), all of which index into that
//! same array, so every alias of component `i` observes the same value.
//!
//! # Usage
//!
//! ```rust
//! use pvec_math::{vec3, Vec3};
//!
//! let mut v = vec3(1.0, 2.0, 3.0);
//! v *= 3.0;
//! v = v * 2.0;
//! assert_eq!(v, Vec3::new([6.0, 12.0, 18.0]));
//!
//! // x, r and s all name component 0
//! v.set_r(0.5);
//! assert_eq!(v.x(), 0.5);
//! assert_eq!(v.s(), 0.5);
//! assert_eq!(v[0], 0.5);
//! ```
//!
//! # Operators
//!
//! `+ -` between vectors, unary `-`, and `* /` by a scalar of the component
//! type, plus the assigning forms. Operands must agree on `T` and `N` at
//! compile time.

use crate::algorithm::{clamp, partial_max, partial_min};
use crate::view::{ComponentSlice, ComponentSliceMut, VecView, VecViewMut};
use pvec_core::{Component, Error, Real, Result};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A vector of `N` components of type `T`.
///
/// Plain value type: copied by value, compared by content.
///
/// # Indexing
///
/// `v[i]` is valid for `0 <= i < N` and panics otherwise. Use
/// [`get`](Vector::get) for a checked lookup.
///
/// # Example
///
/// ```rust
/// use pvec_math::{Vector, dot_product};
///
/// let a = Vector::new([1.0f32, 2.0]);
/// let b = Vector::new([4.5f32, 5.2]);
/// assert!((dot_product(a, b) - 14.9).abs() < 1e-5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Two `f32` components.
pub type Vec2 = Vector<f32, 2>;
/// Three `f32` components.
pub type Vec3 = Vector<f32, 3>;
/// Four `f32` components.
pub type Vec4 = Vector<f32, 4>;
/// Two `f64` components.
pub type DVec2 = Vector<f64, 2>;
/// Three `f64` components.
pub type DVec3 = Vector<f64, 3>;
/// Four `f64` components.
pub type DVec4 = Vector<f64, 4>;
/// Two `i32` components.
pub type IVec2 = Vector<i32, 2>;
/// Three `i32` components.
pub type IVec3 = Vector<i32, 3>;
/// Four `i32` components.
pub type IVec4 = Vector<i32, 4>;
/// Three `u8` components, the usual 8-bit RGB color.
pub type UbVec3 = Vector<u8, 3>;
/// Four `u8` components, the usual 8-bit RGBA color.
pub type UbVec4 = Vector<u8, 4>;

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const SIZE: usize = N;

    const NON_EMPTY: () = assert!(N > 0, "a vector needs at least one component");

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { components }
    }

    /// Creates a vector by calling `f` with each component index.
    ///
    /// ```rust
    /// use pvec_math::Vector;
    ///
    /// let v = Vector::<u32, 4>::from_fn(|i| i as u32 * 10);
    /// assert_eq!(v.to_array(), [0, 10, 20, 30]);
    /// ```
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Number of components (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; zero-sized vectors are rejected at compile time.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Borrows the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.components
    }

    /// Consumes the vector, returning the backing array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.components
    }

    /// Checked component access.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.components.get(i)
    }

    /// Checked mutable component access.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.components.get_mut(i)
    }

    /// Iterates over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Iterates mutably over the components.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::new(self.components.map(f))
    }

    /// A view of the first `N - 1` components sharing this vector's storage.
    ///
    /// Used to treat an RGBA color as its RGB part.
    #[inline]
    pub fn truncated(&self) -> VecView<'_, T> {
        VecView::new(&self.components[..N - 1])
    }

    /// A mutable view of the first `N - 1` components.
    ///
    /// Writes through the view land in this vector; the last component is
    /// untouched.
    ///
    /// ```rust
    /// use pvec_math::vec4;
    ///
    /// let mut c = vec4(10.0f32, 20.0, 30.0, 40.0);
    /// {
    ///     let mut rgb = c.truncated_mut();
    ///     rgb.set_r(50.0);
    ///     rgb[2] = 70.0;
    /// }
    /// assert_eq!(c.to_array(), [50.0, 20.0, 70.0, 40.0]);
    /// ```
    #[inline]
    pub fn truncated_mut(&mut self) -> VecViewMut<'_, T> {
        VecViewMut::new(&mut self.components[..N - 1])
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector with every component set to `v`.
    ///
    /// ```rust
    /// use pvec_math::Vec3;
    ///
    /// assert_eq!(Vec3::splat(0.5), Vec3::new([0.5, 0.5, 0.5]));
    /// ```
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new([v; N])
    }

    /// Copies out the backing array.
    #[inline]
    pub const fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map<F: FnMut(T, T) -> T>(self, rhs: Self, mut f: F) -> Self {
        Self::from_fn(|i| f(self.components[i], rhs.components[i]))
    }

    /// Left fold over the components, seeded with component 0.
    ///
    /// ```rust
    /// use pvec_math::vec3;
    ///
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.fold(|acc, c| acc * 10 + c), 123);
    /// ```
    #[inline]
    pub fn fold<F: FnMut(T, T) -> T>(self, mut f: F) -> T {
        self.components[1..]
            .iter()
            .fold(self.components[0], |acc, &c| f(acc, c))
    }
}

impl<T: Component, const N: usize> Vector<T, N> {
    /// All components zero.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Sum of pairwise products.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.components
            .iter()
            .zip(rhs.components.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.add_wrapping(a.mul_wrapping(b)))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, partial_min)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, partial_max)
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> T {
        self.fold(partial_max)
    }

    /// Smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        self.fold(partial_min)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Component::abs)
    }

    /// Clamps each component to the matching components of `min` and `max`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| clamp(self.components[i], min.components[i], max.components[i]))
    }

    /// Clamps each component to `[0, 1]`.
    #[inline]
    pub fn saturate(self) -> Self {
        self.map(|c| clamp(c, T::zero(), T::one()))
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean length: `sqrt(dot(v, v))`.
    #[inline]
    pub fn magnitude(self) -> T {
        self.dot(self).sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Divides the vector by its magnitude.
    ///
    /// There is no zero guard: a zero vector yields NaN components, which
    /// propagate like any other IEEE result.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.components.iter().all(|c| c.to_f64().is_finite())
    }
}

impl<T: Component> Vector<T, 3> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = rhs.components;
        let det = |a: T, b: T, c: T, d: T| a.mul_wrapping(b).sub_wrapping(c.mul_wrapping(d));
        Self::new([det(ay, bz, by, az), det(az, bx, bz, ax), det(ax, by, bx, ay)])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Copies out the first three components.
    #[inline]
    pub fn rgb(&self) -> Vector<T, 3> {
        let [r, g, b, _] = self.components;
        Vector::new([r, g, b])
    }

    /// Builds a four-component vector from three components and a fourth.
    #[inline]
    pub fn from_rgb(rgb: Vector<T, 3>, a: T) -> Self {
        let [r, g, b] = rgb.components;
        Self::new([r, g, b, a])
    }
}

/// Creates a two-component vector.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector::new([x, y])
}

/// Creates a three-component vector.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::new([x, y, z])
}

/// Creates a four-component vector.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::new([x, y, z, w])
}

macro_rules! named_components {
    ($n:literal => $($idx:literal: $get:ident $set:ident $get_mut:ident),* $(,)?) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Component ", stringify!($idx), ".")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.components[$idx]
                }

                #[doc = concat!("Sets component ", stringify!($idx), ".")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.components[$idx] = value;
                }

                #[doc = concat!("Mutable reference to component ", stringify!($idx), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.components[$idx]
                }
            )*
        }
    };
}

named_components!(2 =>
    0: x set_x x_mut, 1: y set_y y_mut,
    0: s set_s s_mut, 1: t set_t t_mut,
);

named_components!(3 =>
    0: x set_x x_mut, 1: y set_y y_mut, 2: z set_z z_mut,
    0: s set_s s_mut, 1: t set_t t_mut, 2: p set_p p_mut,
    0: r set_r r_mut, 1: g set_g g_mut, 2: b set_b b_mut,
);

named_components!(4 =>
    0: x set_x x_mut, 1: y set_y y_mut, 2: z set_z z_mut, 3: w set_w w_mut,
    0: s set_s s_mut, 1: t set_t t_mut, 2: p set_p p_mut, 3: q set_q q_mut,
    0: r set_r r_mut, 1: g set_g g_mut, 2: b set_b b_mut, 3: a set_a a_mut,
);

// Free functions

/// Sum of pairwise products of `a` and `b`.
#[inline]
pub fn dot_product<T: Component, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Cross product of two three-component vectors.
///
/// `(a.y*b.z - b.y*a.z, a.z*b.x - b.z*a.x, a.x*b.y - b.x*a.y)`
#[inline]
pub fn cross_product<T: Component>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// Euclidean length of `v`.
#[inline]
pub fn magnitude<T: Real, const N: usize>(v: Vector<T, N>) -> T {
    v.magnitude()
}

/// `v / magnitude(v)`, unguarded.
#[inline]
pub fn normalize<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// Component-wise minimum of `a` and `b`.
#[inline]
pub fn min<T: Component, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.min(b)
}

/// Component-wise maximum of `a` and `b`.
#[inline]
pub fn max<T: Component, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.max(b)
}

/// Largest component of `v`.
#[inline]
pub fn max_element<T: Component, const N: usize>(v: Vector<T, N>) -> T {
    v.max_element()
}

/// Component-wise absolute value of `v`.
#[inline]
pub fn abs<T: Component, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.abs()
}

// Trait impls

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector")?;
        f.debug_list().entries(self.components.iter()).finish()
    }
}

impl<T: Component, const N: usize> Default for Vector<T, N> {
    /// Zero-filled.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

impl<T: Component + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Integral components wrap on overflow in every arithmetic operator
impl<T: Component, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::add_wrapping)
    }
}

impl<T: Component, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::sub_wrapping)
    }
}

// Vector * scalar
impl<T: Component, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c.mul_wrapping(rhs))
    }
}

// Vector / scalar
impl<T: Component, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        self.map(|c| c.div_wrapping(rhs))
    }
}

impl<T: Component, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Component, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Component, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Component, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// scalar * Vector
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(a: [T; N]) -> Self {
        Self::new(a)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> [T; N] {
        v.components
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    #[inline]
    fn try_from(slice: &[T]) -> Result<Self> {
        <[T; N]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| Error::length_mismatch(N, slice.len()))
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<T, const N: usize> ComponentSlice for Vector<T, N> {
    type Scalar = T;

    #[inline]
    fn components(&self) -> &[T] {
        &self.components
    }
}

impl<T, const N: usize> ComponentSliceMut for Vector<T, N> {
    #[inline]
    fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

// glam interop

impl From<Vector<f32, 2>> for glam::Vec2 {
    #[inline]
    fn from(v: Vector<f32, 2>) -> glam::Vec2 {
        glam::Vec2::from_array(v.components)
    }
}

impl From<glam::Vec2> for Vector<f32, 2> {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector<f32, 3>> for glam::Vec3 {
    #[inline]
    fn from(v: Vector<f32, 3>) -> glam::Vec3 {
        glam::Vec3::from_array(v.components)
    }
}

impl From<glam::Vec3> for Vector<f32, 3> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector<f32, 4>> for glam::Vec4 {
    #[inline]
    fn from(v: Vector<f32, 4>) -> glam::Vec4 {
        glam::Vec4::from_array(v.components)
    }
}

impl From<glam::Vec4> for Vector<f32, 4> {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::new(v.to_array())
    }
}
