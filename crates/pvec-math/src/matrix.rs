//! Row matrix type.
//!
//! [`Matrix<T, M, N>`] is `N` rows of `M` components, stored row-major.
//! Component `k` of the flat layout sits in row `k / M`, column `k % M`,
//! so for every valid `i, j`:
//!
//! ```text
//! row(j)[i] == component(j * M + i)
//! ```
//!
//! Rows are handed out as references to [`Vector<T, M>`] living inside the
//! matrix, so writing through `row_mut(j)` changes the matrix itself.
//! No algebra (multiply, inverse, transpose) is provided.
//!
//! # Usage
//!
//! ```rust
//! use pvec_math::Mat3;
//!
//! let mut m = Mat3::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//!     [7.0, 8.0, 9.0],
//! ]);
//! m.row_mut(1).set_y(300.0);
//! assert_eq!(m.component(4), 300.0);
//! ```

use crate::Vector;
use pvec_core::Component;
use std::fmt;
use std::ops::{Index, IndexMut};

/// `N` rows of `M` components of type `T`.
///
/// `M` is the width (components per row), `N` the height (row count).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize> {
    rows: [Vector<T, M>; N],
}

/// 3x3 `f32` matrix.
pub type Mat3 = Matrix<f32, 3, 3>;
/// 4x4 `f32` matrix.
pub type Mat4 = Matrix<f32, 4, 4>;

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Components per row.
    pub const WIDTH: usize = M;
    /// Number of rows.
    pub const HEIGHT: usize = N;
    /// Total component count.
    pub const LEN: usize = M * N;

    const NON_EMPTY: () = assert!(M > 0 && N > 0, "a matrix needs at least one row and one column");

    /// Creates a matrix from its rows.
    #[inline]
    pub const fn from_row_vectors(rows: [Vector<T, M>; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { rows }
    }

    /// Creates a matrix by calling `f(row, column)` for every component.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_row_vectors(std::array::from_fn(|j| Vector::from_fn(|i| f(j, i))))
    }

    /// Row `j` as a vector aliasing the matrix storage.
    ///
    /// Panics if `j >= N`.
    #[inline]
    pub fn row(&self, j: usize) -> &Vector<T, M> {
        &self.rows[j]
    }

    /// Mutable row `j`; writes land in the matrix.
    ///
    /// Panics if `j >= N`.
    #[inline]
    pub fn row_mut(&mut self, j: usize) -> &mut Vector<T, M> {
        &mut self.rows[j]
    }

    /// All rows.
    #[inline]
    pub fn rows(&self) -> &[Vector<T, M>; N] {
        &self.rows
    }

    /// Flat row-major access to component `k`, panicking if `k >= M * N`.
    #[inline]
    pub fn component_ref(&self, k: usize) -> &T {
        assert!(k < Self::LEN, "matrix component {k} out of range for {M}x{N}");
        &self.rows[k / M][k % M]
    }

    /// Flat row-major mutable access to component `k`.
    ///
    /// Panics if `k >= M * N`.
    #[inline]
    pub fn component_mut(&mut self, k: usize) -> &mut T {
        assert!(k < Self::LEN, "matrix component {k} out of range for {M}x{N}");
        &mut self.rows[k / M][k % M]
    }

    /// Checked flat access.
    #[inline]
    pub fn get(&self, k: usize) -> Option<&T> {
        if k < Self::LEN {
            Some(&self.rows[k / M][k % M])
        } else {
            None
        }
    }

    /// Iterates over all components in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Iterates mutably over all components in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }
}

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Creates a matrix with every component set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::from_row_vectors([Vector::splat(v); N])
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub fn from_rows(rows: [[T; M]; N]) -> Self {
        Self::from_row_vectors(rows.map(Vector::new))
    }

    /// Copies out the rows as arrays.
    #[inline]
    pub fn to_rows(&self) -> [[T; M]; N] {
        self.rows.map(|row| row.to_array())
    }

    /// Flat row-major component `k`.
    ///
    /// Panics if `k >= M * N`.
    #[inline]
    pub fn component(&self, k: usize) -> T {
        *self.component_ref(k)
    }

    /// Copies out column `i`.
    #[inline]
    pub fn column(&self, i: usize) -> Vector<T, N> {
        Vector::from_fn(|j| self.rows[j][i])
    }
}

impl<T: Component, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Zero-filled matrix.
    #[inline]
    pub fn new() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Component, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const M: usize, const N: usize> fmt::Debug for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{M}x{N}")?;
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

// m[(row, column)]
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (j, i): (usize, usize)) -> &T {
        &self.rows[j][i]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (j, i): (usize, usize)) -> &mut T {
        &mut self.rows[j][i]
    }
}

impl From<Matrix<f32, 3, 3>> for glam::Mat3 {
    /// glam is column-major, so the rows are transposed.
    #[inline]
    fn from(m: Matrix<f32, 3, 3>) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&m.to_rows()).transpose()
    }
}

impl From<glam::Mat3> for Matrix<f32, 3, 3> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

impl From<Matrix<f32, 4, 4>> for glam::Mat4 {
    #[inline]
    fn from(m: Matrix<f32, 4, 4>) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&m.to_rows()).transpose()
    }
}

impl From<glam::Mat4> for Matrix<f32, 4, 4> {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_rows(m.transpose().to_cols_array_2d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counting() -> Mat3 {
        Mat3::from_fn(|j, i| (j * 3 + i + 1) as f32)
    }

    #[test]
    fn test_ctor_fill() {
        let m = Matrix::<f32, 1, 1>::splat(0.0);
        assert_relative_eq!(m.component(0), 0.0);

        let m = Mat3::splat(1.0);
        for k in 0..9 {
            assert_relative_eq!(m.component(k), 1.0);
        }
        assert_eq!(Mat4::new(), Mat4::splat(0.0));
    }

    #[test]
    fn test_row_access() {
        let mut m = counting();

        let r1 = m.row(0);
        assert_relative_eq!(r1.x(), 1.0);
        assert_relative_eq!(r1.y(), 2.0);
        assert_relative_eq!(r1.z(), 3.0);
        let r3 = m.row(2);
        assert_relative_eq!(r3.x(), 7.0);
        assert_relative_eq!(r3.y(), 8.0);
        assert_relative_eq!(r3.z(), 9.0);

        m.row_mut(1).set_y(300.0);
        assert_relative_eq!(m.component(3), 4.0);
        assert_relative_eq!(m.component(4), 300.0);
        assert_relative_eq!(m.component(5), 6.0);

        m.row_mut(2).set_z(100.0);
        assert_relative_eq!(m.component(8), 100.0);
    }

    #[test]
    fn test_flat_write_visible_in_rows() {
        let mut m = Matrix::<i32, 4, 2>::new();
        *m.component_mut(6) = 42;
        assert_eq!(m.row(1)[2], 42);
        assert_eq!(m[(1, 2)], 42);
    }

    #[test]
    fn test_non_square() {
        let m = Matrix::<u8, 2, 3>::from_rows([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(Matrix::<u8, 2, 3>::WIDTH, 2);
        assert_eq!(Matrix::<u8, 2, 3>::HEIGHT, 3);
        assert_eq!(m.row(2).to_array(), [5, 6]);
        assert_eq!(m.column(1).to_array(), [2, 4, 6]);
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert!(m.get(6).is_none());
    }

    #[test]
    #[should_panic]
    fn test_component_out_of_range() {
        let m = counting();
        let _ = m.component(9);
    }

    #[test]
    fn test_glam_layout() {
        let m = counting();
        let g: glam::Mat3 = m.into();
        // glam's row accessor matches ours
        assert_eq!(g.row(0), glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(g.row(2), glam::Vec3::new(7.0, 8.0, 9.0));
        assert_eq!(Mat3::from(g), m);
    }
}
