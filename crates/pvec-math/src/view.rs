//! Borrowed component views.
//!
//! A [`VecView`] / [`VecViewMut`] borrows a run of components out of a
//! [`Vector`] without copying. [`Vector::truncated_mut`] is the main user:
//! it exposes the RGB part of an RGBA color so that writes through the view
//! land in the color while alpha stays untouched.
//!
//! [`ComponentSlice`] and [`ComponentSliceMut`] are the seam the text
//! reader and writer work against, so they accept whole vectors and views
//! alike.

use crate::Vector;
use pvec_core::{Error, Result};
use std::ops::{Index, IndexMut};

/// Anything that exposes its components as a contiguous slice.
pub trait ComponentSlice {
    /// Component type.
    type Scalar;

    /// The components in order.
    fn components(&self) -> &[Self::Scalar];
}

/// Mutable access to a contiguous run of components.
pub trait ComponentSliceMut: ComponentSlice {
    /// The components in order, mutably.
    fn components_mut(&mut self) -> &mut [Self::Scalar];
}

/// Shared view over a run of components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecView<'a, T> {
    components: &'a [T],
}

/// Mutable view over a run of components.
#[derive(Debug, PartialEq)]
pub struct VecViewMut<'a, T> {
    components: &'a mut [T],
}

impl<'a, T> VecView<'a, T> {
    /// Wraps a component slice.
    #[inline]
    pub fn new(components: &'a [T]) -> Self {
        Self { components }
    }

    /// Number of components in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` if the view has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Checked component access.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&'a T> {
        self.components.get(i)
    }

    /// The viewed components.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.components
    }

    /// Iterates over the viewed components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.components.iter()
    }
}

impl<T: Copy> VecView<'_, T> {
    /// Copies the view into a vector of exactly `M` components.
    ///
    /// Fails with [`Error::LengthMismatch`] when the view has a different
    /// length.
    #[inline]
    pub fn to_vector<const M: usize>(&self) -> Result<Vector<T, M>> {
        Vector::try_from(self.components)
    }
}

impl<'a, T> VecViewMut<'a, T> {
    /// Wraps a mutable component slice.
    #[inline]
    pub fn new(components: &'a mut [T]) -> Self {
        Self { components }
    }

    /// Number of components in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` if the view has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
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

    /// The viewed components.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.components
    }

    /// The viewed components, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.components
    }

    /// Iterates over the viewed components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    /// Iterates mutably over the viewed components.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.components.iter_mut()
    }

    /// Shared view of the same components.
    #[inline]
    pub fn as_view(&self) -> VecView<'_, T> {
        VecView::new(self.components)
    }
}

impl<T: Copy> VecViewMut<'_, T> {
    /// Sets every viewed component to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.components.fill(value);
    }

    /// Overwrites the view with the components of `src`.
    ///
    /// Fails with [`Error::LengthMismatch`] unless `M` equals the view length.
    pub fn copy_from<const M: usize>(&mut self, src: &Vector<T, M>) -> Result<()> {
        if self.components.len() != M {
            return Err(Error::length_mismatch(self.components.len(), M));
        }
        self.components.copy_from_slice(src.as_slice());
        Ok(())
    }

    /// Copies the view into a vector of exactly `M` components.
    #[inline]
    pub fn to_vector<const M: usize>(&self) -> Result<Vector<T, M>> {
        Vector::try_from(&*self.components)
    }
}

macro_rules! view_components {
    ($($idx:literal: $get:ident $set:ident),* $(,)?) => {
        impl<T: Copy> VecView<'_, T> {
            $(
                #[doc = concat!("Component ", stringify!($idx), "; panics if the view is shorter.")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.components[$idx]
                }
            )*
        }

        impl<T: Copy> VecViewMut<'_, T> {
            $(
                #[doc = concat!("Component ", stringify!($idx), "; panics if the view is shorter.")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.components[$idx]
                }

                #[doc = concat!("Sets component ", stringify!($idx), "; panics if the view is shorter.")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.components[$idx] = value;
                }
            )*
        }
    };
}

view_components!(
    0: x set_x, 1: y set_y, 2: z set_z,
    0: r set_r, 1: g set_g, 2: b set_b,
);

impl<T> Index<usize> for VecView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T> Index<usize> for VecViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.components[i]
    }
}

impl<T> IndexMut<usize> for VecViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.components[i]
    }
}

impl<T> ComponentSlice for VecView<'_, T> {
    type Scalar = T;

    #[inline]
    fn components(&self) -> &[T] {
        self.components
    }
}

impl<T> ComponentSlice for VecViewMut<'_, T> {
    type Scalar = T;

    #[inline]
    fn components(&self) -> &[T] {
        self.components
    }
}

impl<T> ComponentSliceMut for VecViewMut<'_, T> {
    #[inline]
    fn components_mut(&mut self) -> &mut [T] {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec3, vec4};

    #[test]
    fn test_view_reads_parent() {
        let c = vec4(1u8, 2, 3, 4);
        let view = c.truncated();
        assert_eq!(view.len(), 3);
        assert_eq!(view[2], 3);
        assert_eq!(view.iter().copied().sum::<u8>(), 6);
        assert!(view.get(3).is_none());
    }

    #[test]
    fn test_view_mut_writes_parent() {
        let mut c = vec4(1.0f32, 2.0, 3.0, 4.0);
        let mut view = c.truncated_mut();
        view[0] = 9.0;
        view.fill(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5, 4.0]);
    }

    #[test]
    fn test_copy_from() {
        let mut c = vec4(0u8, 0, 0, 255);
        c.truncated_mut().copy_from(&vec3(10, 20, 30)).unwrap();
        assert_eq!(c.to_array(), [10, 20, 30, 255]);

        let whole = c;
        let err = c.truncated_mut().copy_from(&whole).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 3, got: 4 }));
    }

    #[test]
    fn test_to_vector() {
        let c = vec4(1, 2, 3, 4);
        assert_eq!(c.truncated().to_vector::<3>().unwrap(), vec3(1, 2, 3));
        assert!(c.truncated().to_vector::<4>().is_err());
    }

    #[test]
    fn test_component_slice() {
        fn total<S: ComponentSlice<Scalar = i32>>(s: &S) -> i32 {
            s.components().iter().sum()
        }
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(total(&v), 10);
        assert_eq!(total(&v.truncated()), 6);
        assert_eq!(total(&v.truncated_mut()), 6);
    }
}
