//! # pvec-math
//!
//! Fixed-size vectors, row matrices and scalar algorithms.
//!
//! - [`Vector`] - `N` components of one type, with `x/y/z/w`, `s/t/p/q` and
//!   `r/g/b/a` accessors for 2, 3 and 4 components
//! - [`VecView`], [`VecViewMut`] - borrowed component runs (truncated colors)
//! - [`Matrix`] - row-major `M x N` buffer with aliased row access
//! - [`lerp`], [`clamp`], [`saturate`], [`wrap`] - scalar algorithms
//!
//! # Design
//!
//! Every vector stores one array; named components are accessor methods
//! into it, never separate fields. Operands of vector operators must agree
//! on component type and count, which the type system enforces.
//!
//! Conversions to and from [`glam`] exist for `f32` vectors of 2-4
//! components and for 3x3 / 4x4 `f32` matrices.
//!
//! # Usage
//!
//! ```rust
//! use pvec_math::{cross_product, dot_product, normalize, vec3};
//!
//! let a = vec3(1.0f32, 0.0, 0.0);
//! let b = vec3(0.0f32, 1.0, 0.0);
//! let c = cross_product(a, b);
//! assert_eq!(dot_product(c, a), 0.0);
//! assert_eq!(normalize(vec3(0.0f32, 0.0, 5.0)), c);
//! ```
//!
//! # Dependencies
//!
//! - [`pvec-core`](pvec_core) - component traits and errors
//! - [`glam`] - interop conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod algorithm;
mod matrix;
mod vector;
mod view;

pub use algorithm::*;
pub use matrix::*;
pub use vector::*;
pub use view::*;

pub use pvec_core::{Component, Real};
