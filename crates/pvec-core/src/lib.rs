//! # pvec-core
//!
//! Core types shared by the pvec crates.
//!
//! - [`Component`] - scalar element trait with the color range convention
//! - [`Real`] - floating-point components (`sqrt`, `floor`)
//! - [`scale_byte`], [`to_byte`] - conversions between a byte and a color range
//! - [`Error`], [`Result`] - errors for strict parsing and conversions
//!
//! ## Crate Structure
//!
//! ```text
//! pvec-core (this crate)
//!    ^
//!    |
//!    +-- pvec-math (Vector, Matrix, scalar algorithms)
//!    +-- pvec-io (text reader, color reader, writer)
//!    +-- pvec-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod component;
pub mod error;

pub use component::{scale_byte, to_byte, Component, Real};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pvec_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component::{scale_byte, to_byte, Component, Real};
    pub use crate::error::{Error, Result};
}
