//! CLI command implementations

pub mod color;
pub mod vector;

use anyhow::{Context, Result};
use pvec_io::TextScalar;
use pvec_math::Vector;

/// Parses a vector argument, naming the argument on failure.
pub fn parse_vector_arg<T: TextScalar, const N: usize>(name: &str, text: &str) -> Result<Vector<T, N>> {
    pvec_io::parse_vector(text).with_context(|| format!("Invalid {name} vector: {text:?}"))
}

/// Runs `$body` with `N` bound to the component count `$dims` (2, 3 or 4).
macro_rules! with_dims {
    ($dims:expr, |$n:ident| $body:expr) => {
        match $dims {
            2 => {
                const $n: usize = 2;
                $body
            }
            3 => {
                const $n: usize = 3;
                $body
            }
            4 => {
                const $n: usize = 4;
                $body
            }
            other => anyhow::bail!("Unsupported component count: {other}"),
        }
    };
}

pub(crate) use with_dims;
