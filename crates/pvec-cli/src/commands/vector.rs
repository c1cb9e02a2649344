//! Vector arithmetic commands: normalize, dot, cross, lerp.
//!
//! Components are read as `f64`.

use anyhow::Result;
use pvec_io::format_vector;
use pvec_math::{cross_product, dot_product, lerp, magnitude, normalize, Vector};
use tracing::{info, warn};

use super::{parse_vector_arg, with_dims};
use crate::{CrossArgs, DotArgs, LerpArgs, NormalizeArgs};

/// Magnitude and unit vector, as printed.
fn normalize_text<const N: usize>(text: &str) -> Result<(f64, String)> {
    let v: Vector<f64, N> = parse_vector_arg("input", text)?;
    let length = magnitude(v);
    if length == 0.0 {
        warn!("zero-length vector, unit vector is undefined");
    }
    Ok((length, format_vector(&normalize(v))))
}

fn dot_value<const N: usize>(a: &str, b: &str) -> Result<f64> {
    let a: Vector<f64, N> = parse_vector_arg("first", a)?;
    let b: Vector<f64, N> = parse_vector_arg("second", b)?;
    Ok(dot_product(a, b))
}

fn cross_text(a: &str, b: &str) -> Result<String> {
    let a: Vector<f64, 3> = parse_vector_arg("first", a)?;
    let b: Vector<f64, 3> = parse_vector_arg("second", b)?;
    Ok(format_vector(&cross_product(a, b)))
}

fn lerp_text<const N: usize>(a: &str, b: &str, t: f64) -> Result<String> {
    let a: Vector<f64, N> = parse_vector_arg("start", a)?;
    let b: Vector<f64, N> = parse_vector_arg("end", b)?;
    if !(0.0..=1.0).contains(&t) {
        info!(t, "amount outside [0, 1], extrapolating");
    }
    Ok(format_vector(&lerp(a, b, t)))
}

/// Run the normalize command.
pub fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let (length, unit) = with_dims!(args.dims, |N| normalize_text::<N>(&args.vector)?);
    println!("magnitude: {length}");
    println!("normalized: {unit}");
    Ok(())
}

/// Run the dot command.
pub fn run_dot(args: DotArgs) -> Result<()> {
    let value = with_dims!(args.dims, |N| dot_value::<N>(&args.a, &args.b)?);
    println!("{value}");
    Ok(())
}

/// Run the cross command.
pub fn run_cross(args: CrossArgs) -> Result<()> {
    println!("{}", cross_text(&args.a, &args.b)?);
    Ok(())
}

/// Run the lerp command.
pub fn run_lerp(args: LerpArgs) -> Result<()> {
    let text = with_dims!(args.dims, |N| lerp_text::<N>(&args.a, &args.b, args.t)?);
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let (length, unit) = normalize_text::<2>("3 4").unwrap();
        assert_eq!(length, 5.0);
        assert_eq!(unit, "0.6 0.8");
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let (length, unit) = normalize_text::<3>("zero").unwrap();
        assert_eq!(length, 0.0);
        assert_eq!(unit, "NaN NaN NaN");
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot_value::<3>("1 2 3", "4 5 6").unwrap(), 32.0);
        assert!(dot_value::<3>("1 2", "4 5 6").is_err());
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross_text("1 0 0", "0 1 0").unwrap(), "0 0 1");
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp_text::<3>("0 0 0", "10 20 30", 0.5).unwrap(), "5 10 15");
        assert_eq!(lerp_text::<2>("0 0", "1 1", 2.0).unwrap(), "2 2");
    }
}
