//! Color command.
//!
//! Parses color text into float (0-1) or byte (0-255) components and
//! prints the decimal and hex forms.

use anyhow::{bail, Context, Result};
use pvec_core::Component;
use pvec_io::{format_hex, format_vector, parse_color, parse_color_with_alpha, ColorTarget, TextScalar};
use pvec_math::Vector;
use tracing::debug;

use crate::ColorArgs;

/// Converts `--alpha` to a component, rejecting values the type cannot hold.
fn alpha_component<T: Component>(alpha: f64) -> Result<T> {
    let value = T::from_f64(alpha);
    if !T::IS_FLOAT && value.to_f64() != alpha {
        bail!(
            "Alpha {alpha} is not a whole number in 0..={}",
            T::color_max().to_f64()
        );
    }
    Ok(value)
}

/// Decimal and hex lines for one color.
fn color_lines<T, const N: usize>(text: &str, alpha: Option<f64>) -> Result<[String; 2]>
where
    T: TextScalar,
    Vector<T, N>: ColorTarget<Scalar = T>,
{
    let color: Vector<T, N> = match alpha {
        Some(a) => parse_color_with_alpha(text, alpha_component(a)?),
        None => parse_color(text),
    }
    .with_context(|| format!("Invalid color: {text:?}"))?;
    debug!(components = N, "parsed color");

    Ok([format_vector(&color), format_hex(&color)])
}

/// Run the color command.
pub fn run(args: ColorArgs) -> Result<()> {
    let rgba = args.rgba || args.alpha.is_some();
    let [decimal, hex] = match (args.bytes, rgba) {
        (false, false) => color_lines::<f32, 3>(&args.text, None)?,
        (false, true) => color_lines::<f32, 4>(&args.text, args.alpha)?,
        (true, false) => color_lines::<u8, 3>(&args.text, None)?,
        (true, true) => color_lines::<u8, 4>(&args.text, args.alpha)?,
    };
    let label = if rgba { "rgba" } else { "rgb" };
    println!("{label}: {decimal}");
    println!("hex: {hex}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_float() {
        let [decimal, hex] = color_lines::<f32, 3>("red", None).unwrap();
        assert_eq!(decimal, "1 0 0");
        assert_eq!(hex, "0x0000ff");
    }

    #[test]
    fn test_hex_bytes() {
        let [decimal, _] = color_lines::<u8, 3>("0xFF0088", None).unwrap();
        assert_eq!(decimal, "255 0 136");
    }

    #[test]
    fn test_alpha() {
        let [decimal, _] = color_lines::<f32, 4>("cyan", Some(0.5)).unwrap();
        assert_eq!(decimal, "0 1 1 0.5");

        let [decimal, _] = color_lines::<u8, 4>("0x102030", None).unwrap();
        assert_eq!(decimal, "16 32 48 255");
    }

    #[test]
    fn test_byte_alpha_must_be_whole() {
        let [decimal, _] = color_lines::<u8, 4>("red", Some(128.0)).unwrap();
        assert_eq!(decimal, "255 0 0 128");

        for alpha in [0.5, -1.0, 256.0] {
            let err = color_lines::<u8, 4>("red", Some(alpha)).unwrap_err();
            assert!(err.to_string().contains("0..=255"), "{alpha}: {err}");
        }
    }

    #[test]
    fn test_invalid() {
        let err = color_lines::<f32, 3>("marsvin", None).unwrap_err();
        assert!(err.to_string().contains("marsvin"));
    }
}
