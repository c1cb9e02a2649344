//! Whole-string parsing with [`Result`] errors.
//!
//! Unlike the stream readers these require every component to be present
//! and nothing but whitespace after the value.

use crate::color::{ColorReader, ColorSource, ColorTarget};
use crate::reader::{read_components, Components};
use crate::{TextReader, TextScalar};
use pvec_core::{Error, Result};
use pvec_math::Vector;

fn ensure_consumed(reader: &mut TextReader<'_>) -> Result<()> {
    reader.skip_whitespace();
    match reader.remaining() {
        "" => Ok(()),
        rest => Err(Error::trailing_input(rest)),
    }
}

/// Parses exactly `N` components, or a zero keyword.
///
/// # Example
///
/// ```rust
/// use pvec_io::parse_vector;
/// use pvec_math::vec3;
///
/// assert_eq!(parse_vector::<i32, 3>(" 1 2 3 ").unwrap(), vec3(1, 2, 3));
/// assert_eq!(parse_vector::<f32, 3>("Zero").unwrap(), vec3(0.0, 0.0, 0.0));
/// assert!(parse_vector::<f32, 3>("1 2").is_err());
/// assert!(parse_vector::<f32, 2>("1 2 3").is_err());
/// ```
pub fn parse_vector<T: TextScalar, const N: usize>(text: &str) -> Result<Vector<T, N>> {
    let mut reader = TextReader::new(text);
    let mut v = Vector::<T, N>::zero();
    match read_components(&mut reader, v.as_mut_slice()) {
        Components::Failed => return Err(Error::invalid_vector(text.trim(), N)),
        Components::Read(found) if found < N => return Err(Error::missing_components(N, found)),
        Components::Read(_) | Components::Zeroed => {}
    }
    ensure_consumed(&mut reader)?;
    Ok(v)
}

/// Parses a full color: all components, a zero keyword, a name or a hex
/// literal. Names and short hex literals get full alpha.
///
/// # Example
///
/// ```rust
/// use pvec_io::parse_color;
/// use pvec_math::{vec3, vec4, Vector};
///
/// let c: Vector<u8, 3> = parse_color("0xFF0088").unwrap();
/// assert_eq!(c, vec3(0xFF, 0x00, 0x88));
/// let c: Vector<f32, 4> = parse_color("green").unwrap();
/// assert_eq!(c, vec4(0.0, 1.0, 0.0, 1.0));
/// ```
pub fn parse_color<C>(text: &str) -> Result<C>
where
    C: ColorTarget + Default,
{
    parse_color_impl(text, None)
}

/// [`parse_color`] with the alpha used when the text carries none.
///
/// ```rust
/// use pvec_io::parse_color_with_alpha;
/// use pvec_math::{vec4, Vector};
///
/// let c: Vector<u8, 4> = parse_color_with_alpha("0x102030", 64).unwrap();
/// assert_eq!(c, vec4(0x10, 0x20, 0x30, 64));
/// ```
pub fn parse_color_with_alpha<C>(text: &str, alpha: C::Scalar) -> Result<C>
where
    C: ColorTarget + Default,
{
    parse_color_impl(text, Some(alpha))
}

fn parse_color_impl<C>(text: &str, alpha: Option<C::Scalar>) -> Result<C>
where
    C: ColorTarget + Default,
{
    let mut color = C::default();
    let expected = color.color_target().channels();
    let mut reader = TextReader::new(text);
    let mut color_reader = ColorReader::new(&mut color);
    if let Some(alpha) = alpha {
        color_reader = color_reader.with_alpha(alpha);
    }
    match color_reader.read_from(&mut reader) {
        ColorSource::Failed => return Err(Error::invalid_color(text.trim())),
        ColorSource::Components(found) if found < expected => {
            return Err(Error::missing_components(expected, found));
        }
        _ => {}
    }
    ensure_consumed(&mut reader)?;
    Ok(color)
}
