//! Color extraction.
//!
//! A [`ColorReader`] accepts everything the vector reader does and, when
//! that fails, two more forms:
//!
//! - a color name from [`NAMED_COLORS`] (any case), giving full-intensity
//!   channels in the component type's color range
//! - `0x` followed by 1 to 16 hex digits, unpacked one byte per component
//!   starting at the last component, each byte scaled to the color range
//!
//! For four-component targets the alpha channel is set to the value given
//! with [`ColorReader::with_alpha`], or to the color maximum, whenever a
//! name or a hex value of at most six digits is read. Longer hex values
//! cover alpha themselves.

use crate::reader::{read_components, Components};
use crate::{TextReader, TextScalar};
use pvec_core::{scale_byte, Component};
use pvec_math::Vector;
use tracing::{debug, trace};

/// Color names and their full-intensity RGB channels.
pub const NAMED_COLORS: [(&str, [bool; 3]); 8] = [
    ("red", [true, false, false]),
    ("green", [false, true, false]),
    ("blue", [false, false, true]),
    ("black", [false, false, false]),
    ("white", [true, true, true]),
    ("yellow", [true, true, false]),
    ("cyan", [false, true, true]),
    ("magenta", [true, false, true]),
];

/// Hex digits that fit in the RGB part of a color.
const RGB_HEX_DIGITS: usize = 6;

/// Looks up a color name, ignoring ASCII case.
///
/// # Example
///
/// ```rust
/// use pvec_io::named_color;
/// use pvec_math::vec3;
///
/// assert_eq!(named_color::<u8>("Yellow"), Some(vec3(255, 255, 0)));
/// assert_eq!(named_color::<f32>("red"), Some(vec3(1.0, 0.0, 0.0)));
/// assert_eq!(named_color::<f32>("mauve"), None);
/// ```
pub fn named_color<T: Component>(name: &str) -> Option<Vector<T, 3>> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, channels)| {
            Vector::new(channels.map(|on| if on { T::color_max() } else { T::zero() }))
        })
}

/// Parses the digits after a `0x` prefix.
fn parse_hex_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || digits.len() > 16 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Stores the low byte of `value` in the last component, the next byte in
/// the one before, and so on.
fn unpack_bytes<T: Component>(mut value: u64, target: &mut [T]) {
    for component in target.iter_mut().rev() {
        *component = scale_byte((value & 0xFF) as u8);
        value >>= 8;
    }
}

/// A borrowed RGB or RGBA color.
#[derive(Debug)]
pub enum ColorTargetMut<'a, T> {
    /// Three channels.
    Rgb(&'a mut Vector<T, 3>),
    /// Three channels plus alpha.
    Rgba(&'a mut Vector<T, 4>),
}

impl<T> ColorTargetMut<'_, T> {
    /// Number of channels, alpha included.
    pub(crate) fn channels(&self) -> usize {
        match self {
            Self::Rgb(_) => 3,
            Self::Rgba(_) => 4,
        }
    }

    pub(crate) fn components_mut(&mut self) -> &mut [T] {
        match self {
            Self::Rgb(v) => v.as_mut_slice(),
            Self::Rgba(v) => v.as_mut_slice(),
        }
    }
}

/// Vector types a [`ColorReader`] can fill: three or four components.
pub trait ColorTarget {
    /// Component type.
    type Scalar: TextScalar;

    /// Borrows the color for reading.
    fn color_target(&mut self) -> ColorTargetMut<'_, Self::Scalar>;
}

impl<T: TextScalar> ColorTarget for Vector<T, 3> {
    type Scalar = T;

    #[inline]
    fn color_target(&mut self) -> ColorTargetMut<'_, T> {
        ColorTargetMut::Rgb(self)
    }
}

impl<T: TextScalar> ColorTarget for Vector<T, 4> {
    type Scalar = T;

    #[inline]
    fn color_target(&mut self) -> ColorTargetMut<'_, T> {
        ColorTargetMut::Rgba(self)
    }
}

/// How a color was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorSource {
    /// Plain components; the count stored.
    Components(usize),
    /// A zero keyword.
    Zeroed,
    /// A color name.
    Named,
    /// A hex literal.
    Hex,
    /// Unreadable; `fail` is set.
    Failed,
}

/// Reads a color into a borrowed RGB or RGBA vector.
///
/// # Example
///
/// ```rust
/// use pvec_io::{ColorReader, TextReader};
/// use pvec_math::{vec4, Vector};
///
/// let mut c = Vector::<u8, 4>::zero();
/// let mut reader = TextReader::new("0xFF0088");
/// reader.read_color(ColorReader::new(&mut c).with_alpha(128));
/// assert!(!reader.fail());
/// assert_eq!(c, vec4(0xFF, 0x00, 0x88, 128));
/// ```
#[derive(Debug)]
pub struct ColorReader<'t, T> {
    target: ColorTargetMut<'t, T>,
    alpha: Option<T>,
}

impl<'t, T: TextScalar> ColorReader<'t, T> {
    /// Wraps a three- or four-component color.
    pub fn new<C>(target: &'t mut C) -> Self
    where
        C: ColorTarget<Scalar = T>,
    {
        Self {
            target: target.color_target(),
            alpha: None,
        }
    }

    /// Reader for an RGB color.
    #[inline]
    pub fn rgb(target: &'t mut Vector<T, 3>) -> Self {
        Self::new(target)
    }

    /// Reader for an RGBA color; alpha defaults to the color maximum.
    #[inline]
    pub fn rgba(target: &'t mut Vector<T, 4>) -> Self {
        Self::new(target)
    }

    /// Alpha to store when the text does not carry one.
    ///
    /// Ignored for three-component targets.
    #[must_use]
    pub fn with_alpha(mut self, alpha: T) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Hands the RGB channels to `fill`; an RGBA target then gets its alpha.
    fn store_rgb(self, fill: impl FnOnce(&mut [T])) {
        match self.target {
            ColorTargetMut::Rgb(rgb) => fill(rgb.as_mut_slice()),
            ColorTargetMut::Rgba(rgba) => {
                fill(rgba.truncated_mut().as_mut_slice());
                rgba.set_a(self.alpha.unwrap_or_else(T::color_max));
            }
        }
    }

    pub(crate) fn read_from(mut self, reader: &mut TextReader<'_>) -> ColorSource {
        let start = reader.checkpoint();
        match read_components(reader, self.target.components_mut()) {
            Components::Read(count) => return ColorSource::Components(count),
            Components::Zeroed => return ColorSource::Zeroed,
            Components::Failed => {}
        }

        trace!("not numeric, trying color name and hex");
        reader.rollback(start);
        let Some(word) = reader.read_word() else {
            return ColorSource::Failed;
        };

        if let Some(channels) = named_color::<T>(word) {
            debug!(name = word, "named color");
            self.store_rgb(|rgb| rgb.copy_from_slice(channels.as_slice()));
            return ColorSource::Named;
        }

        let hex = word.strip_prefix("0x").or_else(|| word.strip_prefix("0X"));
        match hex.and_then(|digits| parse_hex_digits(digits).map(|v| (digits.len(), v))) {
            Some((digits, value)) if digits <= RGB_HEX_DIGITS => {
                debug!(word, "hex color");
                self.store_rgb(|rgb| unpack_bytes(value, rgb));
                ColorSource::Hex
            }
            Some((_, value)) => {
                debug!(word, "hex color with alpha");
                unpack_bytes(value, self.target.components_mut());
                ColorSource::Hex
            }
            None => {
                trace!(word, "not a color");
                reader.set_fail();
                ColorSource::Failed
            }
        }
    }
}

impl TextReader<'_> {
    /// Reads a color: components, a zero keyword, a name or a hex literal.
    ///
    /// Check [`fail`](Self::fail) afterwards.
    pub fn read_color<T: TextScalar>(&mut self, color: ColorReader<'_, T>) -> &mut Self {
        color.read_from(self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pvec_math::{vec3, vec4, Vec3, Vec4};

    fn read<C: ColorTarget>(text: &str, color: &mut C) -> bool {
        let mut r = TextReader::new(text);
        r.read_color(ColorReader::new(color));
        !r.fail()
    }

    #[test]
    fn test_named_red() {
        let mut c = Vec3::zero();
        assert!(read("red", &mut c));
        assert_eq!(c, vec3(1.0, 0.0, 0.0));

        let mut c = Vector::<u8, 3>::zero();
        assert!(read("RED", &mut c));
        assert_eq!(c, vec3(255, 0, 0));
    }

    #[test]
    fn test_named_sets_alpha() {
        let mut c = Vec4::zero();
        assert!(read("blue", &mut c));
        assert_eq!(c, vec4(0.0, 0.0, 1.0, 1.0));

        let mut c = Vector::<u8, 4>::zero();
        let mut r = TextReader::new("white");
        r.read_color(ColorReader::rgba(&mut c).with_alpha(7));
        assert_eq!(c, vec4(255, 255, 255, 7));
    }

    #[test]
    fn test_rgba_name_fills_rgb_view_then_alpha() {
        let mut c = vec4(1u8, 2, 3, 4);
        assert!(matches!(c.color_target(), ColorTargetMut::Rgba(_)));
        let mut r = TextReader::new("magenta");
        r.read_color(ColorReader::rgba(&mut c).with_alpha(9));
        assert_eq!(c.truncated().to_vector::<3>().unwrap(), vec3(255, 0, 255));
        assert_eq!(c.a(), 9);

        let mut c = vec3(1u8, 2, 3);
        assert_eq!(c.color_target().channels(), 3);
    }

    #[test]
    fn test_hex_bytes() {
        let mut c = Vector::<u8, 3>::zero();
        assert!(read("0xFF0088", &mut c));
        assert_eq!(c, vec3(0xFF, 0x00, 0x88));
    }

    #[test]
    fn test_hex_floats() {
        let mut c = Vec3::zero();
        assert!(read("0xFFAA22", &mut c));
        assert_relative_eq!(c.r(), 1.0);
        assert_relative_eq!(c.g(), 0.667, epsilon = 0.001);
        assert_relative_eq!(c.b(), 0.133, epsilon = 0.001);
    }

    #[test]
    fn test_short_hex_fills_from_blue() {
        let mut c = Vector::<u8, 3>::splat(9);
        assert!(read("0x80", &mut c));
        assert_eq!(c, vec3(0, 0, 0x80));
    }

    #[test]
    fn test_hex_rgba() {
        let mut c = Vector::<u8, 4>::zero();
        assert!(read("0x11223344", &mut c));
        assert_eq!(c, vec4(0x11, 0x22, 0x33, 0x44));

        let mut c = Vector::<u8, 4>::zero();
        assert!(read("0X112233", &mut c));
        assert_eq!(c, vec4(0x11, 0x22, 0x33, 0xFF));
    }

    #[test]
    fn test_long_hex_keeps_low_bytes() {
        let mut c = Vector::<u8, 3>::zero();
        assert!(read("0x0102030405", &mut c));
        assert_eq!(c, vec3(3, 4, 5));
    }

    #[test]
    fn test_bad_hex() {
        for text in ["0x", "0xGG", "0x+12", "0x11223344556677889"] {
            let mut c = Vector::<u8, 3>::zero();
            assert!(!read(text, &mut c), "{text}");
        }
    }

    #[test]
    fn test_components_still_work() {
        let mut c = Vec3::zero();
        assert!(read("0.5 0.25 1", &mut c));
        assert_eq!(c, vec3(0.5, 0.25, 1.0));

        let mut c = vec4(1.0f32, 1.0, 1.0, 1.0);
        assert!(read("zero", &mut c));
        assert_eq!(c, Vec4::zero());
    }

    #[test]
    fn test_unknown_name_fails() {
        let mut c = vec3(0.1f32, 0.2, 0.3);
        let mut r = TextReader::new("marsvin");
        r.read_color(ColorReader::new(&mut c));
        assert!(r.fail());
        assert_eq!(c, vec3(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_source_reported() {
        let mut c = Vec3::zero();
        let mut r = TextReader::new("cyan");
        assert_eq!(ColorReader::new(&mut c).read_from(&mut r), ColorSource::Named);

        let mut r = TextReader::new("1 2");
        assert_eq!(
            ColorReader::new(&mut c).read_from(&mut r),
            ColorSource::Components(2)
        );
    }
}
