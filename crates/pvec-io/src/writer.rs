//! Vector output.
//!
//! Decimal mode writes the components separated by single spaces, using
//! each component's `Display` form. Non-finite floats come out as `NaN`,
//! `inf` and `-inf`, which the readers accept. Hex mode writes `0x` followed by two
//! lowercase hex digits per component, the component converted to a byte
//! in its color range, starting with the *last* component.
//!
//! Hex output lists components in the opposite order from the hex color
//! reader, which puts the last pair of digits in the last component. Text
//! written in hex mode therefore reads back with the components reversed.

use crate::TextScalar;
use pvec_core::{to_byte, Error, Result};
use pvec_math::ComponentSlice;
use std::fmt;

/// Number base for [`TextWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Space-separated decimal components.
    #[default]
    Decimal,
    /// `0x` and two hex digits per component, last component first.
    Hex,
}

/// Writes vectors to any [`fmt::Write`] sink, tracking failure.
///
/// # Example
///
/// ```rust
/// use pvec_io::{TextWriter, WriteMode};
/// use pvec_math::vec3;
///
/// let mut w = TextWriter::new(String::new());
/// w.write_vector(&vec3(3.0f32, 2.0, 1.5));
/// w.write_str(" / ").set_mode(WriteMode::Hex);
/// w.write_vector(&vec3(255u8, 0, 136));
/// assert_eq!(w.finish().unwrap(), "3 2 1.5 / 0x8800ff");
/// ```
#[derive(Debug)]
pub struct TextWriter<W> {
    out: W,
    mode: WriteMode,
    failed: bool,
}

impl<W: fmt::Write> TextWriter<W> {
    /// Wraps a sink in decimal mode.
    pub fn new(out: W) -> Self {
        Self {
            out,
            mode: WriteMode::Decimal,
            failed: false,
        }
    }

    /// Builder form of [`set_mode`](Self::set_mode).
    #[must_use]
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches the mode for subsequent writes.
    pub fn set_mode(&mut self, mode: WriteMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// A write to the sink failed.
    #[inline]
    pub fn fail(&self) -> bool {
        self.failed
    }

    /// The sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns the sink, ignoring failure.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns the sink, or [`Error::Format`] if any write failed.
    pub fn finish(self) -> Result<W> {
        if self.failed {
            return Err(Error::Format(fmt::Error));
        }
        Ok(self.out)
    }

    /// Writes literal text such as separators.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        if !self.failed && self.out.write_str(s).is_err() {
            self.failed = true;
        }
        self
    }

    /// Writes one vector or view in the current mode.
    ///
    /// Nothing is written once the writer has failed.
    pub fn write_vector<V>(&mut self, v: &V) -> &mut Self
    where
        V: ComponentSlice + ?Sized,
        V::Scalar: TextScalar,
    {
        if self.failed {
            return self;
        }
        let result = match self.mode {
            WriteMode::Decimal => write_decimal(&mut self.out, v.components()),
            WriteMode::Hex => write_hex(&mut self.out, v.components()),
        };
        if result.is_err() {
            self.failed = true;
        }
        self
    }
}

fn write_decimal<T: TextScalar>(out: &mut impl fmt::Write, components: &[T]) -> fmt::Result {
    let Some((first, rest)) = components.split_first() else {
        return Ok(());
    };
    write!(out, "{first}")?;
    for c in rest {
        write!(out, " {c}")?;
    }
    Ok(())
}

fn write_hex<T: TextScalar>(out: &mut impl fmt::Write, components: &[T]) -> fmt::Result {
    out.write_str("0x")?;
    for &c in components.iter().rev() {
        write!(out, "{:02x}", to_byte(c))?;
    }
    Ok(())
}

/// `Display` adapter for a vector in a given mode.
///
/// ```rust
/// use pvec_io::{display, WriteMode};
/// use pvec_math::vec2;
///
/// let v = vec2(1, -2);
/// assert_eq!(format!("[{}]", display(&v, WriteMode::Decimal)), "[1 -2]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VectorDisplay<'a, V: ?Sized> {
    vector: &'a V,
    mode: WriteMode,
}

/// Wraps `vector` for use with `format!` and friends.
pub fn display<V: ?Sized>(vector: &V, mode: WriteMode) -> VectorDisplay<'_, V> {
    VectorDisplay { vector, mode }
}

impl<V> fmt::Display for VectorDisplay<'_, V>
where
    V: ComponentSlice + ?Sized,
    V::Scalar: TextScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            WriteMode::Decimal => write_decimal(f, self.vector.components()),
            WriteMode::Hex => write_hex(f, self.vector.components()),
        }
    }
}

/// Decimal text of a vector: `"3 2 1.5"`.
pub fn format_vector<V>(v: &V) -> String
where
    V: ComponentSlice + ?Sized,
    V::Scalar: TextScalar,
{
    display(v, WriteMode::Decimal).to_string()
}

/// Hex text of a vector, last component first: `"0x8800ff"` for `(255, 0, 136)`.
pub fn format_hex<V>(v: &V) -> String
where
    V: ComponentSlice + ?Sized,
    V::Scalar: TextScalar,
{
    display(v, WriteMode::Hex).to_string()
}
