//! Lexing and parsing of single numeric tokens.
//!
//! Each component type knows how long the numeric token at the start of its
//! input is and how to turn that token into a value. The reader uses the
//! length to advance the stream even when the conversion itself fails
//! (out-of-range integers), mirroring formatted stream extraction.
//!
//! Token grammar:
//!
//! ```text
//! float   = [+-] digits [ "." digits ] [ (e|E) [+-] digits ]
//!         | [+-] "." digits [ (e|E) [+-] digits ]
//!         | [+-] ( "infinity" | "inf" | "nan" )
//! integer = [+-] digits
//! ```
//!
//! The non-finite words match in any case, so `NaN` and `-inf` written by
//! the decimal writer read back. An exponent marker is only consumed when
//! digits follow it. 8-bit types
//! are read as a full-width integer and narrowed with wrapping.

use half::f16;
use pvec_core::Component;
use std::fmt::Display;

/// A component type that can be read from and written to text.
pub trait TextScalar: Component + Display {
    /// Length in bytes of the numeric token at the start of `input`,
    /// or 0 if `input` does not start with one.
    fn token_len(input: &str) -> usize;

    /// Converts a token delimited by [`token_len`](Self::token_len).
    ///
    /// Returns `None` when the value does not fit the type.
    fn parse_token(token: &str) -> Option<Self>;
}

fn sign_len(b: &[u8]) -> usize {
    usize::from(matches!(b.first(), Some(b'+' | b'-')))
}

fn digits_len(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Length of `[+-]digits`.
pub(crate) fn integer_token_len(input: &str) -> usize {
    let b = input.as_bytes();
    let sign = sign_len(b);
    match digits_len(&b[sign..]) {
        0 => 0,
        digits => sign + digits,
    }
}

/// Non-finite float spellings, longest first.
const NON_FINITE_WORDS: [&str; 3] = ["infinity", "inf", "nan"];

/// Length of `[+-]` followed by one of [`NON_FINITE_WORDS`].
fn non_finite_len(b: &[u8]) -> usize {
    let sign = sign_len(b);
    let rest = &b[sign..];
    NON_FINITE_WORDS
        .iter()
        .find(|word| {
            rest.get(..word.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes()))
        })
        .map_or(0, |word| sign + word.len())
}

/// Length of a decimal floating-point literal.
pub(crate) fn float_token_len(input: &str) -> usize {
    let b = input.as_bytes();
    let mut i = sign_len(b);
    let int_digits = digits_len(&b[i..]);
    i += int_digits;

    let mut mantissa_digits = int_digits;
    if b.get(i) == Some(&b'.') {
        let frac_digits = digits_len(&b[i + 1..]);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return non_finite_len(b);
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        j += sign_len(&b[j..]);
        let exp_digits = digits_len(&b[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

macro_rules! impl_float_text {
    ($($t:ty),*) => {
        $(
            impl TextScalar for $t {
                #[inline]
                fn token_len(input: &str) -> usize {
                    float_token_len(input)
                }

                #[inline]
                fn parse_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }
            }
        )*
    };
}

impl_float_text!(f32, f64);

impl TextScalar for f16 {
    #[inline]
    fn token_len(input: &str) -> usize {
        float_token_len(input)
    }

    #[inline]
    fn parse_token(token: &str) -> Option<Self> {
        token.parse::<f32>().ok().map(f16::from_f32)
    }
}

macro_rules! impl_int_text {
    ($($t:ty),*) => {
        $(
            impl TextScalar for $t {
                #[inline]
                fn token_len(input: &str) -> usize {
                    integer_token_len(input)
                }

                #[inline]
                fn parse_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }
            }
        )*
    };
}

impl_int_text!(u16, u32, u64, i16, i32, i64);

// Bytes are numbers here, not characters.
macro_rules! impl_byte_text {
    ($($t:ty),*) => {
        $(
            impl TextScalar for $t {
                #[inline]
                fn token_len(input: &str) -> usize {
                    integer_token_len(input)
                }

                #[inline]
                fn parse_token(token: &str) -> Option<Self> {
                    token.parse::<i64>().ok().map(|v| v as $t)
                }
            }
        )*
    };
}

impl_byte_text!(u8, i8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_token_len() {
        assert_eq!(float_token_len("123 -23.3"), 3);
        assert_eq!(float_token_len("-23.3"), 5);
        assert_eq!(float_token_len(".5x"), 2);
        assert_eq!(float_token_len("5."), 2);
        assert_eq!(float_token_len("1e5"), 3);
        assert_eq!(float_token_len("1E-5,"), 4);
        assert_eq!(float_token_len("2ex"), 1);
        assert_eq!(float_token_len("2e+"), 1);
    }

    #[test]
    fn test_float_token_rejects() {
        assert_eq!(float_token_len(""), 0);
        assert_eq!(float_token_len("-"), 0);
        assert_eq!(float_token_len("."), 0);
        assert_eq!(float_token_len("+.e5"), 0);
        assert_eq!(float_token_len("null"), 0);
        assert_eq!(float_token_len("0xFF"), 1);
    }

    #[test]
    fn test_non_finite_tokens() {
        assert_eq!(float_token_len("NaN 1"), 3);
        assert_eq!(float_token_len("-inf"), 4);
        assert_eq!(float_token_len("+Infinity"), 9);
        assert_eq!(float_token_len("INFx"), 3);
        assert_eq!(float_token_len("in"), 0);
        assert_eq!(integer_token_len("nan"), 0);

        assert!(f32::parse_token("NaN").is_some_and(f32::is_nan));
        assert_eq!(f64::parse_token("-inf"), Some(f64::NEG_INFINITY));
        assert_eq!(f16::parse_token("Infinity"), Some(f16::INFINITY));
    }

    #[test]
    fn test_integer_token_len() {
        assert_eq!(integer_token_len("42 7"), 2);
        assert_eq!(integer_token_len("-7"), 2);
        assert_eq!(integer_token_len("+"), 0);
        assert_eq!(integer_token_len("3.5"), 1);
        assert_eq!(integer_token_len("abc"), 0);
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(f32::parse_token("-23.3"), Some(-23.3));
        assert_eq!(f64::parse_token("5."), Some(5.0));
        assert_eq!(i32::parse_token("+12"), Some(12));
        assert_eq!(u16::parse_token("70000"), None);
        assert_eq!(u32::parse_token("-1"), None);
        assert_eq!(f16::parse_token("0.5"), Some(f16::from_f32(0.5)));
    }

    #[test]
    fn test_bytes_are_numeric() {
        assert_eq!(u8::parse_token("200"), Some(200));
        assert_eq!(u8::parse_token("256"), Some(0));
        assert_eq!(i8::parse_token("-1"), Some(-1));
        assert_eq!(u8::parse_token("-1"), Some(255));
    }
}
