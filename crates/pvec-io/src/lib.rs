//! # pvec-io
//!
//! Text input and output for pvec vectors and colors.
//!
//! - [`TextReader`] - whitespace-token stream with sticky `eof` / `fail` flags
//! - [`TextReader::read_vector`] - numeric components or `null` / `zero`
//! - [`ColorReader`] - adds color names and `0x` hex literals
//! - [`TextWriter`] - decimal or hex output with a failure flag
//! - [`parse_vector`], [`parse_color`] - whole-string parsing with [`Result`]
//!
//! # Stream Style
//!
//! ```rust
//! use pvec_io::{ColorReader, TextReader};
//! use pvec_math::{vec3, Vector};
//!
//! let mut position = Vector::<f32, 3>::zero();
//! let mut tint = Vector::<u8, 3>::zero();
//!
//! let mut reader = TextReader::new("1 2.5 -3 0xFF0088");
//! reader
//!     .read_vector(&mut position)
//!     .read_color(ColorReader::new(&mut tint));
//! assert!(!reader.fail());
//! assert_eq!(position, vec3(1.0, 2.5, -3.0));
//! assert_eq!(tint, vec3(0xFF, 0x00, 0x88));
//! ```
//!
//! # Strict Style
//!
//! ```rust
//! use pvec_io::{format_vector, parse_vector};
//! use pvec_math::Vec3;
//!
//! let v: Vec3 = parse_vector("3 2 1.5")?;
//! assert_eq!(format_vector(&v), "3 2 1.5");
//! # Ok::<(), pvec_core::Error>(())
//! ```
//!
//! # Logging
//!
//! Keyword, name and hex decisions are reported through [`tracing`] at
//! `trace` and `debug` level.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod parse;
mod reader;
mod scalar;
mod stream;
mod writer;

pub use color::{named_color, ColorReader, ColorTarget, ColorTargetMut, NAMED_COLORS};
pub use parse::{parse_color, parse_color_with_alpha, parse_vector};
pub use reader::{is_zero_keyword, ZERO_KEYWORDS};
pub use scalar::TextScalar;
pub use stream::{Checkpoint, IoState, TextReader};
pub use writer::{display, format_hex, format_vector, TextWriter, VectorDisplay, WriteMode};

pub use pvec_core::{Error, Result};
