//! Vector extraction.
//!
//! Reading a vector of `N` components:
//!
//! 1. The first component must parse as a number. If it does not, the
//!    stream is rewound and one word is read instead; the keywords `null`
//!    and `zero` (any case) set every component to zero, anything else
//!    fails.
//! 2. Further components are read while the stream stays good. Running
//!    into the end of input after at least one component is not an error;
//!    the components not reached keep their previous values.
//! 3. A malformed later component sets `fail`. Components already stored
//!    are not restored.

use crate::{TextReader, TextScalar};
use pvec_math::ComponentSliceMut;
use tracing::trace;

/// Words accepted in place of numbers, meaning all zeros.
pub const ZERO_KEYWORDS: [&str; 2] = ["null", "zero"];

/// `true` if `word` is one of [`ZERO_KEYWORDS`], ignoring ASCII case.
pub fn is_zero_keyword(word: &str) -> bool {
    ZERO_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// What a component read produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Components {
    /// This many leading components were stored.
    Read(usize),
    /// A zero keyword filled the target.
    Zeroed,
    /// Nothing usable was read; `fail` is set.
    Failed,
}

pub(crate) fn read_components<T: TextScalar>(
    reader: &mut TextReader<'_>,
    target: &mut [T],
) -> Components {
    if target.is_empty() {
        return Components::Read(0);
    }
    let start = reader.checkpoint();
    if !reader.sentry() {
        return Components::Failed;
    }

    let Some(first) = reader.read_scalar::<T>() else {
        reader.rollback(start);
        return match reader.read_word() {
            Some(word) if is_zero_keyword(word) => {
                trace!(word, "zero keyword");
                target.fill(T::zero());
                Components::Zeroed
            }
            Some(word) => {
                trace!(word, "not a number or keyword");
                reader.set_fail();
                Components::Failed
            }
            None => Components::Failed,
        };
    };

    target[0] = first;
    let mut count = 1;
    while count < target.len() && reader.good() {
        match reader.read_scalar::<T>() {
            Some(value) => {
                target[count] = value;
                count += 1;
            }
            None => {
                trace!(component = count, "malformed component");
                return Components::Failed;
            }
        }
    }
    if count < target.len() {
        trace!(read = count, expected = target.len(), "input ended early");
    }
    Components::Read(count)
}

impl TextReader<'_> {
    /// Reads the components of `target` from the stream.
    ///
    /// Works for whole vectors and for views such as
    /// [`Vector::truncated_mut`](pvec_math::Vector::truncated_mut). Check
    /// [`fail`](Self::fail) afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pvec_io::TextReader;
    /// use pvec_math::{vec2, Vec2};
    ///
    /// let mut v = Vec2::zero();
    /// let mut reader = TextReader::new("123 -23.3");
    /// reader.read_vector(&mut v);
    /// assert!(!reader.fail());
    /// assert_eq!(v, vec2(123.0, -23.3));
    /// ```
    pub fn read_vector<V>(&mut self, target: &mut V) -> &mut Self
    where
        V: ComponentSliceMut + ?Sized,
        V::Scalar: TextScalar,
    {
        read_components(self, target.components_mut());
        self
    }
}
