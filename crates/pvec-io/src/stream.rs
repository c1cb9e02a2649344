//! Text input stream with sticky state flags.
//!
//! [`TextReader`] reads whitespace-separated tokens from a string and keeps
//! two flags, `eof` and `fail`, the way formatted stream input does:
//!
//! - every extraction first checks that the stream is good, then skips
//!   whitespace; reaching the end while skipping sets both `eof` and `fail`
//! - a token that ends exactly at the end of input sets `eof`
//! - a token that cannot be converted sets `fail`
//!
//! Once `fail` is set every further extraction fails until the state is
//! cleared or restored with [`TextReader::rollback`].

use crate::TextScalar;

/// Stream state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoState {
    eof: bool,
    fail: bool,
}

impl IoState {
    /// No flags set.
    pub const GOOD: Self = Self { eof: false, fail: false };

    /// Only the end-of-input flag.
    pub const EOF: Self = Self { eof: true, fail: false };

    /// Neither flag is set.
    #[inline]
    pub fn is_good(self) -> bool {
        !self.eof && !self.fail
    }

    /// The end of input was reached.
    #[inline]
    pub fn eof(self) -> bool {
        self.eof
    }

    /// An extraction failed.
    #[inline]
    pub fn fail(self) -> bool {
        self.fail
    }
}

/// Saved stream position and state, restored with [`TextReader::rollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    state: IoState,
}

/// Whitespace-separated token reader over a string.
///
/// # Example
///
/// ```rust
/// use pvec_io::TextReader;
///
/// let mut reader = TextReader::new("1.5 2");
/// assert_eq!(reader.read_scalar::<f32>(), Some(1.5));
/// assert!(reader.good());
/// assert_eq!(reader.read_scalar::<i32>(), Some(2));
/// assert!(reader.eof() && !reader.fail());
/// ```
#[derive(Debug, Clone)]
pub struct TextReader<'a> {
    input: &'a str,
    pos: usize,
    state: IoState,
}

impl<'a> TextReader<'a> {
    /// Creates a reader positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            state: IoState::GOOD,
        }
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unread input.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Current flags.
    #[inline]
    pub fn state(&self) -> IoState {
        self.state
    }

    /// Neither `eof` nor `fail` is set.
    #[inline]
    pub fn good(&self) -> bool {
        self.state.is_good()
    }

    /// The end of input was reached.
    #[inline]
    pub fn eof(&self) -> bool {
        self.state.eof
    }

    /// An extraction failed.
    #[inline]
    pub fn fail(&self) -> bool {
        self.state.fail
    }

    /// `fail` is not set; the stream-as-bool test.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.state.fail
    }

    /// Replaces the flags.
    #[inline]
    pub fn clear(&mut self, state: IoState) {
        self.state = state;
    }

    /// Moves to byte offset `pos`.
    ///
    /// Sets `fail` and stays put if `pos` is past the end or not on a
    /// character boundary. Seeking does not clear `eof`.
    pub fn seek(&mut self, pos: usize) -> &mut Self {
        if self.input.is_char_boundary(pos) {
            self.pos = pos;
        } else {
            self.state.fail = true;
        }
        self
    }

    /// Sets the `fail` flag.
    #[inline]
    pub fn set_fail(&mut self) {
        self.state.fail = true;
    }

    /// Saves the position and flags.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            state: self.state,
        }
    }

    /// Restores a saved position and flags.
    #[inline]
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.state = checkpoint.state;
    }

    /// Skips whitespace without touching the flags.
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Pre-extraction check: fails unless good, then skips whitespace.
    ///
    /// Returns `true` when a token can be attempted.
    pub(crate) fn sentry(&mut self) -> bool {
        if !self.good() {
            self.state.fail = true;
            return false;
        }
        self.skip_whitespace();
        if self.pos == self.input.len() {
            self.state.eof = true;
            self.state.fail = true;
            return false;
        }
        true
    }

    fn advance(&mut self, len: usize) {
        self.pos += len;
        if self.pos == self.input.len() {
            self.state.eof = true;
        }
    }

    /// Extracts one number.
    ///
    /// On failure the `fail` flag is set and `None` returned. A token that
    /// lexes as a number but does not fit `T` is consumed before failing.
    pub fn read_scalar<T: TextScalar>(&mut self) -> Option<T> {
        if !self.sentry() {
            return None;
        }
        let rest = self.remaining();
        let len = T::token_len(rest);
        if len == 0 {
            self.state.fail = true;
            return None;
        }
        self.advance(len);
        let value = T::parse_token(&rest[..len]);
        if value.is_none() {
            self.state.fail = true;
        }
        value
    }

    /// Extracts the next run of non-whitespace characters.
    pub fn read_word(&mut self) -> Option<&'a str> {
        if !self.sentry() {
            return None;
        }
        let rest = self.remaining();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.advance(len);
        Some(&rest[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sequence() {
        let mut r = TextReader::new("  12\t-3.5\n");
        assert_eq!(r.read_scalar::<i32>(), Some(12));
        assert_eq!(r.read_scalar::<f64>(), Some(-3.5));
        // trailing whitespace is not end of input yet
        assert!(r.good());
        assert_eq!(r.read_scalar::<f64>(), None);
        assert!(r.eof() && r.fail());
    }

    #[test]
    fn test_token_at_end_sets_eof() {
        let mut r = TextReader::new("7");
        assert_eq!(r.read_scalar::<u8>(), Some(7));
        assert_eq!(r.state(), IoState::EOF);
        // sentry refuses once eof is set
        assert_eq!(r.read_scalar::<u8>(), None);
        assert!(r.fail());
    }

    #[test]
    fn test_bad_token_sets_fail() {
        let mut r = TextReader::new("abc 1");
        assert_eq!(r.read_scalar::<f32>(), None);
        assert!(r.fail() && !r.eof());
        assert_eq!(r.position(), 0);
        assert_eq!(r.read_scalar::<f32>(), None);
    }

    #[test]
    fn test_overflow_consumes_token() {
        let mut r = TextReader::new("99999 1");
        assert_eq!(r.read_scalar::<i16>(), None);
        assert!(r.fail());
        assert_eq!(r.remaining(), " 1");
    }

    #[test]
    fn test_checkpoint_rollback() {
        let mut r = TextReader::new("null 2");
        let cp = r.checkpoint();
        assert_eq!(r.read_scalar::<f32>(), None);
        r.rollback(cp);
        assert!(r.good());
        assert_eq!(r.read_word(), Some("null"));
        assert_eq!(r.read_scalar::<f32>(), Some(2.0));
    }

    #[test]
    fn test_read_word() {
        let mut r = TextReader::new("red\tgreen");
        assert_eq!(r.read_word(), Some("red"));
        assert_eq!(r.read_word(), Some("green"));
        assert!(r.eof());
        assert_eq!(r.read_word(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut r = TextReader::new("   ");
        assert_eq!(r.read_word(), None);
        assert!(r.eof() && r.fail());

        r.clear(IoState::GOOD);
        assert!(r.good());
    }

    #[test]
    fn test_seek() {
        let mut r = TextReader::new("1 2 3");
        assert_eq!(r.seek(4).read_scalar::<i32>(), Some(3));
        assert!(r.eof() && r.is_ok());

        r.clear(IoState::GOOD);
        assert_eq!(r.seek(2).read_scalar::<i32>(), Some(2));

        r.seek(99);
        assert!(!r.is_ok());
        assert_eq!(r.position(), 3);
    }
}
