//! Conversion between UTF-8 text and code-point sequences.
//!
//! Every scorer in this crate works on `char`s, i.e. Unicode scalar values,
//! never on bytes or grapheme clusters.

use crate::error::EncodingError;
use std::fmt;
use std::ops::Deref;

/// Immutable sequence of Unicode scalar values decoded from one string.
///
/// Transformations such as [`normalize`](crate::utils::normalize) never modify
/// a sequence in place, they produce a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePoints {
    chars: Box<[char]>,
}

impl CodePoints {
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Deref for CodePoints {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl AsRef<[char]> for CodePoints {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for CodePoints {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<Vec<char>> for CodePoints {
    fn from(chars: Vec<char>) -> Self {
        CodePoints {
            chars: chars.into_boxed_slice(),
        }
    }
}

impl FromIterator<char> for CodePoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CodePoints {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CodePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

/// Decodes UTF-8 bytes into a [`CodePoints`] sequence.
///
/// Decoding is all or nothing: unexpected continuation bytes, truncated or
/// overlong sequences and encoded surrogates all fail with an
/// [`EncodingError`] instead of being replaced.
///
/// # Example
/// ```
/// use fuzzrank::codec::decode_utf8;
///
/// assert_eq!(4, decode_utf8("café".as_bytes()).unwrap().len());
/// assert!(decode_utf8(b"\xff\xfe").is_err());
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Result<CodePoints, EncodingError> {
    let s = std::str::from_utf8(bytes)?;
    Ok(CodePoints::from(s))
}

/// Encodes a code-point sequence back into a UTF-8 `String`.
pub fn encode_utf8(seq: &[char]) -> String {
    seq.iter().collect()
}
