//! Preprocessing applied to strings before they are scored.

use crate::codec::CodePoints;
use std::iter;
use unicode_casefold::{Locale, UnicodeCaseFold, Variant};

/// Simple case folding (the `C` and `S` entries of `CaseFolding.txt`). Every
/// code point maps to exactly one code point; folds that would expand are
/// not applied.
#[inline]
fn simple_fold(ch: char) -> char {
    iter::once(ch)
        .case_fold_with(Variant::Simple, Locale::NonTurkic)
        .next()
        .unwrap_or(ch)
}

/// Normalizes a code-point sequence.
///
/// With `process == false` the sequence is returned unchanged. Otherwise every
/// code point is case folded, each maximal run of non-alphanumeric code points
/// becomes a single space and leading / trailing spaces are trimmed.
///
/// # Example
/// ```
/// use fuzzrank::codec::CodePoints;
/// use fuzzrank::utils::normalize;
///
/// let seq = CodePoints::from("  New-York,  CITY! ");
/// assert_eq!("new york city", normalize(&seq, true).to_string());
/// assert_eq!("  New-York,  CITY! ", normalize(&seq, false).to_string());
/// ```
pub fn normalize(seq: &[char], process: bool) -> CodePoints {
    if !process {
        return CodePoints::from(seq.to_vec());
    }

    let mut out: Vec<char> = Vec::with_capacity(seq.len());
    let mut pending_space = false;
    for &ch in seq {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(simple_fold(ch));
        } else {
            pending_space = true;
        }
    }
    CodePoints::from(out)
}

/// Splits a sequence into tokens, discarding empty ones.
///
/// Tokens borrow from `seq`. On normalized input the only separator is a
/// single space; on raw input any run of whitespace separates tokens.
pub fn tokenize(seq: &[char]) -> Vec<&[char]> {
    seq.split(|ch| ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalizes a `&str` and returns the result as a `String`.
pub fn default_process(s: &str) -> String {
    let seq: Vec<char> = s.chars().collect();
    normalize(&seq, true).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identity_without_process() {
        let seq = chars("Hello,  World");
        assert_eq!(&seq[..], &*normalize(&seq, false));
    }

    #[test]
    fn case_fold_and_collapse() {
        assert_eq!("hello world", default_process("Hello,  World!!"));
        assert_eq!("a b c", default_process("--a__b..c--"));
        assert_eq!("", default_process(" !?. "));
        assert_eq!("", default_process(""));
    }

    #[test]
    fn unicode_alphanumerics_survive() {
        assert_eq!("straße 東京 123", default_process("STRAẞE / 東京 #123"));
        assert_eq!("éa", default_process("ÉA"));
    }

    #[test]
    fn fold_differs_from_lowercase() {
        assert_eq!('σ', simple_fold('ς'));
        assert_eq!('s', simple_fold('ſ'));
        assert_eq!('μ', simple_fold('µ'));
        // KELVIN SIGN
        assert_eq!('k', simple_fold('\u{212A}'));
        assert_eq!('ß', simple_fold('ẞ'));
        assert_eq!("οδοσ", default_process("ΟΔΟΣ"));
        assert_eq!(default_process("ΟΔΟΣ"), default_process("οδος"));
        assert_eq!(default_process("µs"), default_process("μS"));
    }

    #[test]
    fn expanding_fold_is_kept() {
        // U+0130 only has a full (expanding) fold
        assert_eq!("\u{130}x", default_process("\u{130}X"));
    }

    #[test]
    fn deterministic() {
        let seq = chars("Some  Input-Text");
        assert_eq!(normalize(&seq, true), normalize(&seq, true));
    }

    #[test]
    fn tokenize_normalized() {
        let seq = normalize(&chars("new  york, city"), true);
        let tokens: Vec<String> = tokenize(&seq).iter().map(|t| t.iter().collect()).collect();
        assert_eq!(vec!["new", "york", "city"], tokens);
    }

    #[test]
    fn tokenize_raw_whitespace() {
        let seq = chars("  a\tb \n c ");
        assert_eq!(3, tokenize(&seq).len());
        assert!(tokenize(&chars("   ")).is_empty());
        assert!(tokenize(&[] as &[char]).is_empty());
    }
}
