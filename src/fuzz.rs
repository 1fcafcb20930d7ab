//! Similarity scorers over code-point sequences.
//!
//! Every scorer returns a ratio in `[0, 1]`, where `1.0` means identical under
//! that metric. None of them preprocess their input; run
//! [`normalize`](crate::utils::normalize) first when case and punctuation
//! should not matter.

use crate::distance::levenshtein::normalized_similarity_slices;
use crate::utils::tokenize;
use std::collections::BTreeSet;

/// Levenshtein ratio, `1 - distance / max(len1, len2)`.
///
/// # Example
/// ```
/// use fuzzrank::fuzz;
///
/// let s1: Vec<char> = "kitten".chars().collect();
/// let s2: Vec<char> = "sitting".chars().collect();
/// /// score is 0.5714
/// let score = fuzz::levenshtein_ratio(&s1, &s2);
/// assert!((score - 4.0 / 7.0).abs() < 1e-9);
/// ```
pub fn levenshtein_ratio(s1: &[char], s2: &[char]) -> f64 {
    normalized_similarity_slices(s1, s2)
}

/// Best alignment found by [`partial_alignment`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Alignment {
    pub score: f64,
    /// Offset of the shorter sequence relative to the start of the longer one.
    /// Negative when the window hangs off the left end.
    pub offset: isize,
}

/// Slides `needle` across `haystack` and keeps the first offset reaching the
/// best Levenshtein ratio. Windows overhanging either end are clipped to the
/// overlap. `needle` must not be empty or longer than `haystack`.
fn best_window(needle: &[char], haystack: &[char]) -> Alignment {
    let short = needle.len() as isize;
    let long = haystack.len() as isize;

    let mut best = Alignment {
        score: 0.0,
        offset: -(short - 1),
    };
    for offset in -(short - 1)..long {
        let start = offset.max(0) as usize;
        let end = (offset + short).min(long) as usize;
        let score = normalized_similarity_slices(needle, &haystack[start..end]);
        if score > best.score {
            best = Alignment { score, offset };
            if score >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Partial ratio together with the offset that produced it.
///
/// Ties between offsets resolve to the leftmost one. When both sequences have
/// the same length, both orientations are tried so that the result does not
/// depend on argument order; the `offset` then refers to whichever sequence
/// won as the sliding window.
pub fn partial_alignment(s1: &[char], s2: &[char]) -> Alignment {
    if s1.is_empty() || s2.is_empty() {
        let score = if s1.is_empty() && s2.is_empty() {
            1.0
        } else {
            0.0
        };
        return Alignment { score, offset: 0 };
    }

    if s1.len() < s2.len() {
        return best_window(s1, s2);
    }
    if s2.len() < s1.len() {
        return best_window(s2, s1);
    }

    let forward = best_window(s1, s2);
    if forward.score >= 1.0 {
        return forward;
    }
    let backward = best_window(s2, s1);
    if backward.score > forward.score {
        backward
    } else {
        forward
    }
}

/// Ratio of the best matching substring alignment.
///
/// The shorter sequence is slid across the longer one and the highest
/// Levenshtein ratio of any alignment is returned, so a sequence contained in
/// the other scores `1.0`.
///
/// # Example
/// ```
/// use fuzzrank::fuzz;
///
/// let s1: Vec<char> = "york".chars().collect();
/// let s2: Vec<char> = "new york city".chars().collect();
/// assert_eq!(1.0, fuzz::partial_ratio(&s1, &s2));
/// ```
pub fn partial_ratio(s1: &[char], s2: &[char]) -> f64 {
    partial_alignment(s1, s2).score
}

/// Jaccard similarity of the two token sets, `|A ∩ B| / |A ∪ B|`.
///
/// Duplicate tokens collapse and order is irrelevant. Two sequences without
/// any token count as identical.
///
/// # Example
/// ```
/// use fuzzrank::fuzz;
///
/// let s1: Vec<char> = "new york mets".chars().collect();
/// let s2: Vec<char> = "mets of new york new york".chars().collect();
/// assert_eq!(0.75, fuzz::jaccard_similarity(&s1, &s2));
/// ```
pub fn jaccard_similarity(s1: &[char], s2: &[char]) -> f64 {
    let set1: BTreeSet<&[char]> = tokenize(s1).into_iter().collect();
    let set2: BTreeSet<&[char]> = tokenize(s2).into_iter().collect();

    if set1.is_empty() && set2.is_empty() {
        return 1.0;
    }

    let intersection = set1.intersection(&set2).count();
    let union = set1.len() + set2.len() - intersection;
    intersection as f64 / union as f64
}

/// Tokens sorted by code point and rejoined with single spaces.
fn sorted_tokens(s: &[char]) -> Vec<char> {
    let mut tokens = tokenize(s);
    tokens.sort_unstable();
    tokens.join(&' ')
}

/// Levenshtein ratio after sorting the tokens of both sequences, which makes
/// the comparison insensitive to word order.
///
/// # Example
/// ```
/// use fuzzrank::fuzz;
///
/// let s1: Vec<char> = "new york".chars().collect();
/// let s2: Vec<char> = "york new".chars().collect();
/// assert_eq!(1.0, fuzz::token_sort_ratio(&s1, &s2));
/// ```
pub fn token_sort_ratio(s1: &[char], s2: &[char]) -> f64 {
    levenshtein_ratio(&sorted_tokens(s1), &sorted_tokens(s2))
}

#[cfg(test)]
mod tests {
    use super::*;

    static S1: &str = "new york mets";
    static S2: &str = "new YORK mets";
    static S3: &str = "the wonderful new york mets";
    static S4: &str = "new york mets vs atlanta braves";
    static S5: &str = "atlanta braves vs new york mets";
    // test silly corner cases
    static S8: &str = "{";
    static S9: &str = "{a";

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            if ($x - $y).abs() > 0.0001 {
                panic!("{:?} != {:?}", $x, $y);
            }
        };
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    type Scorer = fn(&[char], &[char]) -> f64;

    static SCORERS: [Scorer; 4] = [
        levenshtein_ratio,
        partial_ratio,
        jaccard_similarity,
        token_sort_ratio,
    ];

    static SAMPLES: [&str; 12] = [
        "",
        " ",
        "a",
        S1,
        S2,
        S3,
        S4,
        S5,
        S8,
        S9,
        "ab",
        "東京 tower",
    ];

    #[test]
    fn test_equal() {
        for scorer in SCORERS {
            for s in [S1, S3, S4, S8, S9, "test"] {
                assert_delta!(1.0, scorer(&chars(s), &chars(s)));
            }
        }
    }

    #[test]
    fn symmetric_and_in_range() {
        for scorer in SCORERS {
            for a in SAMPLES {
                for b in SAMPLES {
                    let ab = scorer(&chars(a), &chars(b));
                    let ba = scorer(&chars(b), &chars(a));
                    assert!((0.0..=1.0).contains(&ab), "{a:?} {b:?} -> {ab}");
                    assert_eq!(ab, ba, "{a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn two_empty_strings() {
        for scorer in SCORERS {
            assert_delta!(1.0, scorer(&chars(""), &chars("")));
        }
    }

    #[test]
    fn one_string_empty() {
        for scorer in [levenshtein_ratio, partial_ratio, token_sort_ratio] {
            assert_delta!(0.0, scorer(&chars("test"), &chars("")));
            assert_delta!(0.0, scorer(&chars(""), &chars("test")));
        }
        assert_delta!(0.0, jaccard_similarity(&chars("test"), &chars("")));
    }

    #[test]
    fn test_levenshtein_ratio() {
        assert_delta!(4.0 / 7.0, levenshtein_ratio(&chars("kitten"), &chars("sitting")));
        assert_delta!(0.0, levenshtein_ratio(&chars("abc"), &chars("xyz")));
        // case matters without normalization
        assert_delta!(9.0 / 13.0, levenshtein_ratio(&chars(S1), &chars(S2)));
    }

    #[test]
    fn test_partial_ratio() {
        assert_delta!(1.0, partial_ratio(&chars("york"), &chars("new york city")));
        assert_delta!(1.0, partial_ratio(&chars(S1), &chars(S3)));
        assert_delta!(1.0, partial_ratio(&chars("apple"), &chars("apple pie")));
        assert!(partial_ratio(&chars(S1), &chars(S3)) > levenshtein_ratio(&chars(S1), &chars(S3)));
    }

    #[test]
    fn partial_alignment_offsets() {
        let found = partial_alignment(&chars("york"), &chars("new york city"));
        assert_eq!(4, found.offset);

        // "ab" appears twice, leftmost wins
        let found = partial_alignment(&chars("ab"), &chars("xabyab"));
        assert_eq!(1, found.offset);
        assert_delta!(1.0, found.score);

        // overhanging window: only "c" overlaps at offset -2
        let found = partial_alignment(&chars("abc"), &chars("cxx"));
        assert_eq!(-2, found.offset);
        assert_delta!(1.0 / 3.0, found.score);
    }

    #[test]
    fn partial_ratio_equal_length() {
        assert_delta!(1.0, partial_ratio(&chars("abcd"), &chars("abcd")));
        // best window is one deletion away
        assert_delta!(0.75, partial_ratio(&chars("abcd"), &chars("bcdx")));
    }

    #[test]
    fn test_jaccard_similarity() {
        assert_delta!(0.0, jaccard_similarity(&chars("abc"), &chars("xyz")));
        assert_delta!(1.0, jaccard_similarity(&chars(S4), &chars(S5)));
        assert_delta!(0.5, jaccard_similarity(&chars("a b"), &chars("b c d a")));
        assert_delta!(1.0, jaccard_similarity(&chars("a a a"), &chars("a")));
        assert_delta!(1.0, jaccard_similarity(&chars("  "), &chars("")));
    }

    #[test]
    fn test_token_sort_ratio() {
        assert_delta!(1.0, token_sort_ratio(&chars("new york"), &chars("york new")));
        assert_delta!(1.0, token_sort_ratio(&chars(S4), &chars(S5)));
        assert_delta!(
            1.0,
            token_sort_ratio(&chars("  york   new "), &chars("new york"))
        );
        assert!(token_sort_ratio(&chars(S4), &chars(S5)) > levenshtein_ratio(&chars(S4), &chars(S5)));
    }

    #[test]
    fn sorted_tokens_by_code_point() {
        assert_eq!(chars("B a b"), sorted_tokens(&chars("b a B")));
        assert!(sorted_tokens(&chars("   ")).is_empty());
    }
}
