//! Levenshtein distance
//!
//! The Levenshtein distance is the minimum number of insertions, deletions and
//! substitutions, each with a cost of 1, required to turn one sequence into
//! the other.
//!
//! The normalized similarity is `1 - distance / max(len1, len2)`, with two
//! empty sequences counting as identical.

use crate::details::common::remove_common_affix;
use crate::details::distance::{DistanceMetricUsize, NormalizedMetricUsize};
use std::cmp::{max, min};
use std::mem;

/// Wagner-Fischer dynamic programming over a single row of `len1 + 1` cells.
///
/// Callers pass the shorter sequence as `s1` to keep the row small.
fn levenshtein_wagner_fischer<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    let mut cache: Vec<usize> = (0..=s1.len()).collect();

    for ch2 in s2 {
        // `temp` holds the diagonal cell of the previous row
        let mut temp = cache[0];
        cache[0] += 1;

        for (i, ch1) in s1.iter().enumerate() {
            if ch1 != ch2 {
                temp = min(min(cache[i], temp), cache[i + 1]) + 1;
            }
            mem::swap(&mut cache[i + 1], &mut temp);
        }
    }

    cache[s1.len()]
}

fn uniform_levenshtein_distance<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    // common affix does not effect Levenshtein distance
    let (s1, s2) = remove_common_affix(s1, s2);

    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    if s1.len() <= s2.len() {
        levenshtein_wagner_fischer(s1, s2)
    } else {
        levenshtein_wagner_fischer(s2, s1)
    }
}

pub(crate) struct Levenshtein {}

impl DistanceMetricUsize for Levenshtein {
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        max(len1, len2)
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        uniform_levenshtein_distance(s1, s2)
    }
}

/// Calculates the Levenshtein distance.
///
/// # Example
/// ```
/// use fuzzrank::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
/// ```
pub fn distance<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    Levenshtein {}._distance(&s1, &s2)
}

/// Calculates the Levenshtein similarity, `max(len1, len2) - distance`.
pub fn similarity<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    Levenshtein {}._similarity(&s1, &s2)
}

/// Calculates the normalized Levenshtein distance in the range [0, 1].
pub fn normalized_distance<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    Levenshtein {}._normalized_distance(&s1, &s2)
}

/// Calculates the normalized Levenshtein similarity in the range [0, 1].
///
/// # Example
/// ```
/// use fuzzrank::distance::levenshtein;
///
/// let sim = levenshtein::normalized_similarity("aaaa".chars(), "aaab".chars());
/// assert!((sim - 0.75).abs() < 1e-9);
/// ```
pub fn normalized_similarity<Iter1, Iter2, Elem1, Elem2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator<Item = Elem1>,
    Iter2: IntoIterator<Item = Elem2>,
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    let s1: Vec<Elem1> = s1.into_iter().collect();
    let s2: Vec<Elem2> = s2.into_iter().collect();
    Levenshtein {}._normalized_similarity(&s1, &s2)
}

/// Slice based entry point used by the scorers, avoids collecting.
pub(crate) fn normalized_similarity_slices<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> f64
where
    Elem1: PartialEq<Elem2>,
    Elem2: PartialEq<Elem1>,
{
    Levenshtein {}._normalized_similarity(s1, s2)
}

/// `One x Many` comparisons using the Levenshtein distance
///
/// A convenience wrapper: the first sequence is collected once and compared
/// against every sequence passed to the comparison methods. No per-query
/// state is precomputed.
///
/// # Example
/// ```
/// use fuzzrank::distance::levenshtein;
///
/// let scorer = levenshtein::BatchComparator::new("kitten".chars());
/// assert_eq!(3, scorer.distance("sitting".chars()));
/// assert_eq!(0, scorer.distance("kitten".chars()));
/// ```
pub struct BatchComparator<Elem1> {
    s1: Vec<Elem1>,
}

impl<Elem1> BatchComparator<Elem1> {
    pub fn new<Iter1>(s1: Iter1) -> Self
    where
        Iter1: IntoIterator<Item = Elem1>,
    {
        BatchComparator {
            s1: s1.into_iter().collect(),
        }
    }

    pub fn distance<Iter2, Elem2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator<Item = Elem2>,
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let s2: Vec<Elem2> = s2.into_iter().collect();
        Levenshtein {}._distance(&self.s1, &s2)
    }

    pub fn similarity<Iter2, Elem2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator<Item = Elem2>,
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let s2: Vec<Elem2> = s2.into_iter().collect();
        Levenshtein {}._similarity(&self.s1, &s2)
    }

    pub fn normalized_distance<Iter2, Elem2>(&self, s2: Iter2) -> f64
    where
        Iter2: IntoIterator<Item = Elem2>,
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let s2: Vec<Elem2> = s2.into_iter().collect();
        Levenshtein {}._normalized_distance(&self.s1, &s2)
    }

    pub fn normalized_similarity<Iter2, Elem2>(&self, s2: Iter2) -> f64
    where
        Iter2: IntoIterator<Item = Elem2>,
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let s2: Vec<Elem2> = s2.into_iter().collect();
        Levenshtein {}._normalized_similarity(&self.s1, &s2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static EMPTY: &str = "";
    static TEST: &str = "aaaa";
    static NO_SUFFIX: &str = "aaa";
    static NO_SUFFIX2: &str = "aaab";
    static SWAPPED1: &str = "abaa";
    static SWAPPED2: &str = "baaa";
    static REPLACE_ALL: &str = "bbbb";

    macro_rules! assert_delta {
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{:?} != {:?}", $x, $y);
            }
        };
    }

    fn _test_distance_ascii(s1: &str, s2: &str) -> usize {
        let res1 = distance(s1.chars(), s2.chars());
        let res2 = distance(s2.chars(), s1.chars());
        let res3 = BatchComparator::new(s1.chars()).distance(s2.chars());
        let res4 = BatchComparator::new(s2.chars()).distance(s1.chars());
        let res5 = distance(s1.bytes(), s2.bytes());

        assert_eq!(res1, res2);
        assert_eq!(res1, res3);
        assert_eq!(res1, res4);
        assert_eq!(res1, res5);
        res1
    }

    fn _test_normalized_similarity_ascii(s1: &str, s2: &str) -> f64 {
        let res1 = normalized_similarity(s1.chars(), s2.chars());
        let res2 = normalized_similarity(s2.chars(), s1.chars());
        let res3 = BatchComparator::new(s1.chars()).normalized_similarity(s2.chars());
        let res4 = BatchComparator::new(s2.chars()).normalized_similarity(s1.chars());

        assert_delta!(res1, res2, 0.0001);
        assert_delta!(res1, res3, 0.0001);
        assert_delta!(res1, res4, 0.0001);
        res1
    }

    /// levenshtein calculates empty sequence
    #[test]
    fn levenshtein_empty() {
        assert_eq!(0, _test_distance_ascii(EMPTY, EMPTY));
        assert_eq!(4, _test_distance_ascii(TEST, EMPTY));
        assert_eq!(4, _test_distance_ascii(EMPTY, TEST));
        assert_delta!(1.0, _test_normalized_similarity_ascii(EMPTY, EMPTY), 0.0001);
        assert_delta!(0.0, _test_normalized_similarity_ascii(TEST, EMPTY), 0.0001);
    }

    /// levenshtein calculates correct distances
    #[test]
    fn levenshtein_simple() {
        assert_eq!(0, _test_distance_ascii(TEST, TEST));
        assert_eq!(1, _test_distance_ascii(TEST, NO_SUFFIX));
        assert_eq!(1, _test_distance_ascii(TEST, NO_SUFFIX2));
        assert_eq!(2, _test_distance_ascii(SWAPPED1, SWAPPED2));
        assert_eq!(4, _test_distance_ascii(TEST, REPLACE_ALL));
        assert_eq!(3, _test_distance_ascii("kitten", "sitting"));
        assert_eq!(3, _test_distance_ascii("sunday", "saturday"));

        assert_delta!(1.0, _test_normalized_similarity_ascii(TEST, TEST), 0.0001);
        assert_delta!(0.75, _test_normalized_similarity_ascii(TEST, NO_SUFFIX), 0.0001);
        assert_delta!(0.75, _test_normalized_similarity_ascii(TEST, NO_SUFFIX2), 0.0001);
        assert_delta!(0.5, _test_normalized_similarity_ascii(SWAPPED1, SWAPPED2), 0.0001);
        assert_delta!(0.0, _test_normalized_similarity_ascii(TEST, REPLACE_ALL), 0.0001);
    }

    #[test]
    fn levenshtein_unicode() {
        assert_eq!(1, distance("café".chars(), "cafe".chars()));
        assert_eq!(1, distance("東京都".chars(), "京都".chars()));
        assert_delta!(
            0.5,
            normalized_similarity("𝄞𝄞".chars(), "𝄞x".chars()),
            0.0001
        );
    }

    #[test]
    fn similarity_complements_distance() {
        assert_eq!(4, similarity("kitten".chars(), "sitting".chars()));
        assert_delta!(
            3.0 / 7.0,
            normalized_distance("kitten".chars(), "sitting".chars()),
            0.0001
        );
    }

    #[test]
    fn levenshtein_long_sequences() {
        let s1 = "ab".repeat(200);
        let s2 = "ba".repeat(200);
        assert_eq!(2, _test_distance_ascii(&s1, &s2));
    }
}
