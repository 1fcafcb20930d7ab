//! Runtime scorer selection.
//!
//! Scorers are picked by name when ranking, either a single [`ScoreKind`] or a
//! weighted combination of several. Names are resolved once into a
//! [`Scorer`] before any candidate is scored.

use crate::error::InvalidScorerError;
use crate::fuzz;
use crate::process::RankOptions;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Mapping from scorer name to a non-negative weight.
pub type WeightMap = BTreeMap<String, f64>;

/// One of the similarity functions in [`fuzz`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreKind {
    Levenshtein,
    Partial,
    Jaccard,
    TokenSort,
}

impl ScoreKind {
    pub const ALL: [ScoreKind; 4] = [
        ScoreKind::Levenshtein,
        ScoreKind::Partial,
        ScoreKind::Jaccard,
        ScoreKind::TokenSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScoreKind::Levenshtein => "levenshtein",
            ScoreKind::Partial => "partial",
            ScoreKind::Jaccard => "jaccard",
            ScoreKind::TokenSort => "token_sort",
        }
    }

    /// The function implementing this kind.
    pub fn scorer(self) -> fn(&[char], &[char]) -> f64 {
        match self {
            ScoreKind::Levenshtein => fuzz::levenshtein_ratio,
            ScoreKind::Partial => fuzz::partial_ratio,
            ScoreKind::Jaccard => fuzz::jaccard_similarity,
            ScoreKind::TokenSort => fuzz::token_sort_ratio,
        }
    }

    #[inline]
    pub fn score(self, s1: &[char], s2: &[char]) -> f64 {
        (self.scorer())(s1, s2)
    }

    /// Applies the alignment `mode`. Only the Levenshtein family is affected:
    /// a whole-string Levenshtein comparison becomes a partial one.
    pub fn with_mode(self, mode: Mode) -> ScoreKind {
        match (self, mode) {
            (ScoreKind::Levenshtein, Mode::Partial) => ScoreKind::Partial,
            (kind, _) => kind,
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreKind {
    type Err = InvalidScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "levenshtein" | "ratio" => Ok(ScoreKind::Levenshtein),
            "partial" | "partial_ratio" => Ok(ScoreKind::Partial),
            "jaccard" | "token_set" => Ok(ScoreKind::Jaccard),
            "token_sort" | "token_sort_ratio" => Ok(ScoreKind::TokenSort),
            _ => Err(InvalidScorerError::UnknownScorer(s.to_string())),
        }
    }
}

/// Whether a single Levenshtein scorer compares whole strings or the best
/// substring alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    Full,
    Partial,
}

impl FromStr for Mode {
    type Err = InvalidScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Mode::Full),
            "partial" => Ok(Mode::Partial),
            _ => Err(InvalidScorerError::UnknownMode(s.to_string())),
        }
    }
}

/// A resolved scoring policy.
#[derive(Clone, Debug, PartialEq)]
pub enum Scorer {
    Single(ScoreKind),
    /// Weighted average over the kinds with a positive weight. Weights are
    /// stored normalized to sum to 1.
    Weighted(Vec<(ScoreKind, f64)>),
}

impl Scorer {
    /// Resolves a scorer name, mode and weight map.
    ///
    /// A non-empty `weights` map always selects the weighted average and
    /// `name` is not consulted. Otherwise `name` must be a known
    /// [`ScoreKind`], adjusted by `mode`.
    ///
    /// # Example
    /// ```
    /// use fuzzrank::scorer::{Mode, ScoreKind, Scorer, WeightMap};
    ///
    /// let scorer = Scorer::resolve("levenshtein", Mode::Partial, &WeightMap::new()).unwrap();
    /// assert_eq!(Scorer::Single(ScoreKind::Partial), scorer);
    /// assert!(Scorer::resolve("bogus", Mode::Full, &WeightMap::new()).is_err());
    /// ```
    pub fn resolve(name: &str, mode: Mode, weights: &WeightMap) -> Result<Self, InvalidScorerError> {
        if weights.is_empty() {
            let kind: ScoreKind = name.parse()?;
            return Ok(Scorer::Single(kind.with_mode(mode)));
        }

        let mut kinds = Vec::with_capacity(weights.len());
        for (key, &weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(InvalidScorerError::InvalidWeight {
                    name: key.clone(),
                    weight,
                });
            }
            let kind: ScoreKind = key.parse()?;
            if weight > 0.0 {
                kinds.push((kind, weight));
            }
        }

        // scale by the largest weight first so the sum cannot overflow
        let largest = kinds.iter().map(|&(_, w)| w).fold(0.0, f64::max);
        if largest <= 0.0 {
            return Err(InvalidScorerError::ZeroWeights);
        }
        let total: f64 = kinds.iter().map(|&(_, w)| w / largest).sum();
        for (_, weight) in &mut kinds {
            *weight = *weight / largest / total;
        }
        Ok(Scorer::Weighted(kinds))
    }

    /// Resolves the scorer described by `options`.
    ///
    /// # Example
    /// ```
    /// use fuzzrank::process::RankOptions;
    /// use fuzzrank::scorer::{ScoreKind, Scorer};
    ///
    /// let options = RankOptions::default().scorer("jaccard");
    /// assert_eq!(Scorer::Single(ScoreKind::Jaccard), Scorer::from_options(&options).unwrap());
    /// ```
    pub fn from_options(options: &RankOptions) -> Result<Self, InvalidScorerError> {
        let mode: Mode = options.mode.parse()?;
        Scorer::resolve(&options.scorer, mode, &options.weights)
    }

    /// Scores a pair of already preprocessed sequences.
    pub fn score(&self, s1: &[char], s2: &[char]) -> f64 {
        match self {
            Scorer::Single(kind) => kind.score(s1, s2),
            Scorer::Weighted(kinds) => kinds
                .iter()
                .map(|&(kind, weight)| weight * kind.score(s1, s2))
                .sum::<f64>()
                .clamp(0.0, 1.0),
        }
    }
}
