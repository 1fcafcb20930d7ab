//! Ranking candidates against a query.
//!
//! [`rank`] scores every candidate with the configured scorer, drops the ones
//! below the threshold and returns the rest ordered by score. [`batch_match`]
//! does the same for several queries sharing one candidate list.
//!
//! All settings live in [`RankOptions`]. A [`Ranker`] resolves them once and
//! can then be reused for any number of queries.

use crate::codec::CodePoints;
use crate::error::InvalidScorerError;
use crate::scorer::{Scorer, WeightMap};
use crate::utils::normalize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, debug_span};

/// Settings for one ranking call.
///
/// | field       | default         |
/// |-------------|-----------------|
/// | `scorer`    | `"levenshtein"` |
/// | `mode`      | `"full"`        |
/// | `process`   | `true`          |
/// | `threshold` | `0.0`           |
/// | `top_n`     | `None` (all)    |
/// | `weights`   | empty           |
///
/// # Example
/// ```
/// use fuzzrank::process::RankOptions;
///
/// let options = RankOptions::default()
///     .scorer("token_sort")
///     .threshold(0.5)
///     .top_n(3);
/// assert_eq!(Some(3), options.top_n);
/// ```
#[must_use]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankOptions {
    /// Scorer used when `weights` is empty.
    pub scorer: String,
    /// `"full"` or `"partial"`.
    pub mode: String,
    /// Normalize query and candidates before scoring.
    pub process: bool,
    /// Inclusive lower bound on the score.
    pub threshold: f64,
    /// Maximum number of results, `None` for all.
    pub top_n: Option<usize>,
    /// Weighted combination of scorers, overrides `scorer` when not empty.
    pub weights: WeightMap,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            scorer: "levenshtein".to_string(),
            mode: "full".to_string(),
            process: true,
            threshold: 0.0,
            top_n: None,
            weights: WeightMap::new(),
        }
    }
}

impl RankOptions {
    pub fn scorer(mut self, scorer: impl Into<String>) -> Self {
        self.scorer = scorer.into();
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn process(mut self, process: bool) -> Self {
        self.process = process;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Sets the weight of a single scorer, switching to a weighted combination.
    pub fn weight(mut self, scorer: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(scorer.into(), weight);
        self
    }

    pub fn weights(mut self, weights: WeightMap) -> Self {
        self.weights = weights;
        self
    }
}

/// A candidate that passed the threshold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub choice: String,
    pub score: f64,
    /// Position of the candidate in the input list.
    pub index: usize,
}

impl From<MatchResult> for (String, f64) {
    fn from(result: MatchResult) -> Self {
        (result.choice, result.score)
    }
}

fn prepare(s: &str, process: bool) -> CodePoints {
    let seq = CodePoints::from(s);
    if process {
        normalize(&seq, true)
    } else {
        seq
    }
}

/// Validated ranking configuration.
///
/// # Example
/// ```
/// use fuzzrank::process::{RankOptions, Ranker};
///
/// let ranker = Ranker::new(&RankOptions::default().mode("partial")).unwrap();
/// let results = ranker.rank("apple", &["banana bread", "apple pie"]);
/// assert_eq!("apple pie", results[0].choice);
/// assert_eq!(1.0, results[0].score);
/// ```
#[derive(Clone, Debug)]
pub struct Ranker {
    scorer: Scorer,
    process: bool,
    threshold: f64,
    top_n: Option<usize>,
}

impl Ranker {
    pub fn new(options: &RankOptions) -> Result<Self, InvalidScorerError> {
        let scorer = match Scorer::from_options(options) {
            Ok(scorer) => scorer,
            Err(err) => {
                debug!(error = %err, scorer = %options.scorer, "rejected rank options");
                return Err(err);
            }
        };

        debug!(
            ?scorer,
            process = options.process,
            threshold = options.threshold,
            top_n = ?options.top_n,
            "resolved ranking scorer"
        );
        Ok(Ranker {
            scorer,
            process: options.process,
            threshold: options.threshold,
            top_n: options.top_n,
        })
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    fn prepare_all<S>(&self, candidates: &[S]) -> Vec<CodePoints>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let iter = candidates.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = candidates.iter();

        iter.map(|c| prepare(c.as_ref(), self.process)).collect()
    }

    /// Scores the already prepared candidates and builds the ordered result.
    fn rank_prepared<S>(
        &self,
        query: &str,
        prepared: &[CodePoints],
        candidates: &[S],
    ) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        if self.top_n == Some(0) {
            return Vec::new();
        }

        let query = prepare(query, self.process);

        #[cfg(feature = "parallel")]
        let iter = prepared.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = prepared.iter();

        // collecting keeps candidate order, which the stable sort below
        // turns into the tie-break
        let mut scored: Vec<(usize, f64)> = iter
            .enumerate()
            .filter_map(|(index, candidate)| {
                let score = self.scorer.score(&query, candidate);
                (score >= self.threshold).then_some((index, score))
            })
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        if let Some(top_n) = self.top_n {
            scored.truncate(top_n);
        }

        scored
            .into_iter()
            .map(|(index, score)| MatchResult {
                choice: candidates[index].as_ref().to_string(),
                score,
                index,
            })
            .collect()
    }

    /// Ranks `candidates` against `query`.
    ///
    /// Results are ordered by descending score; equal scores keep the order of
    /// `candidates`. Duplicate candidates are scored and returned separately.
    pub fn rank<S>(&self, query: &str, candidates: &[S]) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        let _span = debug_span!("rank", candidates = candidates.len()).entered();

        let prepared = self.prepare_all(candidates);
        let results = self.rank_prepared(query, &prepared, candidates);
        debug!(kept = results.len(), "ranked candidates");
        results
    }

    /// Best scoring candidate, if any passes the threshold.
    pub fn extract_one<S>(&self, query: &str, candidates: &[S]) -> Option<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        self.rank(query, candidates).into_iter().next()
    }

    /// Ranks every query against the same candidates, one result list per
    /// query in query order. Candidates are preprocessed once.
    pub fn batch_match<Q, S>(&self, queries: &[Q], candidates: &[S]) -> Vec<Vec<MatchResult>>
    where
        Q: AsRef<str> + Sync,
        S: AsRef<str> + Sync,
    {
        debug!(
            queries = queries.len(),
            candidates = candidates.len(),
            "batch match"
        );

        let prepared = self.prepare_all(candidates);

        #[cfg(feature = "parallel")]
        let iter = queries.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = queries.iter();

        iter.map(|query| self.rank_prepared(query.as_ref(), &prepared, candidates))
            .collect()
    }
}

/// Ranks `candidates` against `query` using `options`.
///
/// Fails with [`InvalidScorerError`] before any scoring when the options do not
/// describe a known scorer.
///
/// # Example
/// ```
/// use fuzzrank::process::{rank, RankOptions};
///
/// let results = rank("app", &["apple", "banana", "cherry"], &RankOptions::default()).unwrap();
/// assert_eq!("apple", results[0].choice);
/// assert!(results[0].score > 0.5);
///
/// assert!(rank("a", &["b"], &RankOptions::default().scorer("bogus")).is_err());
/// ```
pub fn rank<S>(
    query: &str,
    candidates: &[S],
    options: &RankOptions,
) -> Result<Vec<MatchResult>, InvalidScorerError>
where
    S: AsRef<str> + Sync,
{
    Ok(Ranker::new(options)?.rank(query, candidates))
}

/// Returns the best match for `query`, or `None` when nothing passes the
/// threshold.
pub fn extract_one<S>(
    query: &str,
    candidates: &[S],
    options: &RankOptions,
) -> Result<Option<MatchResult>, InvalidScorerError>
where
    S: AsRef<str> + Sync,
{
    Ok(Ranker::new(options)?.extract_one(query, candidates))
}

/// Ranks each query in `queries` against `candidates`.
///
/// The options are validated once up front, so a configuration error fails
/// the whole batch without scoring anything.
pub fn batch_match<Q, S>(
    queries: &[Q],
    candidates: &[S],
    options: &RankOptions,
) -> Result<Vec<Vec<MatchResult>>, InvalidScorerError>
where
    Q: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    Ok(Ranker::new(options)?.batch_match(queries, candidates))
}
