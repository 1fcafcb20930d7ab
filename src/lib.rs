//! `fuzzrank` scores the similarity of strings and ranks candidate strings
//! against a query, for fuzzy search, autocomplete and record deduplication.
//!
//! ## Key Features
//!
//! - **Four Scorers**: whole-string Levenshtein ratio, partial (best substring
//!   alignment) ratio, token-set Jaccard similarity and token-sort ratio, all
//!   operating on Unicode code points.
//! - **Ranking**: score many candidates with one scorer or a weighted
//!   combination, filter by threshold and get a deterministic top-N back.
//! - **Batching**: rank several queries against one shared candidate list.
//!   With the default `parallel` feature the work is spread over a rayon pool.
//!
//! ## Usage
//!
//! ```rust
//! use fuzzrank::fuzz;
//! use fuzzrank::process::{batch_match, rank, RankOptions};
//!
//! let york: Vec<char> = "york".chars().collect();
//! let city: Vec<char> = "new york city".chars().collect();
//! assert_eq!(1.0, fuzz::partial_ratio(&york, &city));
//!
//! let candidates = ["New York Mets", "new york yankees", "atlanta braves"];
//!
//! // candidates are normalized before scoring unless `process(false)` is set
//! let results = rank("new york mets", &candidates, &RankOptions::default()).unwrap();
//! assert_eq!("New York Mets", results[0].choice);
//! assert_eq!(1.0, results[0].score);
//!
//! // combine scorers by weight, keep only the best two above 0.3
//! let options = RankOptions::default()
//!     .weight("levenshtein", 1.0)
//!     .weight("token_sort", 1.0)
//!     .threshold(0.3)
//!     .top_n(2);
//! let results = rank("yankees new york", &candidates, &options).unwrap();
//! assert_eq!("new york yankees", results[0].choice);
//!
//! // one result list per query
//! let batch = batch_match(&["mets", "braves"], &candidates, &RankOptions::default()).unwrap();
//! assert_eq!(2, batch.len());
//! ```
//!
//! Raw bytes can be decoded with [`codec::decode_utf8`], which rejects
//! malformed UTF-8 instead of replacing it.

#![forbid(unsafe_code)]
#![allow(
    // these casts are sometimes needed. They restrict the length of input
    // sequences but there isn't really any way around this
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod codec;
pub(crate) mod details;
pub mod distance;
pub mod error;
pub mod fuzz;
pub mod process;
pub mod scorer;
pub mod utils;

pub use codec::{decode_utf8, encode_utf8, CodePoints};
pub use error::{EncodingError, Error, InvalidScorerError, Result};
pub use fuzz::{jaccard_similarity, levenshtein_ratio, partial_ratio, token_sort_ratio};
pub use process::{batch_match, extract_one, rank, MatchResult, RankOptions, Ranker};
pub use scorer::{Mode, ScoreKind, Scorer, WeightMap};
