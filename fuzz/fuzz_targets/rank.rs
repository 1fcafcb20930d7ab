#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::process::{rank, RankOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Input {
    pub query: String,
    pub candidates: Vec<String>,
    pub threshold: u8,
    pub top_n: Option<u8>,
}

fn fuzz(input: Input) {
    let threshold = f64::from(input.threshold) / 255.0;
    let mut options = RankOptions::default().threshold(threshold);
    if let Some(top_n) = input.top_n {
        options = options.top_n(usize::from(top_n));
    }

    let results = rank(&input.query, &input.candidates, &options).expect("valid options");
    if let Some(top_n) = options.top_n {
        assert!(results.len() <= top_n);
    }
    assert!(results.len() <= input.candidates.len());

    for result in &results {
        assert!(result.score >= threshold);
        assert_eq!(input.candidates[result.index], result.choice);
    }
    for pair in results.windows(2) {
        assert!(pair[0].score > pair[1].score || pair[0].index < pair[1].index);
    }
}

fuzz_target!(|input: Input| {
    fuzz(input);
});
