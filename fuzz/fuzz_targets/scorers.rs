#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::utils::normalize;
use fuzzrank::{CodePoints, ScoreKind};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub process: bool,
}

fn fuzz(texts: Texts) {
    let s1 = normalize(&CodePoints::from(texts.s1.as_str()), texts.process);
    let s2 = normalize(&CodePoints::from(texts.s2.as_str()), texts.process);

    for kind in ScoreKind::ALL {
        let score = kind.score(&s1, &s2);
        assert!((0.0..=1.0).contains(&score), "{kind} out of range: {score}");
        assert_eq!(score, kind.score(&s2, &s1), "{kind} not symmetric");
        assert_eq!(1.0, kind.score(&s1, &s1), "{kind} self similarity");
    }
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
