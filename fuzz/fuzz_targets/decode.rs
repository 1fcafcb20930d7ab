#![no_main]

use fuzzrank::codec::{decode_utf8, encode_utf8};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match (decode_utf8(data), std::str::from_utf8(data)) {
        (Ok(seq), Ok(text)) => assert_eq!(text, encode_utf8(&seq)),
        (Err(err), Err(expected)) => assert_eq!(expected.valid_up_to(), err.valid_up_to),
        (decoded, expected) => panic!("{decoded:?} disagrees with {expected:?}"),
    }
});
