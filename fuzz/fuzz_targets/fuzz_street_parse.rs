#![no_main]

use jaarrekening::core::{StreetPart, match_street};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(parsed) = match_street(s) {
            // A match always has a number and a street name.
            assert!(parsed.part(StreetPart::Number).is_some());
            assert!(parsed.part(StreetPart::Name).is_some());
        }
    }
});
