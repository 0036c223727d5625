#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const MAX_KEYS: usize = 8;

#[derive(Arbitrary, Debug)]
struct StrictInput {
    allowed: Vec<String>,
    case_sensitive: bool,
    input: String,
}

fuzz_target!(|data: StrictInput| {
    let allowed = data.allowed.into_iter().take(MAX_KEYS);
    let parser = kvparse::Parser::strict(allowed, data.case_sensitive);
    if let Ok(parsed) = parser.parse(&data.input) {
        for key in parsed.keys() {
            assert!(parser.policy().contains(key), "accepted unlisted key {key:?}");
        }
    }
});
