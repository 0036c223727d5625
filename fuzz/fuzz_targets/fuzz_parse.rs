#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Err(e) = kvparse::parse(s) {
            let len = s.chars().count();
            assert!(e.offset() < len, "offset {} out of range for {:?}", e.offset(), s);
        }
    }
});
