#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // allow every key that could appear, ignoring case
        let allowed = s
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|k| !k.is_empty());
        let strict = kvparse::Parser::strict(allowed, false);

        let result_default = kvparse::parse(s);
        let result_strict = strict.parse(s);

        match (&result_default, &result_strict) {
            (Ok(default), Ok(strict)) => {
                if default != strict {
                    panic!(
                        "Differential fuzzing: different results!\nInput: {:?}\nDefault: {:?}\nStrict: {:?}",
                        s, default, strict
                    );
                }
            }
            (Err(default), Err(strict)) => {
                if default != strict {
                    panic!(
                        "Differential fuzzing: different errors!\nInput: {:?}\nDefault: {}\nStrict: {}",
                        s, default, strict
                    );
                }
            }
            _ => panic!("Differential fuzzing: outcomes diverge for input {:?}", s),
        }
    }
});
