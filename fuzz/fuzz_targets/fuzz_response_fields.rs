#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(fields) = evatr::rpc::ResponseFields::parse(s) {
            // Every indexed key must resolve to a non-empty value or nothing.
            for (key, _) in fields.pairs() {
                assert!(fields.value(key).is_none_or(|v| !v.is_empty()));
            }
        }
    }
});
