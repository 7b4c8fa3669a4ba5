#![no_main]

use libfuzzer_sys::fuzz_target;
use vinyldns::types::Ttl;

fuzz_target!(|data: u32| {
    // Test Ttl::new which clamps
    let ttl = Ttl::new(data);
    let val = ttl.as_secs();
    assert!(val <= Ttl::MAX.as_secs());
    assert_eq!(val, data.min(Ttl::MAX.as_secs()));

    // Decoding never clamps: in-range values survive unchanged, the rest fail
    let decoded = serde_json::from_str::<Ttl>(&data.to_string());
    match Ttl::try_new(data) {
        Some(expected) => assert_eq!(decoded.expect("in-range ttl decodes"), expected),
        None => assert!(decoded.is_err()),
    }
});
