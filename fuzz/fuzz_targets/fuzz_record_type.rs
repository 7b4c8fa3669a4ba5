#![no_main]

use libfuzzer_sys::fuzz_target;
use vinyldns::types::RecordType;

fuzz_target!(|data: &str| {
    // Test RecordType parsing with arbitrary strings
    if let Some(record_type) = RecordType::from_str(data) {
        // Verify roundtrip via string
        let s = record_type.to_string();
        let parsed = RecordType::from_str(&s).expect("Should roundtrip");
        assert_eq!(record_type, parsed);

        // The wire name is the display name
        let json = serde_json::to_string(&record_type).expect("Should serialize");
        assert_eq!(json, format!("\"{}\"", s));
    }
});
