#![no_main]

use libfuzzer_sys::fuzz_target;
use reqwest::StatusCode;
use vinyldns::client::decode;
use vinyldns::{BatchRecordChange, BatchRecordChanges, Error, HttpResponse};

fuzz_target!(|data: (u16, &str)| {
    let (code, body) = data;
    let Ok(status) = StatusCode::from_u16(code) else {
        return;
    };

    // Failures always hand the raw body back
    match decode::<BatchRecordChange>(HttpResponse::new(status, body)) {
        Ok(_) => assert!(status.is_success()),
        Err(Error::Service { body: raw, .. }) | Err(Error::Decode { body: raw, .. }) => {
            assert_eq!(raw, body)
        }
        Err(e) => panic!("unexpected error kind: {}", e),
    }

    let _ = decode::<BatchRecordChanges>(HttpResponse::new(status, body));
});
