#![no_main]

use chrono::DateTime;
use libfuzzer_sys::fuzz_target;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Method, Url};
use vinyldns::signing::{self, Credentials, SigningScope};

fuzz_target!(|data: (&str, &str, &[u8], u32)| {
    let (path, secret, body, secs) = data;
    let Ok(url) = Url::parse("https://vinyldns.example.com").and_then(|base| base.join(path))
    else {
        return;
    };
    let Some(timestamp) = DateTime::from_timestamp(i64::from(secs), 0) else {
        return;
    };

    // Canonicalization must accept whatever the URL parser produced
    let _ = signing::canonical_uri(&url);
    let _ = signing::canonical_query(&url);

    let sign = || {
        let mut headers = HeaderMap::new();
        signing::sign(
            &Credentials::new("AKIDEXAMPLE", secret),
            &SigningScope::default(),
            &Method::POST,
            &url,
            &mut headers,
            body,
            timestamp,
        )
        .map(|_| headers)
    };

    if let (Ok(a), Ok(b)) = (sign(), sign()) {
        assert_eq!(a[AUTHORIZATION], b[AUTHORIZATION]);
    }
});
