//! AWS Signature Version 4 request signing.
//!
//! VinylDNS authenticates every API call with SigV4 headers computed from the
//! caller's access key and secret key. The service validates the signature
//! against the credential scope named in the `Authorization` header, so the
//! region and service name only have to be used consistently.
//!
//! # API Reference
//!
//! - [VinylDNS API authentication](https://www.vinyldns.io/api/auth-mechanism.html)
//! - [Signature Version 4](https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_aws-signing.html)

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, HOST};
use reqwest::{Method, Url};

use crate::Error;

/// Signature algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Region VinylDNS clients sign for unless told otherwise.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Service name VinylDNS clients sign for unless told otherwise.
pub const DEFAULT_SERVICE: &str = "VinylDNS";

/// Header carrying the signing timestamp.
pub const X_AMZ_DATE: HeaderName = HeaderName::from_static("x-amz-date");

/// Unreserved characters plus `/` stay literal in the canonical path.
const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Query names and values also encode `/`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Access key / secret key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Region and service name placed in the credential scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScope {
    /// Region, `us-east-1` by default.
    pub region: String,
    /// Service name, `VinylDNS` by default.
    pub service: String,
}

impl SigningScope {
    /// Creates a scope for the given region and service.
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
        }
    }
}

impl Default for SigningScope {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, DEFAULT_SERVICE)
    }
}

/// Computes SHA256 hash and returns it as a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Computes HMAC-SHA256 and returns the raw bytes.
fn hmac_sha256(key: &[u8], data: &str) -> Vec<u8> {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Derives the per-day signing key.
pub fn derive_signing_key(secret_key: &str, date: &str, scope: &SigningScope) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret_key).as_bytes(), date);
    let k_region = hmac_sha256(&k_date, &scope.region);
    let k_service = hmac_sha256(&k_region, &scope.service);
    hmac_sha256(&k_service, "aws4_request")
}

/// Canonical form of the URL path: decoded once, then encoded with the
/// unreserved set. An empty path becomes `/`.
pub fn canonical_uri(url: &Url) -> String {
    let path = url.path();
    if path.is_empty() {
        return "/".to_string();
    }
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    utf8_percent_encode(&decoded, PATH_SET).to_string()
}

/// Canonical query string: each pair encoded, sorted by name then value.
pub fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            (
                utf8_percent_encode(&k, QUERY_SET).to_string(),
                utf8_percent_encode(&v, QUERY_SET).to_string(),
            )
        })
        .collect();
    pairs.sort();

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn is_signed_header(name: &str) -> bool {
    name == "host" || name == "content-type" || name.starts_with("x-amz-")
}

/// Returns `(canonical_headers, signed_headers)` for the headers that take
/// part in the signature.
fn canonical_headers(headers: &HeaderMap) -> Result<(String, String), Error> {
    let mut signed: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        let name = name.as_str();
        if !is_signed_header(name) {
            continue;
        }
        let value = value
            .to_str()
            .map_err(|_| Error::InvalidHeader(name.to_string()))?
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        signed.entry(name).or_default().push(value);
    }

    let canonical = signed
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();
    let names = signed.keys().copied().collect::<Vec<_>>().join(";");

    Ok((canonical, names))
}

/// `Host` header value for a URL, including any non-default port.
fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

/// Signs a request in place.
///
/// Inserts `Host`, `X-Amz-Date` and `Authorization`. Any `Content-Type`
/// header already present is covered by the signature.
pub fn sign(
    credentials: &Credentials,
    scope: &SigningScope,
    method: &Method,
    url: &Url,
    headers: &mut HeaderMap,
    body: &[u8],
    timestamp: DateTime<Utc>,
) -> Result<(), Error> {
    let amz_date = timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date = timestamp.format("%Y%m%d").to_string();

    let invalid = |name: &str| Error::InvalidHeader(name.to_string());

    let host = host_header(url).ok_or_else(|| invalid("host"))?;
    headers.insert(
        HOST,
        HeaderValue::from_str(&host).map_err(|_| invalid("host"))?,
    );
    headers.insert(
        X_AMZ_DATE,
        HeaderValue::from_str(&amz_date).map_err(|_| invalid("x-amz-date"))?,
    );

    // Step 1: Build canonical request
    let (canonical_headers, signed_headers) = canonical_headers(headers)?;
    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        method.as_str(),
        canonical_uri(url),
        canonical_query(url),
        canonical_headers,
        signed_headers,
        sha256_hex(body)
    );

    // Step 2: Build string to sign
    let credential_scope = format!("{}/{}/{}/aws4_request", date, scope.region, scope.service);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        credential_scope,
        sha256_hex(canonical_request.as_bytes())
    );

    // Step 3: Calculate signature
    let signing_key = derive_signing_key(&credentials.secret_key, &date, scope);
    let signature = hex::encode(hmac_sha256(&signing_key, &string_to_sign));

    // Step 4: Build authorization header
    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM, credentials.access_key, credential_scope, signed_headers, signature
    );
    let mut value =
        HeaderValue::from_str(&authorization).map_err(|_| invalid("authorization"))?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);

    Ok(())
}
