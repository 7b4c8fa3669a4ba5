//! The API client: request building, signing and response decoding.
//!
//! Resource methods live next to their types (`batch`, `zones`, `recordsets`,
//! `groups`); they all funnel through the `get`, `post`, `put` and `delete`
//! helpers defined here.

use std::env;
use std::sync::Arc;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::signing::{self, Credentials, SigningScope};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::{Error, HttpClientConfig};

/// Environment variable holding the API base URL.
pub const ENV_HOST: &str = "VINYLDNS_HOST";
/// Environment variable holding the access key.
pub const ENV_ACCESS_KEY: &str = "VINYLDNS_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "VINYLDNS_SECRET_KEY";

/// Response bodies longer than this are cut short in log output.
const LOG_BODY_LIMIT: usize = 256;

/// VinylDNS API client.
///
/// Holds credentials, the base URL and a transport; nothing else. It is cheap
/// to clone and safe to share between tasks: no method mutates it.
#[derive(Debug, Clone)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    scope: SigningScope,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client talking to `host` (e.g. `https://vinyldns.example.com`).
    ///
    /// # Arguments
    ///
    /// * `access_key` - VinylDNS access key
    /// * `secret_key` - VinylDNS secret key
    /// * `host` - API base URL
    pub fn new(access_key: &str, secret_key: &str, host: &str) -> Result<Self, Error> {
        Self::with_config(access_key, secret_key, host, HttpClientConfig::default())
    }

    /// Creates a client with custom HTTP configuration.
    ///
    /// # Arguments
    ///
    /// * `access_key` - VinylDNS access key
    /// * `secret_key` - VinylDNS secret key
    /// * `host` - API base URL
    /// * `config` - timeout, proxy, TLS and network binding settings
    pub fn with_config(
        access_key: &str,
        secret_key: &str,
        host: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(access_key, secret_key, host, Arc::new(transport))
    }

    /// Creates a client that delivers requests through `transport`.
    pub fn with_transport(
        access_key: &str,
        secret_key: &str,
        host: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(host)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("{} cannot be used as a base URL", host)));
        }

        Ok(Self {
            credentials: Credentials::new(access_key, secret_key),
            base_url,
            scope: SigningScope::default(),
            transport,
        })
    }

    /// Creates a client from `VINYLDNS_HOST`, `VINYLDNS_ACCESS_KEY` and
    /// `VINYLDNS_SECRET_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let var = |name: &str| {
            env::var(name).map_err(|_| Error::Config(format!("{} is not set", name)))
        };
        Self::new(&var(ENV_ACCESS_KEY)?, &var(ENV_SECRET_KEY)?, &var(ENV_HOST)?)
    }

    /// Replaces the region/service used in the signature's credential scope.
    pub fn with_signing_scope(mut self, scope: SigningScope) -> Self {
        self.scope = scope;
        self
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The access key requests are signed with.
    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    /// Resolves `path` (starting with `/`) against the base URL, keeping any
    /// path prefix the base URL carries.
    pub(crate) fn url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url
    }

    /// Builds a signed request. Serialization happens before anything is
    /// sent, so an encoding failure has no side effects.
    pub fn build_request<B>(
        &self,
        method: Method,
        url: Url,
        payload: Option<&B>,
    ) -> Result<HttpRequest, Error>
    where
        B: Serialize + ?Sized,
    {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let body = match payload {
            Some(payload) => {
                let body = serde_json::to_vec(payload).map_err(Error::Encode)?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(body)
            }
            None => None,
        };

        signing::sign(
            &self.credentials,
            &self.scope,
            &method,
            &url,
            &mut headers,
            body.as_deref().unwrap_or_default(),
            Utc::now(),
        )?;

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends a request and decodes the response.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, Error> {
        log::debug!("[vinyldns] {} {}", request.method, request.url);

        let response = self.transport.execute(request).await?;
        log::debug!("[vinyldns] Response Status: {}", response.status);
        log::trace!(
            "[vinyldns] Response Body: {}",
            truncate_for_log(&response.body)
        );

        decode(response)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let request = self.build_request::<()>(Method::GET, url, None)?;
        self.send(request).await
    }

    pub(crate) async fn post<B, T>(&self, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::POST, url, Some(body))?;
        self.send(request).await
    }

    pub(crate) async fn put<B, T>(&self, url: Url, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::PUT, url, Some(body))?;
        self.send(request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let request = self.build_request::<()>(Method::DELETE, url, None)?;
        self.send(request).await
    }
}

/// Maps a raw response to a typed value.
///
/// Non-2xx statuses become [`Error::Service`] without looking at the body;
/// 2xx bodies that do not match `T` become [`Error::Decode`].
pub fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, Error> {
    let HttpResponse { status, body } = response;

    if !status.is_success() {
        log::warn!("[vinyldns] HTTP {}: {}", status, truncate_for_log(&body));
        return Err(Error::Service { status, body });
    }

    serde_json::from_str(&body).map_err(|source| {
        log::error!("[vinyldns] JSON parse failed: {}", source);
        log::error!("[vinyldns] Raw response: {}", truncate_for_log(&body));
        Error::Decode { source, body }
    })
}

/// Returns `id` when present and non-empty, `MissingId(what)` otherwise.
pub(crate) fn require_id<'a>(id: Option<&'a str>, what: &'static str) -> Result<&'a str, Error> {
    id.filter(|id| !id.is_empty()).ok_or(Error::MissingId(what))
}

/// Cuts `s` to [`LOG_BODY_LIMIT`] bytes on a char boundary.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}
