//! Typed async client for the [VinylDNS](https://www.vinyldns.io) API.
//!
//! Every method on [`Client`] builds one request, signs it with the caller's
//! access key and secret key (AWS Signature Version 4), hands it to a
//! [`Transport`], and decodes the JSON response into a typed value or an
//! [`Error`]. Nothing is cached and nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use vinyldns::{BatchRecordChange, Client, RecordChange, RecordData, RecordType};
//!
//! # async fn example() -> Result<(), vinyldns::Error> {
//! let client = Client::new("access-key", "secret-key", "https://vinyldns.example.com")?;
//!
//! for summary in client.batch_record_changes().await? {
//!     println!("{}: {} changes", summary.user_name, summary.total_changes);
//! }
//!
//! let batch = BatchRecordChange {
//!     comments: Some("add www".to_string()),
//!     changes: vec![RecordChange::add(
//!         "www.example.com.",
//!         RecordType::A,
//!         300,
//!         RecordData::a("192.0.2.10".parse().unwrap()),
//!     )],
//!     ..Default::default()
//! };
//! let submitted = client.batch_record_change_create(&batch).await?;
//! println!("submitted {:?}", submitted.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Testing against a local server
//!
//! A [`Client`] can either point at a mock server directly, be routed to one
//! through [`HttpClientConfig::proxy`] while keeping its real base URL, or be
//! given a custom [`Transport`] with [`Client::with_transport`].

use std::net::IpAddr;
use std::time::Duration;

pub mod batch;
pub mod client;
pub mod error;
pub mod groups;
pub mod recordsets;
pub mod signing;
pub mod transport;
pub mod types;
pub mod zones;

pub use batch::{
    BatchRecordChange, BatchRecordChangeSummary, BatchRecordChanges, ChangeType, RecordChange,
};
pub use client::Client;
pub use error::Error;
pub use groups::{Group, GroupMember, Groups};
pub use recordsets::{RecordSet, RecordSetUpdateResponse, RecordSets};
pub use signing::{Credentials, SigningScope};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{ListFilter, RecordData, RecordType, Ttl};
pub use zones::{AclRule, Zone, ZoneAcl, ZoneConnection, ZoneUpdateResponse, Zones};

/// `User-Agent` sent when [`HttpClientConfig::user_agent`] is unset.
pub const DEFAULT_USER_AGENT: &str = concat!("vinyldns-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration for the default [`ReqwestTransport`].
///
/// Covers network binding, timeouts, proxy routing and TLS trust.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use vinyldns::HttpClientConfig;
///
/// let config = HttpClientConfig::new()
///     .timeout(Duration::from_secs(10))
///     .proxy("http://127.0.0.1:3128");
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Local address to bind outgoing connections to.
    pub local_address: Option<IpAddr>,
    /// Network interface to bind outgoing connections to (Unix-like only).
    pub interface: Option<String>,
    /// Whole-request timeout. Defaults to 30 seconds.
    pub timeout: Option<Duration>,
    /// Proxy URL that every request is routed through.
    pub proxy: Option<String>,
    /// Accept any server certificate. Only for test environments.
    pub danger_accept_invalid_certs: bool,
    /// Custom `User-Agent` header.
    pub user_agent: Option<String>,
}

impl HttpClientConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds outgoing connections to `addr`.
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }

    /// Binds outgoing connections to the named interface.
    pub fn interface(mut self, iface: impl Into<String>) -> Self {
        self.interface = Some(iface.into());
        self
    }

    /// Sets the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes all traffic through `proxy`.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Controls whether invalid TLS certificates are accepted.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
