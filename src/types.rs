//! Value types shared by several API resources.
//!
//! # Size Limits (from RFCs)
//!
//! | Field | Limit | Reference |
//! |-------|-------|-----------|
//! | TTL | 0 to 2^31-1 seconds | RFC 2181 §8 |
//! | Priority (MX/SRV) | 16-bit unsigned | RFC 1035 §3.3.9, RFC 2782 |
//! | Weight (SRV) | 16-bit unsigned | RFC 2782 |
//! | Port (SRV) | 16-bit unsigned | RFC 2782 |

use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Maximum TTL value per RFC 2181 §8: 2^31 - 1 seconds.
pub const MAX_TTL: u32 = 2_147_483_647;

/// DNS Time To Live value.
///
/// Per RFC 2181 §8, TTL is an unsigned 32-bit integer with a maximum
/// value of 2^31 - 1 (2,147,483,647) seconds. Values built by the caller are
/// clamped; values decoded from the wire above the limit are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u32")]
pub struct Ttl(u32);

impl Ttl {
    /// One hour TTL.
    pub const ONE_HOUR: Ttl = Ttl(3600);

    /// One day TTL.
    pub const ONE_DAY: Ttl = Ttl(86400);

    /// Maximum valid TTL per RFC 2181 §8.
    pub const MAX: Ttl = Ttl(MAX_TTL);

    /// Creates a new TTL, clamping to the RFC maximum if necessary.
    #[inline]
    pub const fn new(seconds: u32) -> Self {
        if seconds > MAX_TTL {
            Self(MAX_TTL)
        } else {
            Self(seconds)
        }
    }

    /// Creates a new TTL, returning `None` above the RFC maximum.
    #[inline]
    pub const fn try_new(seconds: u32) -> Option<Self> {
        if seconds > MAX_TTL {
            None
        } else {
            Some(Self(seconds))
        }
    }

    /// Returns the TTL value in seconds.
    #[inline]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Ttl {
    #[inline]
    fn from(secs: u32) -> Self {
        Self::new(secs)
    }
}

impl From<Ttl> for u32 {
    #[inline]
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl<'de> Deserialize<'de> for Ttl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let secs = u32::deserialize(deserializer)?;
        Ttl::try_new(secs).ok_or_else(|| {
            de::Error::invalid_value(
                de::Unexpected::Unsigned(u64::from(secs)),
                &"a TTL of at most 2147483647 seconds",
            )
        })
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record types VinylDNS manages.
///
/// Serialized as the upper-case mnemonic (`"A"`, `"CNAME"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Host address (RFC 1035).
    A,
    /// IPv6 host address (RFC 3596).
    AAAA,
    /// Canonical name for an alias (RFC 1035).
    CNAME,
    /// Delegation signer (RFC 4034).
    DS,
    /// Mail exchange (RFC 1035).
    MX,
    /// Naming authority pointer (RFC 3403).
    NAPTR,
    /// Authoritative name server (RFC 1035).
    NS,
    /// Domain name pointer (RFC 1035).
    PTR,
    /// Start of authority (RFC 1035).
    SOA,
    /// Sender policy framework (RFC 4408).
    SPF,
    /// Server selection (RFC 2782).
    SRV,
    /// SSH key fingerprint (RFC 4255).
    SSHFP,
    /// Text strings (RFC 1035).
    TXT,
}

impl RecordType {
    /// Creates a RecordType from a string, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(Self::A),
            "AAAA" => Some(Self::AAAA),
            "CNAME" => Some(Self::CNAME),
            "DS" => Some(Self::DS),
            "MX" => Some(Self::MX),
            "NAPTR" => Some(Self::NAPTR),
            "NS" => Some(Self::NS),
            "PTR" => Some(Self::PTR),
            "SOA" => Some(Self::SOA),
            "SPF" => Some(Self::SPF),
            "SRV" => Some(Self::SRV),
            "SSHFP" => Some(Self::SSHFP),
            "TXT" => Some(Self::TXT),
            _ => None,
        }
    }

    /// Returns the type as a string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::DS => "DS",
            Self::MX => "MX",
            Self::NAPTR => "NAPTR",
            Self::NS => "NS",
            Self::PTR => "PTR",
            Self::SOA => "SOA",
            Self::SPF => "SPF",
            Self::SRV => "SRV",
            Self::SSHFP => "SSHFP",
            Self::TXT => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record data for a single record.
///
/// VinylDNS uses one flat object for every record type; only the fields that
/// belong to the record's type are present. Absent fields are omitted when
/// serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct RecordData {
    /// A / AAAA address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// CNAME target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    /// MX preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<u16>,
    /// MX exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// NS target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsdname: Option<String>,
    /// PTR target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptrdname: Option<String>,
    /// TXT / SPF text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// SRV priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// SRV weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// SRV port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// SRV target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// DS key tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keytag: Option<u16>,
    /// DS / SSHFP algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<u8>,
    /// DS digest type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digesttype: Option<u8>,
    /// DS digest (hex).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// SOA primary name server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mname: Option<String>,
    /// SOA responsible mailbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rname: Option<String>,
    /// SOA serial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    /// SOA refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,
    /// SOA retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<u32>,
    /// SOA expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<u32>,
    /// SOA minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u32>,
}

impl RecordData {
    /// A record.
    pub fn a(address: Ipv4Addr) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Self::default()
        }
    }

    /// AAAA record.
    pub fn aaaa(address: Ipv6Addr) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Self::default()
        }
    }

    /// CNAME record.
    pub fn cname(target: impl Into<String>) -> Self {
        Self {
            cname: Some(target.into()),
            ..Self::default()
        }
    }

    /// MX record.
    pub fn mx(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference: Some(preference),
            exchange: Some(exchange.into()),
            ..Self::default()
        }
    }

    /// NS record.
    pub fn ns(nsdname: impl Into<String>) -> Self {
        Self {
            nsdname: Some(nsdname.into()),
            ..Self::default()
        }
    }

    /// PTR record.
    pub fn ptr(ptrdname: impl Into<String>) -> Self {
        Self {
            ptrdname: Some(ptrdname.into()),
            ..Self::default()
        }
    }

    /// TXT record.
    pub fn txt(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// SRV record.
    pub fn srv(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self {
            priority: Some(priority),
            weight: Some(weight),
            port: Some(port),
            target: Some(target.into()),
            ..Self::default()
        }
    }
}

/// Paging and filtering options for list endpoints.
///
/// Unset fields are left out of the query string entirely, so an empty
/// filter requests the bare collection path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Opaque cursor returned as `nextId` by the previous page.
    pub start_from: Option<String>,
    /// Page size.
    pub max_items: Option<u32>,
    /// Name filter (zones, record sets and groups only).
    pub name_filter: Option<String>,
}

impl ListFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues from the cursor returned by a previous page.
    pub fn start_from(mut self, cursor: impl Into<String>) -> Self {
        self.start_from = Some(cursor.into());
        self
    }

    /// Limits the page size.
    pub fn max_items(mut self, max_items: u32) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Filters by name.
    pub fn name_filter(mut self, filter: impl Into<String>) -> Self {
        self.name_filter = Some(filter.into());
        self
    }

    /// Appends the set options to `url`. `name_param` is the collection's
    /// name-filter parameter (`nameFilter`, `recordNameFilter`,
    /// `groupNameFilter`); collections without one pass `None` and the name
    /// filter is dropped.
    pub(crate) fn apply(&self, url: &mut Url, name_param: Option<&str>) {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let (Some(param), Some(name)) = (name_param, &self.name_filter) {
            pairs.push((param, name.clone()));
        }
        if let Some(ref start) = self.start_from {
            pairs.push(("startFrom", start.clone()));
        }
        if let Some(max) = self.max_items {
            pairs.push(("maxItems", max.to_string()));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
    }
}
