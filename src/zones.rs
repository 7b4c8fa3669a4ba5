//! Zones.
//!
//! # API Reference
//!
//! - [Zone Model](https://www.vinyldns.io/api/zone-model.html)
//! - [List Zones](https://www.vinyldns.io/api/list-zones.html)
//! - [Get Zone](https://www.vinyldns.io/api/get-zone-by-id.html)
//! - [Create Zone](https://www.vinyldns.io/api/create-zone.html)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::require_id;
use crate::types::{ListFilter, RecordType};
use crate::{Client, Error};

const ZONES_PATH: &str = "/zones";

/// A DNS zone managed by VinylDNS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Zone name with trailing dot, e.g. `parent.com.`.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Group that administers the zone.
    pub admin_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    /// Connection used for DNS updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ZoneConnection>,
    /// Connection used for zone transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_connection: Option<ZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<ZoneAcl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_sync: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<String>,
}

impl Zone {
    /// A new zone submission.
    pub fn new(name: &str, email: &str, admin_group_id: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            admin_group_id: admin_group_id.to_string(),
            ..Self::default()
        }
    }
}

/// TSIG-authenticated connection to a zone's primary server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConnection {
    pub name: String,
    pub key_name: String,
    pub key: String,
    pub primary_server: String,
}

/// Access rules for a shared or delegated zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAcl {
    #[serde(default)]
    pub rules: Vec<AclRule>,
}

/// One ACL rule; exactly one of `user_id` or `group_id` is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRule {
    /// `NoAccess`, `Read`, `Write` or `Delete`.
    pub access_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Regex restricting which record names the rule covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_mask: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub record_types: Vec<RecordType>,
}

/// Change accepted for a zone create, update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdateResponse {
    pub zone: Zone,
    /// `Create`, `Update`, `Delete` or `Sync`.
    pub change_type: String,
    pub status: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id: Option<String>,
}

/// One page of [`Client::zones_page`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zones {
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub name_filter: Option<String>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

#[derive(Deserialize)]
struct ZoneResponse {
    zone: Zone,
}

impl Client {
    /// Lists the zones the caller can access.
    pub async fn zones(&self) -> Result<Vec<Zone>, Error> {
        self.zones_page(&ListFilter::default())
            .await
            .map(|page| page.zones)
    }

    /// Lists one page of zones.
    pub async fn zones_page(&self, filter: &ListFilter) -> Result<Zones, Error> {
        let mut url = self.url(ZONES_PATH);
        filter.apply(&mut url, Some("nameFilter"));
        self.get(url).await
    }

    /// Gets a zone by id.
    pub async fn zone(&self, id: &str) -> Result<Zone, Error> {
        let resp: ZoneResponse = self.get(self.url(&format!("{}/{}", ZONES_PATH, id))).await?;
        Ok(resp.zone)
    }

    /// Gets a zone by name.
    pub async fn zone_by_name(&self, name: &str) -> Result<Zone, Error> {
        let resp: ZoneResponse = self
            .get(self.url(&format!("{}/name/{}", ZONES_PATH, name)))
            .await?;
        Ok(resp.zone)
    }

    /// Connects a new zone.
    pub async fn zone_create(&self, zone: &Zone) -> Result<ZoneUpdateResponse, Error> {
        self.post(self.url(ZONES_PATH), zone).await
    }

    /// Updates a zone. `zone.id` must be set.
    pub async fn zone_update(&self, zone: &Zone) -> Result<ZoneUpdateResponse, Error> {
        let id = require_id(zone.id.as_deref(), "zone")?;
        self.put(self.url(&format!("{}/{}", ZONES_PATH, id)), zone)
            .await
    }

    /// Abandons a zone.
    pub async fn zone_delete(&self, id: &str) -> Result<ZoneUpdateResponse, Error> {
        self.delete(self.url(&format!("{}/{}", ZONES_PATH, id)))
            .await
    }
}
