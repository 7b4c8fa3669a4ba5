//! Record sets.
//!
//! A record set is every record of one type under one name in a zone.
//!
//! # API Reference
//!
//! - [RecordSet Model](https://www.vinyldns.io/api/recordset-model.html)
//! - [List RecordSets](https://www.vinyldns.io/api/list-recordsets-by-zone.html)
//! - [Create RecordSet](https://www.vinyldns.io/api/create-recordset.html)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::require_id;
use crate::types::{ListFilter, RecordData, RecordType, Ttl};
use crate::{Client, Error, Zone};

/// A record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub zone_id: String,
    /// Name relative to the zone, `@` for the apex.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub ttl: Ttl,
    pub records: Vec<RecordData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Owning group for record sets in shared zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_group_id: Option<String>,
}

impl RecordSet {
    /// A new record set submission.
    pub fn new(
        zone_id: &str,
        name: &str,
        record_type: RecordType,
        ttl: impl Into<Ttl>,
        records: Vec<RecordData>,
    ) -> Self {
        Self {
            id: None,
            zone_id: zone_id.to_string(),
            name: name.to_string(),
            record_type,
            ttl: ttl.into(),
            records,
            status: None,
            created: None,
            updated: None,
            account: None,
            owner_group_id: None,
        }
    }
}

/// Change accepted for a record set create, update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetUpdateResponse {
    pub zone: Zone,
    pub record_set: RecordSet,
    /// `Create`, `Update` or `Delete`.
    pub change_type: String,
    pub status: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id: Option<String>,
}

/// One page of [`Client::record_sets_page`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSets {
    pub record_sets: Vec<RecordSet>,
    #[serde(default)]
    pub record_name_filter: Option<String>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordSetResponse {
    record_set: RecordSet,
}

fn record_sets_path(zone_id: &str) -> String {
    format!("/zones/{}/recordsets", zone_id)
}

impl Client {
    /// Lists the record sets in a zone.
    pub async fn record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>, Error> {
        self.record_sets_page(zone_id, &ListFilter::default())
            .await
            .map(|page| page.record_sets)
    }

    /// Lists one page of record sets in a zone.
    pub async fn record_sets_page(
        &self,
        zone_id: &str,
        filter: &ListFilter,
    ) -> Result<RecordSets, Error> {
        let mut url = self.url(&record_sets_path(zone_id));
        filter.apply(&mut url, Some("recordNameFilter"));
        self.get(url).await
    }

    /// Gets a record set by zone id and record set id.
    pub async fn record_set(&self, zone_id: &str, id: &str) -> Result<RecordSet, Error> {
        let resp: RecordSetResponse = self
            .get(self.url(&format!("{}/{}", record_sets_path(zone_id), id)))
            .await?;
        Ok(resp.record_set)
    }

    /// Creates a record set in `record_set.zone_id`.
    pub async fn record_set_create(
        &self,
        record_set: &RecordSet,
    ) -> Result<RecordSetUpdateResponse, Error> {
        let zone_id = require_id(Some(&record_set.zone_id), "record set zone")?;
        self.post(self.url(&record_sets_path(zone_id)), record_set)
            .await
    }

    /// Replaces a record set. `record_set.zone_id` and `record_set.id` must
    /// be set.
    pub async fn record_set_update(
        &self,
        record_set: &RecordSet,
    ) -> Result<RecordSetUpdateResponse, Error> {
        let zone_id = require_id(Some(&record_set.zone_id), "record set zone")?;
        let id = require_id(record_set.id.as_deref(), "record set")?;
        let path = format!("{}/{}", record_sets_path(zone_id), id);
        self.put(self.url(&path), record_set).await
    }

    /// Deletes a record set.
    pub async fn record_set_delete(
        &self,
        zone_id: &str,
        id: &str,
    ) -> Result<RecordSetUpdateResponse, Error> {
        self.delete(self.url(&format!("{}/{}", record_sets_path(zone_id), id)))
            .await
    }
}
