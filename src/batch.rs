//! Batch record changes.
//!
//! A batch groups several single-record mutations that VinylDNS validates
//! and applies as one unit, tracked under its own id and status.
//!
//! # API Reference
//!
//! - [Batch Change Model](https://www.vinyldns.io/api/batchchange-model.html)
//! - [List Batch Changes](https://www.vinyldns.io/api/list-batchchanges.html)
//! - [Get Batch Change](https://www.vinyldns.io/api/get-batchchange.html)
//! - [Create Batch Change](https://www.vinyldns.io/api/create-batchchange.html)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ListFilter, RecordData, RecordType, Ttl};
use crate::{Client, Error};

const BATCH_PATH: &str = "/zones/batchrecordchanges";

/// What a single change does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// Add a record, creating the record set if needed.
    Add,
    /// Delete a whole record set.
    DeleteRecordSet,
    /// Delete one record from a record set.
    DeleteRecord,
}

/// One record mutation inside a batch.
///
/// When submitting, set `change_type`, `input_name`, `record_type` and (for
/// adds) `ttl` and `record`. The remaining fields are filled in by the
/// service and come back on the submitted or fetched batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordChange {
    pub change_type: ChangeType,
    /// Fully qualified name as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    /// Record name relative to its zone, as resolved by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<Ttl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordData>,
    /// Per-change status (`Pending`, `Complete`, `Failed`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_change_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_set_id: Option<String>,
}

impl RecordChange {
    fn input(change_type: ChangeType, input_name: &str, record_type: RecordType) -> Self {
        Self {
            change_type,
            input_name: Some(input_name.to_string()),
            record_name: None,
            zone_name: None,
            zone_id: None,
            record_type: Some(record_type),
            ttl: None,
            record: None,
            status: None,
            system_message: None,
            id: None,
            record_change_id: None,
            record_set_id: None,
        }
    }

    /// Adds `record` under `input_name`.
    pub fn add(
        input_name: &str,
        record_type: RecordType,
        ttl: impl Into<Ttl>,
        record: RecordData,
    ) -> Self {
        Self {
            ttl: Some(ttl.into()),
            record: Some(record),
            ..Self::input(ChangeType::Add, input_name, record_type)
        }
    }

    /// Deletes every record of `record_type` under `input_name`.
    pub fn delete_record_set(input_name: &str, record_type: RecordType) -> Self {
        Self::input(ChangeType::DeleteRecordSet, input_name, record_type)
    }

    /// Deletes the single `record` under `input_name`.
    pub fn delete_record(input_name: &str, record_type: RecordType, record: RecordData) -> Self {
        Self {
            record: Some(record),
            ..Self::input(ChangeType::DeleteRecord, input_name, record_type)
        }
    }
}

/// A batch record change, either as submitted or as returned by the service.
///
/// `Default` is an empty submission; ids, user and status are only ever set
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecordChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
    /// Changes in the order the service reports them.
    pub changes: Vec<RecordChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_group_id: Option<String>,
}

/// Listing entry for a batch, without its changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecordChangeSummary {
    pub user_name: String,
    pub total_changes: u32,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner_group_id: Option<String>,
}

/// One page of [`Client::batch_record_changes_page`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecordChanges {
    pub batch_changes: Vec<BatchRecordChangeSummary>,
    #[serde(default)]
    pub start_from: Option<u32>,
    /// Cursor for the next page, absent on the last one.
    #[serde(default)]
    pub next_id: Option<u32>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

impl Client {
    /// Lists batch changes submitted by the caller.
    pub async fn batch_record_changes(&self) -> Result<Vec<BatchRecordChangeSummary>, Error> {
        self.batch_record_changes_page(&ListFilter::default())
            .await
            .map(|page| page.batch_changes)
    }

    /// Lists one page of batch changes. Batches have no name filter; only
    /// `start_from` and `max_items` apply.
    pub async fn batch_record_changes_page(
        &self,
        filter: &ListFilter,
    ) -> Result<BatchRecordChanges, Error> {
        let mut url = self.url(BATCH_PATH);
        filter.apply(&mut url, None);
        self.get(url).await
    }

    /// Gets a batch change by id.
    pub async fn batch_record_change(&self, id: &str) -> Result<BatchRecordChange, Error> {
        self.get(self.url(&format!("{}/{}", BATCH_PATH, id))).await
    }

    /// Submits a batch change and returns it as accepted by the service.
    pub async fn batch_record_change_create(
        &self,
        change: &BatchRecordChange,
    ) -> Result<BatchRecordChange, Error> {
        self.post(self.url(BATCH_PATH), change).await
    }
}
