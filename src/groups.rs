//! Groups: the unit of ownership for zones and shared record sets.
//!
//! # API Reference
//!
//! - [Membership Model](https://www.vinyldns.io/api/membership-model.html)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::require_id;
use crate::types::ListFilter;
use crate::{Client, Error};

const GROUPS_PATH: &str = "/groups";

/// A VinylDNS group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub admins: Vec<GroupMember>,
}

/// A user reference inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupMember {
    pub id: String,
}

impl GroupMember {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// One page of [`Client::groups_page`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Groups {
    pub groups: Vec<Group>,
    #[serde(default)]
    pub group_name_filter: Option<String>,
    #[serde(default)]
    pub start_from: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    #[serde(default)]
    pub max_items: Option<u32>,
}

impl Client {
    /// Lists the groups the caller belongs to.
    pub async fn groups(&self) -> Result<Vec<Group>, Error> {
        self.groups_page(&ListFilter::default())
            .await
            .map(|page| page.groups)
    }

    /// Lists one page of groups.
    pub async fn groups_page(&self, filter: &ListFilter) -> Result<Groups, Error> {
        let mut url = self.url(GROUPS_PATH);
        filter.apply(&mut url, Some("groupNameFilter"));
        self.get(url).await
    }

    /// Gets a group by id.
    pub async fn group(&self, id: &str) -> Result<Group, Error> {
        self.get(self.url(&format!("{}/{}", GROUPS_PATH, id))).await
    }

    /// Creates a group.
    pub async fn group_create(&self, group: &Group) -> Result<Group, Error> {
        self.post(self.url(GROUPS_PATH), group).await
    }

    /// Updates a group. `group.id` must be set.
    pub async fn group_update(&self, group: &Group) -> Result<Group, Error> {
        let id = require_id(group.id.as_deref(), "group")?;
        self.put(self.url(&format!("{}/{}", GROUPS_PATH, id)), group)
            .await
    }

    /// Deletes a group and returns it as it was.
    pub async fn group_delete(&self, id: &str) -> Result<Group, Error> {
        self.delete(self.url(&format!("{}/{}", GROUPS_PATH, id)))
            .await
    }
}
