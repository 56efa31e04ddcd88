use serde::{Deserialize, Serialize};

use crate::core::wire::{Opaque, null_as_default};

/// A Sleeper account.
///
/// Most account fields are only populated for the authenticated owner, so they are
/// kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Avatar id, usable with [`crate::SleeperClient::avatar`].
    pub avatar: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_bot: bool,
    pub metadata: Opaque,
    pub created: Opaque,
    pub real_name: Opaque,
    pub email: Opaque,
    pub phone: Opaque,
    pub verification: Opaque,
    pub currencies: Opaque,
    pub pending: Opaque,
    pub deleted: Opaque,
    pub solicitable: Opaque,
    pub notifications: Opaque,
    pub summoner_name: Opaque,
    pub summoner_region: Opaque,
    pub data_updated: Opaque,
}
