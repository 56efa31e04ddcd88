use serde::{Deserialize, Serialize};

use crate::core::wire::{Opaque, lenient_i64, lenient_string, null_as_default};

/// A league or mock draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    #[serde(deserialize_with = "null_as_default")]
    pub draft_id: String,
    pub league_id: Option<String>,
    /// `snake`, `linear` or `auction`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// `pre_draft`, `drafting`, `paused` or `complete`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sport: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season_type: String,
    pub start_time: Option<i64>,
    pub created: Option<i64>,
    pub last_picked: Option<i64>,
    pub last_message_id: Option<String>,
    pub last_message_time: Option<i64>,
    /// User ids; shape varies between drafts.
    pub creators: Opaque,
    /// User id -> draft slot, usually. Values may be numbers, numeric strings or `null`.
    pub draft_order: Opaque,
    /// Draft slot -> roster id, usually. Unfilled slots map to `null`.
    pub slot_to_roster_id: Opaque,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: DraftSettings,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: DraftMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftSettings {
    #[serde(deserialize_with = "lenient_i64")]
    pub teams: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub rounds: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub pick_timer: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub reversal_round: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub player_type: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub cpu_autopick: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub nomination_timer: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub budget: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_qb: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_rb: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_wr: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_te: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_flex: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_k: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_def: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub slots_bn: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `ppr`, `half_ppr`, `std`, `2qb`, ...
    pub scoring_type: Option<String>,
}

/// One selection in a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPick {
    #[serde(deserialize_with = "null_as_default")]
    pub draft_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: String,
    /// User id of the drafter; empty for CPU picks.
    #[serde(deserialize_with = "null_as_default")]
    pub picked_by: String,
    /// Sent as a number or a numeric string.
    #[serde(deserialize_with = "lenient_i64")]
    pub roster_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub round: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub pick_no: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub draft_slot: u32,
    /// `true`, `null` or absent depending on league settings.
    pub is_keeper: Opaque,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: DraftPickMetadata,
    pub reactions: Opaque,
}

/// Player details frozen at pick time. The upstream sends numbers as strings here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPickMetadata {
    #[serde(deserialize_with = "lenient_string")]
    pub player_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub position: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub team: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sport: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub years_exp: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub injury_status: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub news_updated: Option<String>,
    /// Auction price, when the draft is an auction.
    #[serde(deserialize_with = "lenient_string")]
    pub amount: Option<String>,
}
