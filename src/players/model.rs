use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::core::wire::{Opaque, StatLine, lenient_f64, lenient_i64, lenient_string, null_as_default};

/// The full player directory keyed by player id.
pub type Players = HashMap<String, Player>;

/// A player (or team defense) as listed in the player directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub position: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fantasy_positions: Vec<String>,
    /// Team abbreviation; `None` for free agents.
    pub team: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub number: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub age: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub years_exp: Option<i64>,
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    pub sport: Option<String>,
    pub injury_status: Option<String>,
    pub injury_body_part: Option<String>,
    pub injury_notes: Option<String>,
    pub injury_start_date: Opaque,
    pub practice_participation: Option<String>,
    pub practice_description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub depth_chart_position: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub depth_chart_order: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub search_rank: Option<i64>,
    pub search_first_name: Option<String>,
    pub search_last_name: Option<String>,
    pub search_full_name: Option<String>,
    pub hashtag: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub height: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub weight: Option<String>,
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub birth_state: Option<String>,
    pub birth_country: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub news_updated: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub espn_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub yahoo_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub rotowire_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub rotoworld_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub fantasy_data_id: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub swish_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub sportradar_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub stats_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub gsis_id: Option<String>,
    pub pandascore_id: Opaque,
    pub metadata: Opaque,
}

impl Player {
    /// `full_name` if present, else `first_name last_name`.
    #[must_use]
    pub fn name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|s| !s.is_empty()) {
            return full.to_string();
        }
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(f), Some(l)) => format!("{f} {l}"),
            (Some(n), None) | (None, Some(n)) => n.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// A player whose roster adds or drops spiked recently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingPlayer {
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u32,
}

/// Percent of leagues where a player is rostered and started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerResearch {
    #[serde(deserialize_with = "lenient_f64")]
    pub owned: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub started: Option<f64>,
}

/// Season or weekly stats for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: String,
    pub stats: StatLine,
    pub category: Option<String>,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub sport: Option<String>,
    pub team: Option<String>,
    pub company: Option<String>,
    pub game_id: Option<String>,
    /// Number or null depending on the endpoint.
    pub week: Opaque,
    pub date: Opaque,
    pub opponent: Opaque,
    pub last_modified: Opaque,
    pub updated_at: Opaque,
    #[serde(deserialize_with = "null_as_default")]
    pub player: Player,
}

/// One projected stat line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    #[serde(deserialize_with = "null_as_default")]
    pub player_id: String,
    pub stats: StatLine,
    #[serde(deserialize_with = "lenient_i64")]
    pub week: Option<i64>,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub category: Option<String>,
    pub sport: Option<String>,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub company: Option<String>,
    pub game_id: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub player: Player,
}

/// An NFL team's depth chart, position slot (`QB`, `WR1`, `LCB`, ...) -> player ids in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamDepthChart(BTreeMap<String, Vec<String>>);

impl TeamDepthChart {
    /// Player ids listed at a slot, starter first.
    #[must_use]
    pub fn position(&self, slot: &str) -> Option<&[String]> {
        self.0.get(slot).map(Vec::as_slice)
    }

    /// Every slot and its players, sorted by slot name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for TeamDepthChart {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Option<Vec<String>>>>::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(k, v)| (k, v.unwrap_or_default()))
                .collect(),
        ))
    }
}
