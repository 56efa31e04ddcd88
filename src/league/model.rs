use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::wire::{Opaque, StatLine, lenient_i64, null_as_default};

/// A fantasy league.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct League {
    #[serde(deserialize_with = "null_as_default")]
    pub league_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `pre_draft`, `drafting`, `in_season` or `complete`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// `nfl`, `nba`, `lcs`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub sport: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_rosters: u32,
    pub draft_id: Option<String>,
    pub previous_league_id: Option<String>,
    pub avatar: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub roster_positions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: LeagueSettings,
    /// Points per stat key (`"pass_td" -> 4.0`).
    pub scoring_settings: StatLine,
    pub metadata: Opaque,
    pub bracket_id: Opaque,
    pub loser_bracket_id: Opaque,
    pub company_id: Opaque,
    pub group_id: Opaque,
    pub last_message_id: Option<String>,
    pub last_message_time: Option<i64>,
    pub display_order: Option<i64>,
}

/// The subset of league settings with a stable meaning. Anything else stays in the raw payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    #[serde(deserialize_with = "lenient_i64")]
    pub num_teams: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub playoff_teams: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub playoff_week_start: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub playoff_type: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub trade_deadline: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub draft_rounds: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub waiver_type: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub waiver_budget: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub waiver_clear_days: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub reserve_slots: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub taxi_slots: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub max_keepers: Option<i64>,
    /// 0 = redraft, 1 = keeper, 2 = dynasty.
    #[serde(rename = "type", deserialize_with = "lenient_i64")]
    pub league_type: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub leg: Option<i64>,
}

/// A league participant's roster and season record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    #[serde(deserialize_with = "null_as_default")]
    pub roster_id: u32,
    /// `None` for orphaned rosters.
    pub owner_id: Option<String>,
    pub co_owners: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub league_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reserve: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub taxi: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: RosterSettings,
    pub metadata: Opaque,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ties: u32,
    /// Whole part of points for; see `fpts_decimal`.
    #[serde(deserialize_with = "null_as_default")]
    pub fpts: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fpts_decimal: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fpts_against: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fpts_against_decimal: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_moves: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub waiver_position: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub waiver_budget_used: u32,
}

impl RosterSettings {
    /// Points for, joining the whole and hundredths parts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points_for(&self) -> f64 {
        self.fpts as f64 + self.fpts_decimal as f64 / 100.0
    }

    /// Points against, joining the whole and hundredths parts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn points_against(&self) -> f64 {
        self.fpts_against as f64 + self.fpts_against_decimal as f64 / 100.0
    }
}

/// A league member, as listed by `/league/<id>/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueUser {
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub avatar: Option<String>,
    pub league_id: Option<String>,
    pub is_owner: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_bot: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: LeagueUserMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueUserMetadata {
    /// The user-chosen team name; often absent.
    pub team_name: Option<String>,
    /// A custom team avatar URL.
    pub avatar: Option<String>,
    pub mention_pn: Option<String>,
    pub allow_pn: Option<String>,
}

/// One roster's weekly performance. Two entries sharing `matchup_id` play each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Matchup {
    #[serde(deserialize_with = "null_as_default")]
    pub roster_id: u32,
    /// `None` for rosters without an opponent (e.g. eliminated in the playoffs).
    pub matchup_id: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub points: f64,
    pub custom_points: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters_points: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub players_points: HashMap<String, f64>,
}

/// The upstream notion of "now" for a sport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SportState {
    #[serde(deserialize_with = "null_as_default")]
    pub week: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub display_week: u32,
    /// `pre`, `regular` or `post`.
    #[serde(deserialize_with = "null_as_default")]
    pub season_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
    pub previous_season: Option<String>,
    pub season_start_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub leg: u32,
    pub league_season: Option<String>,
    pub league_create_season: Option<String>,
}

/// A trade, waiver claim, free-agent move or commissioner action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_id: String,
    /// `trade`, `free_agent`, `waiver` or `commissioner`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// `complete`, `failed`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub leg: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    pub status_updated: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub roster_ids: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub consenter_ids: Vec<u32>,
    /// Player id -> receiving roster id.
    pub adds: Option<HashMap<String, u32>>,
    /// Player id -> releasing roster id.
    pub drops: Option<HashMap<String, u32>>,
    #[serde(deserialize_with = "null_as_default")]
    pub draft_picks: Vec<TradedPick>,
    #[serde(deserialize_with = "null_as_default")]
    pub waiver_budget: Vec<Opaque>,
    pub settings: Opaque,
    pub metadata: Opaque,
}

/// A draft pick that changed hands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradedPick {
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
    #[serde(deserialize_with = "null_as_default")]
    pub round: u32,
    /// The roster the pick originally belonged to.
    #[serde(deserialize_with = "null_as_default")]
    pub roster_id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_owner_id: u32,
    /// The roster that now holds the pick.
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: u32,
}

/// One game of a playoff bracket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketMatchup {
    /// Round.
    #[serde(rename = "r", deserialize_with = "null_as_default")]
    pub round: u32,
    /// Match id, unique within the bracket.
    #[serde(rename = "m", deserialize_with = "null_as_default")]
    pub match_id: u32,
    #[serde(rename = "t1")]
    pub team_1: Option<u32>,
    #[serde(rename = "t2")]
    pub team_2: Option<u32>,
    #[serde(rename = "w")]
    pub winner: Option<u32>,
    #[serde(rename = "l")]
    pub loser: Option<u32>,
    #[serde(rename = "t1_from")]
    pub team_1_from: Option<BracketSource>,
    #[serde(rename = "t2_from")]
    pub team_2_from: Option<BracketSource>,
    /// Final placement decided by this game, if any.
    #[serde(rename = "p")]
    pub placement: Option<u32>,
}

/// Where a bracket slot is filled from: the winner or loser of an earlier match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketSource {
    #[serde(rename = "w")]
    pub winner_of: Option<u32>,
    #[serde(rename = "l")]
    pub loser_of: Option<u32>,
}
