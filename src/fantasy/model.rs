use serde::Serialize;

/// One league member's standing and weekly result, joined from users, rosters and matchups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamInfo {
    pub display_name: String,
    /// The user id that owns the roster.
    pub owner_id: String,
    /// 0 when the user owns no roster.
    pub roster_id: u32,
    /// 0 when the roster has no matchup that week.
    pub matchup_id: u32,
    pub points: f64,
    pub wins: u32,
    pub losses: u32,
    pub team_name: String,
    pub week: u32,
}

/// Two teams meeting in a week, with their season records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamMatchup {
    pub matchup_id: u32,
    pub team_name_1: String,
    pub team_name_2: String,
    pub team_1_wins: u32,
    pub team_1_losses: u32,
    pub team_2_wins: u32,
    pub team_2_losses: u32,
}

/// Two teams meeting in a week, with their points for that week.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scoreboard {
    pub matchup_id: u32,
    pub team_name_1: String,
    pub team_name_2: String,
    pub points_1: f64,
    pub points_2: f64,
}
