//! Pure join/fold steps of the fantasy-info correlation.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{
    fantasy::model::{Scoreboard, TeamInfo, TeamMatchup},
    league::{LeagueUser, Matchup, Roster},
};

/// The team name shown for a user: their chosen name, or `Team <display name>`.
pub(crate) fn team_name(user: &LeagueUser) -> String {
    match user.metadata.team_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Team {}", user.display_name),
    }
}

/// Builds one `TeamInfo` per user, in user order.
///
/// The first roster owned by the user and the first matchup of that roster win.
/// Missing rosters or matchups leave the corresponding fields at zero.
pub(crate) fn join_teams(
    users: &[LeagueUser],
    rosters: &[Roster],
    matchups: &[Matchup],
    week: u32,
) -> Vec<TeamInfo> {
    users
        .iter()
        .map(|user| {
            let mut team = TeamInfo {
                display_name: user.display_name.clone(),
                owner_id: user.user_id.clone(),
                team_name: team_name(user),
                week,
                ..TeamInfo::default()
            };

            if let Some(roster) = rosters
                .iter()
                .find(|r| r.owner_id.as_deref() == Some(team.owner_id.as_str()))
            {
                team.wins = roster.settings.wins;
                team.losses = roster.settings.losses;
                team.roster_id = roster.roster_id;
            }

            if let Some(matchup) = matchups.iter().find(|m| m.roster_id == team.roster_id) {
                team.matchup_id = matchup.matchup_id.unwrap_or_default();
                team.points = matchup.points;
            }

            team
        })
        .collect()
}

/// Groups teams by matchup id. The first team seen seeds side 1; every later team with
/// the same id overwrites side 2. Output order is unspecified.
fn fold_pairs<P, S, F>(teams: &[TeamInfo], seed: S, fill: F) -> Vec<P>
where
    P: Default,
    S: Fn(&mut P, &TeamInfo),
    F: Fn(&mut P, &TeamInfo),
{
    let mut pairs: HashMap<u32, P> = HashMap::new();
    for team in teams {
        match pairs.entry(team.matchup_id) {
            Entry::Occupied(mut e) => fill(e.get_mut(), team),
            Entry::Vacant(e) => seed(e.insert(P::default()), team),
        }
    }
    pairs.into_values().collect()
}

pub(crate) fn pair_team_matchups(teams: &[TeamInfo]) -> Vec<TeamMatchup> {
    fold_pairs(
        teams,
        |m: &mut TeamMatchup, t| {
            m.matchup_id = t.matchup_id;
            m.team_name_1.clone_from(&t.team_name);
            m.team_1_wins = t.wins;
            m.team_1_losses = t.losses;
        },
        |m, t| {
            m.team_name_2.clone_from(&t.team_name);
            m.team_2_wins = t.wins;
            m.team_2_losses = t.losses;
        },
    )
}

pub(crate) fn pair_scoreboards(teams: &[TeamInfo]) -> Vec<Scoreboard> {
    fold_pairs(
        teams,
        |s: &mut Scoreboard, t| {
            s.matchup_id = t.matchup_id;
            s.team_name_1.clone_from(&t.team_name);
            s.points_1 = t.points;
        },
        |s, t| {
            s.team_name_2.clone_from(&t.team_name);
            s.points_2 = t.points;
        },
    )
}
