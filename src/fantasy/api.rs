use crate::{
    core::{FantasyDataSource, SleeperClient, SleeperError, SourceFuture},
    fantasy::{
        join,
        model::{Scoreboard, TeamInfo, TeamMatchup},
    },
    league::{League, LeagueUser, Matchup, Roster, SportState},
};

impl FantasyDataSource for SleeperClient {
    fn league<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, League> {
        Box::pin(Self::league(self, league_id))
    }

    fn sport_state<'a>(&'a self, sport: &'a str) -> SourceFuture<'a, SportState> {
        Box::pin(Self::sport_state(self, sport))
    }

    fn matchups<'a>(&'a self, league_id: &'a str, week: u32) -> SourceFuture<'a, Vec<Matchup>> {
        Box::pin(Self::matchups(self, league_id, week))
    }

    fn rosters<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, Vec<Roster>> {
        Box::pin(Self::rosters(self, league_id))
    }

    fn league_users<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, Vec<LeagueUser>> {
        Box::pin(Self::league_users(self, league_id))
    }
}

/// Turns a requested week into a concrete one.
///
/// A positive `week` is returned as is without any request. Otherwise the league's sport
/// state decides: week 1 during the preseason, else the sport's current week.
///
/// # Errors
///
/// Returns a [`SleeperError::Fetch`] naming the lookup (`league` or `sport state`) that failed.
pub async fn resolve_week<S>(source: &S, league_id: &str, week: i32) -> Result<u32, SleeperError>
where
    S: FantasyDataSource + ?Sized,
{
    if let Some(week) = u32::try_from(week).ok().filter(|w| *w > 0) {
        return Ok(week);
    }

    let league = source
        .league(league_id)
        .await
        .map_err(|e| e.while_fetching("league"))?;
    let state = source
        .sport_state(&league.sport)
        .await
        .map_err(|e| e.while_fetching("sport state"))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        sport = %league.sport,
        season_type = %state.season_type,
        week = state.week,
        "resolved current week"
    );

    Ok(if state.season_type == "pre" { 1 } else { state.week })
}

/// One [`TeamInfo`] per league user, in the order the league lists its users.
///
/// `week <= 0` means the current week (see [`resolve_week`]). Matchups, rosters and
/// users are fetched one after another; the first failure aborts the call.
///
/// # Errors
///
/// Returns a [`SleeperError::Fetch`] naming the lookup that failed.
pub async fn fantasy_info<S>(
    source: &S,
    league_id: &str,
    week: i32,
) -> Result<Vec<TeamInfo>, SleeperError>
where
    S: FantasyDataSource + ?Sized,
{
    let week = resolve_week(source, league_id, week).await?;

    let matchups = source
        .matchups(league_id, week)
        .await
        .map_err(|e| e.while_fetching("matchups"))?;
    let rosters = source
        .rosters(league_id)
        .await
        .map_err(|e| e.while_fetching("rosters"))?;
    let users = source
        .league_users(league_id)
        .await
        .map_err(|e| e.while_fetching("users"))?;

    Ok(join::join_teams(&users, &rosters, &matchups, week))
}

/// Teams paired by matchup, with each side's win/loss record.
///
/// One entry per distinct matchup id; order is unspecified.
///
/// # Errors
///
/// Propagates the errors of [`fantasy_info`].
pub async fn team_matchups<S>(
    source: &S,
    league_id: &str,
    week: i32,
) -> Result<Vec<TeamMatchup>, SleeperError>
where
    S: FantasyDataSource + ?Sized,
{
    let teams = fantasy_info(source, league_id, week).await?;
    Ok(join::pair_team_matchups(&teams))
}

/// Teams paired by matchup, with each side's points for the week.
///
/// One entry per distinct matchup id; order is unspecified.
///
/// # Errors
///
/// Propagates the errors of [`fantasy_info`].
pub async fn scoreboards<S>(
    source: &S,
    league_id: &str,
    week: i32,
) -> Result<Vec<Scoreboard>, SleeperError>
where
    S: FantasyDataSource + ?Sized,
{
    let teams = fantasy_info(source, league_id, week).await?;
    Ok(join::pair_scoreboards(&teams))
}

impl SleeperClient {
    /// The concrete week for `week`; `week <= 0` asks the API for the current one.
    ///
    /// # Errors
    ///
    /// See [`resolve_week`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn resolve_week(&self, league_id: &str, week: i32) -> Result<u32, SleeperError> {
        resolve_week(self, league_id, week).await
    }

    /// Per-team records for a league week. `week <= 0` means the current week.
    ///
    /// # Errors
    ///
    /// See [`fantasy_info`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fantasy_info(&self, league_id: &str, week: i32) -> Result<Vec<TeamInfo>, SleeperError> {
        fantasy_info(self, league_id, week).await
    }

    /// Head-to-head pairs with win/loss records. `week <= 0` means the current week.
    ///
    /// # Errors
    ///
    /// See [`fantasy_info`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn team_matchups(
        &self,
        league_id: &str,
        week: i32,
    ) -> Result<Vec<TeamMatchup>, SleeperError> {
        team_matchups(self, league_id, week).await
    }

    /// Head-to-head pairs with weekly points. `week <= 0` means the current week.
    ///
    /// # Errors
    ///
    /// See [`fantasy_info`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn scoreboards(&self, league_id: &str, week: i32) -> Result<Vec<Scoreboard>, SleeperError> {
        scoreboards(self, league_id, week).await
    }
}
