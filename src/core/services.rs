use std::future::Future;
use std::pin::Pin;

use crate::core::SleeperError;
use crate::league::{League, LeagueUser, Matchup, Roster, SportState};

/// A boxed, sendable future returned by [`FantasyDataSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SleeperError>> + Send + 'a>>;

/// The league lookups the fantasy-info correlation needs.
///
/// This decouples the join logic in [`crate::fantasy`] from the HTTP client, so the
/// correlation can run against any source of league data. It is implemented by
/// [`crate::SleeperClient`].
pub trait FantasyDataSource: Send + Sync {
    /// A league's metadata (only `sport` is used by the correlation).
    fn league<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, League>;

    /// The current week and season type for a sport.
    fn sport_state<'a>(&'a self, sport: &'a str) -> SourceFuture<'a, SportState>;

    /// All matchups of a league for one week.
    fn matchups<'a>(&'a self, league_id: &'a str, week: u32) -> SourceFuture<'a, Vec<Matchup>>;

    /// All rosters of a league.
    fn rosters<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, Vec<Roster>>;

    /// All users of a league.
    fn league_users<'a>(&'a self, league_id: &'a str) -> SourceFuture<'a, Vec<LeagueUser>>;
}
