//! sleeper-rs: an async client for the Sleeper fantasy sports API.
//!
//! Every endpoint is a method on [`SleeperClient`]. All requests share one
//! rate limiter (1000 requests per minute by default) and fail with a
//! [`SleeperError`] carrying the HTTP status and URL when the API answers
//! with a non-2xx code.
//!
//! On top of the raw endpoints, [`SleeperClient::team_matchups`] and
//! [`SleeperClient::scoreboards`] join a league's users, rosters and weekly
//! matchups into head-to-head pairs.
//!
//! ```no_run
//! # async fn run() -> Result<(), sleeper_rs::SleeperError> {
//! let client = sleeper_rs::SleeperClient::new()?;
//! for board in client.scoreboards("289646328504385536", 0).await? {
//!     println!("{} {} - {} {}", board.team_name_1, board.points_1, board.points_2, board.team_name_2);
//! }
//! # Ok(())
//! # }
//! ```

pub mod avatar;
pub mod core;
pub mod draft;
pub mod fantasy;
pub mod league;
pub mod players;
pub mod schedule;
pub mod types;
pub mod user;

pub use crate::core::{
    ClientOptions, FantasyDataSource, Opaque, SleeperClient, SleeperClientBuilder, SleeperError,
    StatLine,
};
pub use draft::{Draft, DraftPick};
pub use fantasy::{Scoreboard, TeamInfo, TeamMatchup};
pub use league::{
    BracketMatchup, League, LeagueUser, Matchup, Roster, SportState, TradedPick, Transaction,
};
pub use players::{
    Player, PlayerResearch, PlayerStats, Players, Projection, TeamDepthChart, TrendingBuilder,
    TrendingPlayer, load_players,
};
pub use schedule::ScheduledGame;
pub use types::{SeasonType, TrendingKind};
pub use user::User;
