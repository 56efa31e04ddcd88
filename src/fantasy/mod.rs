//! Fantasy info: joins a league's users, rosters and weekly matchups into per-team
//! records, then pairs teams that meet in the same matchup.
//!
//! The correlation runs against any [`FantasyDataSource`]; [`SleeperClient`] implements
//! it and exposes the same operations as methods.
//!
//! [`SleeperClient`]: crate::SleeperClient

mod api;
mod join;
mod model;

pub use api::{fantasy_info, resolve_week, scoreboards, team_matchups};
pub use model::{Scoreboard, TeamInfo, TeamMatchup};

#[doc(no_inline)]
pub use crate::core::FantasyDataSource;
