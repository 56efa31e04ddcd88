//! League lookups: metadata, rosters, users, matchups, brackets, transactions.

mod api;
mod model;

pub use model::{
    BracketMatchup, BracketSource, League, LeagueSettings, LeagueUser, LeagueUserMetadata,
    Matchup, Roster, RosterSettings, SportState, Transaction, TradedPick,
};
