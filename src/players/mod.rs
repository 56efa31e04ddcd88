//! Player directory, trending players, and the undocumented NFL stats endpoints.

mod api;
mod model;
mod store;
mod trending;

pub use model::{
    Player, PlayerResearch, PlayerStats, Players, Projection, TeamDepthChart, TrendingPlayer,
};
pub use store::load_players;
pub use trending::TrendingBuilder;
