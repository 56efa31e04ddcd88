use std::collections::HashMap;

use crate::{
    core::{SleeperClient, SleeperError},
    players::model::{Player, PlayerResearch, PlayerStats, Projection, TeamDepthChart},
    types::SeasonType,
};

/// Positions requested from the projections endpoint.
const PROJECTION_POSITIONS: [&str; 7] = ["FLEX", "K", "QB", "RB", "TE", "WR", "DEF"];

// The endpoints below are not part of the documented v1 API and live at the root.
impl SleeperClient {
    /// Fetches one NFL player.
    /// (GET `/player/nfl/<player_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_player(&self, player_id: &str) -> Result<Player, SleeperError> {
        let url = self.api_url(["player", "nfl", player_id])?;
        self.get_json(url, "nfl_player").await
    }

    /// Roster and start percentages for every player in one week, keyed by player id.
    /// (GET `/players/nfl/research/<regular|post>/<year>/<week>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_player_research(
        &self,
        year: i32,
        week: u32,
        season_type: SeasonType,
    ) -> Result<HashMap<String, PlayerResearch>, SleeperError> {
        let (year, week) = (year.to_string(), week.to_string());
        let url = self.api_url([
            "players",
            "nfl",
            "research",
            season_type.as_str(),
            year.as_str(),
            week.as_str(),
        ])?;
        self.get_json(url, "nfl_research").await
    }

    /// Season totals for one player.
    /// (GET `/stats/nfl/player/<player_id>?season_type=<regular|post>&season=<year>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_player_season_stats(
        &self,
        player_id: &str,
        year: i32,
        season_type: SeasonType,
    ) -> Result<PlayerStats, SleeperError> {
        let mut url = self.api_url(["stats", "nfl", "player", player_id])?;
        url.query_pairs_mut()
            .append_pair("season_type", season_type.as_str())
            .append_pair("season", &year.to_string());
        self.get_json(url, "nfl_season_stats").await
    }

    /// A team's depth chart.
    /// (GET `/player/nfl/<team>/depth_chart`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_team_depth_chart(&self, team: &str) -> Result<TeamDepthChart, SleeperError> {
        let url = self.api_url(["player", "nfl", team, "depth_chart"])?;
        self.get_json(url, "nfl_depth_chart").await
    }

    /// Regular-season projections for the fantasy-relevant positions.
    /// (GET `/projections/nfl/<season>/<week>?season_type=regular&position[]=...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn nfl_projections(
        &self,
        season: i32,
        week: u32,
    ) -> Result<Vec<Projection>, SleeperError> {
        let (season, week) = (season.to_string(), week.to_string());
        let mut url = self.api_url(["projections", "nfl", season.as_str(), week.as_str()])?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("season_type", SeasonType::Regular.as_str());
            for pos in PROJECTION_POSITIONS {
                qp.append_pair("position[]", pos);
            }
        }
        self.get_json(url, "nfl_projections").await
    }
}
