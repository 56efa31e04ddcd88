use crate::{
    core::{SleeperClient, SleeperError},
    league::model::{BracketMatchup, League, LeagueUser, Matchup, Roster, SportState, Transaction, TradedPick},
};

impl SleeperClient {
    /// Fetches a league by id.
    /// (GET `/v1/league/<league_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn league(&self, league_id: &str) -> Result<League, SleeperError> {
        let url = self.api_url(["v1", "league", league_id])?;
        self.get_json(url, "league").await
    }

    /// Fetches all rosters in a league.
    /// (GET `/v1/league/<league_id>/rosters`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn rosters(&self, league_id: &str) -> Result<Vec<Roster>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "rosters"])?;
        self.get_json(url, "rosters").await
    }

    /// Fetches all users in a league.
    /// (GET `/v1/league/<league_id>/users`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn league_users(&self, league_id: &str) -> Result<Vec<LeagueUser>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "users"])?;
        self.get_json(url, "league_users").await
    }

    /// Fetches every roster's matchup entry for one week.
    /// (GET `/v1/league/<league_id>/matchups/<week>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn matchups(&self, league_id: &str, week: u32) -> Result<Vec<Matchup>, SleeperError> {
        let week = week.to_string();
        let url = self.api_url(["v1", "league", league_id, "matchups", week.as_str()])?;
        self.get_json(url, "matchups").await
    }

    /// Fetches the winners' playoff bracket.
    /// (GET `/v1/league/<league_id>/winners_bracket`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn winners_bracket(&self, league_id: &str) -> Result<Vec<BracketMatchup>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "winners_bracket"])?;
        self.get_json(url, "winners_bracket").await
    }

    /// Fetches the losers' (consolation) bracket.
    /// (GET `/v1/league/<league_id>/losers_bracket`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn losers_bracket(&self, league_id: &str) -> Result<Vec<BracketMatchup>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "losers_bracket"])?;
        self.get_json(url, "losers_bracket").await
    }

    /// Fetches the transactions processed in one round (usually a week).
    /// (GET `/v1/league/<league_id>/transactions/<round>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn transactions(
        &self,
        league_id: &str,
        round: u32,
    ) -> Result<Vec<Transaction>, SleeperError> {
        let round = round.to_string();
        let url = self.api_url(["v1", "league", league_id, "transactions", round.as_str()])?;
        self.get_json(url, "transactions").await
    }

    /// Fetches every traded future pick in a league.
    /// (GET `/v1/league/<league_id>/traded_picks`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn league_traded_picks(&self, league_id: &str) -> Result<Vec<TradedPick>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "traded_picks"])?;
        self.get_json(url, "league_traded_picks").await
    }

    /// Fetches the current week and season type for a sport.
    /// (GET `/v1/state/<sport>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn sport_state(&self, sport: &str) -> Result<SportState, SleeperError> {
        let url = self.api_url(["v1", "state", sport])?;
        self.get_json(url, "state").await
    }
}
