use crate::{
    core::{SleeperClient, SleeperError},
    draft::model::{Draft, DraftPick},
    league::TradedPick,
};

impl SleeperClient {
    /// Fetches every draft of a league, most recent first.
    /// (GET `/v1/league/<league_id>/drafts`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn league_drafts(&self, league_id: &str) -> Result<Vec<Draft>, SleeperError> {
        let url = self.api_url(["v1", "league", league_id, "drafts"])?;
        self.get_json(url, "league_drafts").await
    }

    /// Fetches one draft.
    /// (GET `/v1/draft/<draft_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn draft(&self, draft_id: &str) -> Result<Draft, SleeperError> {
        let url = self.api_url(["v1", "draft", draft_id])?;
        self.get_json(url, "draft").await
    }

    /// Fetches all picks made in a draft.
    /// (GET `/v1/draft/<draft_id>/picks`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>, SleeperError> {
        let url = self.api_url(["v1", "draft", draft_id, "picks"])?;
        self.get_json(url, "draft_picks").await
    }

    /// Fetches the picks traded within a draft.
    /// (GET `/v1/draft/<draft_id>/traded_picks`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn draft_traded_picks(&self, draft_id: &str) -> Result<Vec<TradedPick>, SleeperError> {
        let url = self.api_url(["v1", "draft", draft_id, "traded_picks"])?;
        self.get_json(url, "draft_traded_picks").await
    }
}
