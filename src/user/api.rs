use crate::{
    core::{SleeperClient, SleeperError},
    draft::Draft,
    league::League,
    user::model::User,
};

impl SleeperClient {
    /// Fetches a user by username or user id; the endpoint accepts either.
    /// (GET `/v1/user/<username or user_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn user(&self, username_or_id: &str) -> Result<User, SleeperError> {
        let url = self.api_url(["v1", "user", username_or_id])?;
        self.get_json(url, "user").await
    }

    /// Fetches a user by username.
    ///
    /// # Errors
    ///
    /// See [`SleeperClient::user`].
    pub async fn user_by_username(&self, username: &str) -> Result<User, SleeperError> {
        self.user(username).await
    }

    /// Fetches a user by user id.
    ///
    /// # Errors
    ///
    /// See [`SleeperClient::user`].
    pub async fn user_by_id(&self, user_id: &str) -> Result<User, SleeperError> {
        self.user(user_id).await
    }

    /// Fetches every league a user is in for a sport and season.
    /// (GET `/v1/user/<user_id>/leagues/<sport>/<season>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn user_leagues(
        &self,
        user_id: &str,
        sport: &str,
        season: &str,
    ) -> Result<Vec<League>, SleeperError> {
        let url = self.api_url(["v1", "user", user_id, "leagues", sport, season])?;
        self.get_json(url, "user_leagues").await
    }

    /// Fetches every draft a user took part in for a sport and season.
    /// (GET `/v1/user/<user_id>/drafts/<sport>/<season>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn user_drafts(
        &self,
        user_id: &str,
        sport: &str,
        season: &str,
    ) -> Result<Vec<Draft>, SleeperError> {
        let url = self.api_url(["v1", "user", user_id, "drafts", sport, season])?;
        self.get_json(url, "user_drafts").await
    }
}
