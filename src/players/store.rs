//! Local persistence for the (large) player directory.

use std::path::Path;

use crate::{
    core::{SleeperClient, SleeperError, net},
    players::model::Players,
};

impl SleeperClient {
    /// Fetches the full player directory for a sport.
    /// (GET `/v1/players/<sport>`)
    ///
    /// The payload is around 5MB. Sleeper asks that it is fetched at most once a
    /// day; prefer [`SleeperClient::save_all_players`] + [`load_players`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn all_players(&self, sport: &str) -> Result<Players, SleeperError> {
        let url = self.api_url(["v1", "players", sport])?;
        self.get_json(url, "players").await
    }

    /// Fetches the full player directory and writes the body verbatim to `path`.
    ///
    /// Returns the number of bytes written. Nothing is written if the request fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the file cannot be written.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path), err, fields(path = %path.as_ref().display())))]
    pub async fn save_all_players(
        &self,
        sport: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, SleeperError> {
        let url = self.api_url(["v1", "players", sport])?;
        let body = self.get_bytes(url, "players").await?;
        tokio::fs::write(path.as_ref(), &body).await?;
        Ok(body.len())
    }
}

/// Reads a player directory previously written by [`SleeperClient::save_all_players`].
/// No network access.
///
/// # Errors
///
/// Returns `SleeperError::Io` if the file cannot be read, or `SleeperError::Json` if it
/// is not a player directory.
pub async fn load_players(path: impl AsRef<Path>) -> Result<Players, SleeperError> {
    let data = tokio::fs::read(path.as_ref()).await?;
    net::decode(&data)
}
