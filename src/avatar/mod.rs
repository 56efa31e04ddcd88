//! Avatar images from the Sleeper CDN. These return raw image bytes, not JSON.

use crate::core::{SleeperClient, SleeperError};

impl SleeperClient {
    /// Fetches a full-size avatar image.
    /// (GET `https://sleepercdn.com/avatars/<avatar_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the CDN answers with a non-2xx status.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn avatar(&self, avatar_id: &str) -> Result<Vec<u8>, SleeperError> {
        let url = self.avatar_endpoint([avatar_id])?;
        self.get_bytes(url, "avatar").await
    }

    /// Fetches an avatar thumbnail.
    /// (GET `https://sleepercdn.com/avatars/thumbs/<avatar_id>`)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the CDN answers with a non-2xx status.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn avatar_thumbnail(&self, avatar_id: &str) -> Result<Vec<u8>, SleeperError> {
        let url = self.avatar_endpoint(["thumbs", avatar_id])?;
        self.get_bytes(url, "avatar_thumb").await
    }
}
