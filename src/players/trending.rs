use crate::{
    core::{SleeperClient, SleeperError},
    players::model::TrendingPlayer,
    types::TrendingKind,
};

/// A builder for the trending players lookup.
///
/// Without `lookback_hours`/`limit` the API uses its defaults (24 hours, 25 players).
pub struct TrendingBuilder {
    client: SleeperClient,
    sport: String,
    kind: TrendingKind,
    lookback_hours: Option<u32>,
    limit: Option<u32>,
}

impl TrendingBuilder {
    /// Creates a new `TrendingBuilder` for a sport and direction.
    pub fn new(client: &SleeperClient, sport: impl Into<String>, kind: TrendingKind) -> Self {
        Self {
            client: client.clone(),
            sport: sport.into(),
            kind,
            lookback_hours: None,
            limit: None,
        }
    }

    /// Sets how many hours back to count adds or drops.
    #[must_use]
    pub const fn lookback_hours(mut self, hours: u32) -> Self {
        self.lookback_hours = Some(hours);
        self
    }

    /// Sets the maximum number of players returned.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Executes the request.
    /// (GET `/v1/players/<sport>/trending/<add|drop>?lookback_hours=<h>&limit=<n>`)
    ///
    /// # Errors
    ///
    /// Returns a `SleeperError` if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(sport = %self.sport, kind = %self.kind)))]
    pub async fn fetch(self) -> Result<Vec<TrendingPlayer>, SleeperError> {
        let mut url = self
            .client
            .api_url(["v1", "players", self.sport.as_str(), "trending", self.kind.as_str()])?;
        if self.lookback_hours.is_some() || self.limit.is_some() {
            let mut qp = url.query_pairs_mut();
            if let Some(h) = self.lookback_hours {
                qp.append_pair("lookback_hours", &h.to_string());
            }
            if let Some(l) = self.limit {
                qp.append_pair("limit", &l.to_string());
            }
        }
        self.client.get_json(url, "trending").await
    }
}

impl SleeperClient {
    /// Players with the most adds or drops over the last 24 hours.
    ///
    /// Use [`SleeperClient::trending`] to set the lookback window or result count.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn trending_players(
        &self,
        sport: &str,
        kind: TrendingKind,
    ) -> Result<Vec<TrendingPlayer>, SleeperError> {
        TrendingBuilder::new(self, sport, kind).fetch().await
    }

    /// Starts a configurable trending players request.
    pub fn trending(&self, sport: impl Into<String>, kind: TrendingKind) -> TrendingBuilder {
        TrendingBuilder::new(self, sport, kind)
    }
}
