//! Public client surface + builder.
//! Internals are split into `limiter` (token bucket) and `constants` (UA + defaults).

pub(crate) mod constants;
mod limiter;

use crate::core::{SleeperError, net};
use constants::{
    DEFAULT_AVATAR_URL, DEFAULT_BASE_URL, DEFAULT_BURST, DEFAULT_RATE_LIMIT, DEFAULT_TIMEOUT,
    USER_AGENT,
};
use limiter::RequestLimiter;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Client for the read-only Sleeper API.
///
/// Every endpoint goes through one rate-limited GET. Cloning is cheap: clones share
/// the connection pool and the rate-limit bucket.
///
/// ```no_run
/// # use sleeper_rs::SleeperClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), sleeper_rs::SleeperError> {
/// let client = SleeperClient::new()?;
/// let state = client.sport_state("nfl").await?;
/// println!("week {} of the {} season", state.week, state.season);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: Url,
    avatar_url: Url,
    timeout: Duration,
    limiter: RequestLimiter,
}

impl SleeperClient {
    /// Create a new builder.
    pub fn builder() -> SleeperClientBuilder {
        SleeperClientBuilder::default()
    }

    /// Create a client with the default base URL, timeout and rate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, SleeperError> {
        Self::builder().build()
    }

    /// Create a client from a plain options struct. Unset fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the rate limit is invalid.
    pub fn with_options(opts: ClientOptions) -> Result<Self, SleeperError> {
        let mut b = Self::builder();
        if let Some(base) = opts.base_url.as_deref().filter(|s| !s.is_empty()) {
            b = b.base_url(Url::parse(base)?);
        }
        if let Some(t) = opts.timeout.filter(|t| !t.is_zero()) {
            b = b.timeout(t);
        }
        if let Some(rate) = opts.rate_limit {
            b = b.rate_limit(rate, opts.burst.unwrap_or(DEFAULT_BURST));
        } else if let Some(burst) = opts.burst {
            b = b.rate_limit(DEFAULT_RATE_LIMIT, burst);
        }
        b.build()
    }

    /// The API root every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configured `(requests per second, burst)` pair.
    pub fn rate_limit(&self) -> (f64, u32) {
        (self.limiter.rate(), self.limiter.burst())
    }

    /* -------- internal helpers used by endpoint modules -------- */

    /// Appends percent-encoded path segments to the API root.
    pub(crate) fn api_url<I>(&self, segments: I) -> Result<Url, SleeperError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        append_segments(&self.base_url, segments)
    }

    pub(crate) fn avatar_endpoint<I>(&self, segments: I) -> Result<Url, SleeperError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        append_segments(&self.avatar_url, segments)
    }

    /// Single egress point: wait for a rate-limit permit, GET, classify the status.
    ///
    /// No retries are attempted. Dropping the future cancels both the permit wait
    /// and the in-flight request.
    pub(crate) async fn get_bytes(&self, url: Url, endpoint: &str) -> Result<Vec<u8>, SleeperError> {
        self.limiter.acquire().await;

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, endpoint, "GET");

        let key = net::fixture_key(&url);
        let resp = self.http.get(url).send().await?;
        net::read_body(resp, endpoint, &key).await
    }

    /// `get_bytes` followed by a JSON decode into `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        endpoint: &str,
    ) -> Result<T, SleeperError> {
        let body = self.get_bytes(url, endpoint).await?;
        net::decode(&body)
    }
}

fn append_segments<I>(base: &Url, segments: I) -> Result<Url, SleeperError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SleeperError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Plain options accepted by [`SleeperClient::with_options`].
///
/// `None`, empty strings and zero durations mean "use the default".
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Replaces the API root, typically to point at a test double.
    pub base_url: Option<String>,
    /// Overall request timeout. Default: one minute.
    pub timeout: Option<Duration>,
    /// Requests per second. Default: 1000 per minute.
    pub rate_limit: Option<f64>,
    /// Bucket size. Default: 1.
    pub burst: Option<u32>,
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SleeperClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    avatar_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    rate_limit: Option<(f64, u32)>,
}

impl SleeperClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API root (e.g., `https://api.sleeper.app`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the avatar CDN base (e.g., `https://sleepercdn.com/avatars/`).
    #[must_use]
    pub fn avatar_url(mut self, url: Url) -> Self {
        self.avatar_url = Some(url);
        self
    }

    /// Set the overall request timeout. Default: one minute. Zero keeps the default.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none. Zero means none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the rate limit as requests per second plus a burst size.
    /// Default: 1000 requests per minute, burst 1.
    #[must_use]
    pub fn rate_limit(mut self, per_second: f64, burst: u32) -> Self {
        self.rate_limit = Some((per_second, burst));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse, the rate limit is not a
    /// positive finite number with a non-zero burst, or the HTTP client cannot be built.
    pub fn build(self) -> Result<SleeperClient, SleeperError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let avatar_url = match self.avatar_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_AVATAR_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(SleeperError::InvalidBaseUrl(base_url.to_string()));
        }
        if avatar_url.cannot_be_a_base() {
            return Err(SleeperError::InvalidBaseUrl(avatar_url.to_string()));
        }

        let (rate, burst) = self.rate_limit.unwrap_or((DEFAULT_RATE_LIMIT, DEFAULT_BURST));
        let limiter = RequestLimiter::new(rate, burst)?;

        let timeout = self
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(timeout);
        if let Some(ct) = self.connect_timeout.filter(|t| !t.is_zero()) {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(SleeperClient {
            http,
            base_url,
            avatar_url,
            timeout,
            limiter,
        })
    }
}
