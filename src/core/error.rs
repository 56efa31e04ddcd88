use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SleeperError {
    /// An error occurred during an HTTP request (connection failure, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error(
        "web request error: {status}{} ({url})",
        .reason.map(|r| format!(" {r}")).unwrap_or_default()
    )]
    Status {
        /// The HTTP status code.
        status: u16,
        /// A human-readable label for the well-known codes, `None` otherwise.
        reason: Option<&'static str>,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body could not be decoded into the expected schema.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a local player file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot have path segments appended to it.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The client configuration was rejected at build time.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// A year outside the range the API has data for.
    #[error("invalid year {year}: must be between {min} and {max}")]
    InvalidYear {
        /// The requested year.
        year: i32,
        /// The earliest year with data.
        min: i32,
        /// The latest year with data (the current year).
        max: i32,
    },

    /// A sub-request of a composite operation failed.
    #[error("failed to fetch {what}: {source}")]
    Fetch {
        /// Which sub-request failed (e.g. `"rosters"`).
        what: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<SleeperError>,
    },
}

impl SleeperError {
    /// Wraps `self` with the name of the sub-request that produced it.
    pub(crate) fn while_fetching(self, what: &'static str) -> Self {
        Self::Fetch {
            what,
            source: Box::new(self),
        }
    }

    /// The HTTP status code behind this error, looking through any `Fetch` context.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Fetch { source, .. } => source.status(),
            _ => None,
        }
    }

    /// The innermost error, with all `Fetch` context removed.
    #[must_use]
    pub fn root(&self) -> &SleeperError {
        match self {
            Self::Fetch { source, .. } => source.root(),
            other => other,
        }
    }
}
