//! Centralized constants for default endpoints, limits and UA.

use std::time::Duration;

pub(crate) const USER_AGENT: &str = concat!("sleeper-rs/", env!("CARGO_PKG_VERSION"));

/// Sleeper API root. Documented endpoints live under `/v1`, the rest at the root.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.sleeper.app";

/// Avatar CDN base (avatar id is appended).
pub(crate) const DEFAULT_AVATAR_URL: &str = "https://sleepercdn.com/avatars/";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sleeper asks clients to stay under 1000 calls per minute.
pub(crate) const DEFAULT_RATE_LIMIT: f64 = 1000.0 / 60.0;

pub(crate) const DEFAULT_BURST: u32 = 1;

/// Status codes that get a human-readable label in `SleeperError::Status`.
pub(crate) const KNOWN_STATUS_REASONS: [(u16, &str); 5] = [
    (400, "Bad Request"),
    (404, "Not Found"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
    (503, "Service Unavailable"),
];

pub(crate) fn status_reason(status: u16) -> Option<&'static str> {
    KNOWN_STATUS_REASONS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, reason)| *reason)
}
