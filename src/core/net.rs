use crate::core::{SleeperError, client::constants::status_reason};

#[cfg(feature = "test-mode")]
use std::env;

/// Classify the response status and read the body as bytes.
///
/// Non-2xx statuses become `SleeperError::Status`. In `test-mode`, if
/// `SLEEPER_RECORD=1`, successful bodies are saved as fixtures.
pub(crate) async fn read_body(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
) -> Result<Vec<u8>, SleeperError> {
    let status = resp.status();
    if !status.is_success() {
        let code = status.as_u16();
        #[cfg(feature = "tracing")]
        tracing::warn!(status = code, url = %resp.url(), "non-success response");
        return Err(SleeperError::Status {
            status: code,
            reason: status_reason(code),
            url: resp.url().to_string(),
        });
    }

    let body = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("SLEEPER_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, &body)
        {
            eprintln!("SLEEPER_RECORD: failed to write fixture for {_endpoint}/{_key}: {e}");
        }
    }

    Ok(body)
}

/// Decode a JSON body, surfacing the decoder's error unchanged.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, SleeperError> {
    serde_json::from_slice(body).map_err(SleeperError::Json)
}

/// A stable fixture key for a URL: the path below the resource family, joined by `-`.
///
/// `/v1/league/123/matchups/4` becomes `123-matchups-4`, `/v1/state/nfl` becomes `nfl`.
pub(crate) fn fixture_key(url: &url::Url) -> String {
    let key = url
        .path_segments()
        .map(|segs| {
            segs.filter(|s| !s.is_empty())
                .skip_while(|s| *s == "v1")
                .skip(1)
                .collect::<Vec<_>>()
                .join("-")
        })
        .unwrap_or_default();
    if key.is_empty() { "root".to_string() } else { key }
}
