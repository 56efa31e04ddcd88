#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use sleeper_rs::SleeperClient;
use std::{fs, path::Path};
use url::Url;

pub const LEAGUE_ID: &str = "289646328504385536";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client aimed at the mock server with a rate limit loose enough not to slow tests down.
pub fn client_for(server: &MockServer) -> SleeperClient {
    SleeperClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .avatar_url(Url::parse(&format!("{}/avatars/", server.base_url())).unwrap())
        .rate_limit(1000.0, 50)
        .build()
        .unwrap()
}

pub fn fixture(endpoint: &str, key: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_json<'a>(server: &'a MockServer, path: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_league(server: &MockServer) -> Mock<'_> {
    mock_json(
        server,
        &format!("/v1/league/{LEAGUE_ID}"),
        fixture("league", LEAGUE_ID),
    )
}

pub fn mock_state<'a>(server: &'a MockServer, season_type: &str, week: u32) -> Mock<'a> {
    mock_json(
        server,
        "/v1/state/nfl",
        format!(r#"{{"week":{week},"season_type":"{season_type}","season":"2024","display_week":{week}}}"#),
    )
}

/// Mocks the matchups, rosters and users lookups for the two-team test league.
pub fn mock_league_week(server: &MockServer, week: u32) -> (Mock<'_>, Mock<'_>, Mock<'_>) {
    let matchups = mock_json(
        server,
        &format!("/v1/league/{LEAGUE_ID}/matchups/{week}"),
        fixture("matchups", &format!("{LEAGUE_ID}-matchups-1")),
    );
    let rosters = mock_json(
        server,
        &format!("/v1/league/{LEAGUE_ID}/rosters"),
        fixture("rosters", &format!("{LEAGUE_ID}-rosters")),
    );
    let users = mock_json(
        server,
        &format!("/v1/league/{LEAGUE_ID}/users"),
        fixture("league_users", &format!("{LEAGUE_ID}-users")),
    );
    (matchups, rosters, users)
}

/// Live tests run only with `SLEEPER_LIVE=1`, or `SLEEPER_RECORD=1` to refresh fixtures
/// (the latter also needs `--features test-mode`).
pub fn live_or_record_enabled() -> bool {
    let on = |k: &str| std::env::var(k).ok().as_deref() == Some("1");
    on("SLEEPER_LIVE") || on("SLEEPER_RECORD")
}
