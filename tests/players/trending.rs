use httpmock::Method::GET;
use sleeper_rs::TrendingKind;

use crate::common;

#[tokio::test]
async fn trending_sends_lookback_and_limit() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/players/nfl/trending/drop")
            .query_param("lookback_hours", "12")
            .query_param("limit", "5");
        then.status(200)
            .body(r#"[{"player_id":"4034","count":412},{"player_id":"1466","count":7}]"#);
    });
    let client = common::client_for(&server);

    let trending = client
        .trending("nfl", TrendingKind::Drop)
        .lookback_hours(12)
        .limit(5)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(trending.len(), 2);
    assert_eq!(trending[0].player_id, "4034");
    assert_eq!(trending[0].count, 412);
}

#[tokio::test]
async fn trending_players_uses_api_defaults() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/players/nfl/trending/add");
        then.status(200).body(r#"[{"player_id":"4034","count":1000}]"#);
    });
    let client = common::client_for(&server);

    let trending = client
        .trending_players("nfl", TrendingKind::Add)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(trending[0].count, 1000);
}
