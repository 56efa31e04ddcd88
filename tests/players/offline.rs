use httpmock::Method::GET;
use sleeper_rs::SeasonType;

use crate::common;

#[tokio::test]
async fn undocumented_player_endpoints_live_at_the_root() {
    let server = common::setup_server();
    let player = common::mock_json(
        &server,
        "/player/nfl/4034",
        r#"{"player_id":"4034","full_name":"Christian McCaffrey","position":"RB","team":"SF","age":"28"}"#
            .to_string(),
    );
    let depth = common::mock_json(
        &server,
        "/player/nfl/KC/depth_chart",
        r#"{"QB":["4046","6804"],"RB":["4984"],"K":null}"#.to_string(),
    );
    let client = common::client_for(&server);

    let p = client.nfl_player("4034").await.unwrap();
    let chart = client.nfl_team_depth_chart("KC").await.unwrap();

    player.assert();
    depth.assert();
    assert_eq!(p.name(), "Christian McCaffrey");
    assert_eq!(p.age, Some(28));
    assert_eq!(chart.position("QB").map(<[String]>::len), Some(2));
    assert_eq!(chart.position("K"), Some(&[][..]));
}

#[tokio::test]
async fn research_is_keyed_by_player() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/players/nfl/research/post/2023/19",
        r#"{"4034":{"owned":99.7,"started":98.1},"1466":{"owned":"12.5"},"9999":{}}"#.to_string(),
    );
    let client = common::client_for(&server);

    let research = client
        .nfl_player_research(2023, 19, SeasonType::Post)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(research.len(), 3);
    assert_eq!(research["4034"].started, Some(98.1));
    assert_eq!(research["1466"].owned, Some(12.5));
    assert_eq!(research["1466"].started, None);
    assert_eq!(research["9999"].owned, None);
}

#[tokio::test]
async fn season_stats_send_season_type_and_year() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stats/nfl/player/4034")
            .query_param("season_type", "regular")
            .query_param("season", "2023");
        then.status(200).body(
            r#"{"player_id":"4034","season":"2023","season_type":"regular","category":"stat",
                "stats":{"pts_ppr":391.3,"rush_yd":1459.0,"gp":16,"note":"x"},
                "player":{"first_name":"Christian","last_name":"McCaffrey"},"week":null}"#,
        );
    });
    let client = common::client_for(&server);

    let stats = client
        .nfl_player_season_stats("4034", 2023, SeasonType::Regular)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(stats.stats.get("pts_ppr"), Some(391.3));
    assert_eq!(stats.stats.get("gp"), Some(16.0));
    assert_eq!(stats.stats.get("note"), None);
    assert_eq!(stats.player.name(), "Christian McCaffrey");
}

#[tokio::test]
async fn projections_request_regular_season() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/projections/nfl/2024/3")
            .query_param("season_type", "regular");
        then.status(200).body(
            r#"[{"player_id":"4034","week":3,"season":"2024","season_type":"regular","team":"SF",
                 "opponent":"LAR","stats":{"pts_ppr":22.4,"adp_ppr":1.0},"player":{"position":"RB"}},
                {"player_id":"DET","week":"3","stats":null,"player":null}]"#,
        );
    });
    let client = common::client_for(&server);

    let proj = client.nfl_projections(2024, 3).await.unwrap();

    mock.assert();
    assert_eq!(proj.len(), 2);
    assert_eq!(proj[0].stats.get("pts_ppr"), Some(22.4));
    assert_eq!(proj[1].week, Some(3));
    assert!(proj[1].stats.is_empty());
}
