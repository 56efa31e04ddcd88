use httpmock::Method::GET;
use sleeper_rs::SeasonType;

use crate::common;

#[tokio::test]
async fn schedule_rejects_years_out_of_range_without_a_request() {
    use chrono::Datelike;

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path_includes("/schedule/nfl/");
        then.status(200).body("[]");
    });
    let client = common::client_for(&server);
    let next_year = chrono::Utc::now().year() + 1;

    for year in [2008, next_year] {
        let err = client
            .nfl_schedule(year, SeasonType::Regular)
            .await
            .unwrap_err();
        assert!(
            matches!(err, sleeper_rs::SleeperError::InvalidYear { year: y, .. } if y == year),
            "got {err:?}"
        );
    }
    mock.assert_hits(0);
}

#[tokio::test]
async fn schedule_for_a_valid_year() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/schedule/nfl/post/2023",
        r#"[{"week":1,"status":"complete","home":"KC","away":"MIA","game_id":"202301001","date":"2024-01-13"},
            {"week":"4","status":"pre_game","home":"KC","away":"SF","game_id":"202304001","date":"2024-02-11"}]"#
            .to_string(),
    );
    let client = common::client_for(&server);

    let games = client.nfl_schedule(2023, SeasonType::Post).await.unwrap();

    mock.assert();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].home, "KC");
    assert_eq!(games[1].week, Some(4));
    assert_eq!(games[1].status, "pre_game");
}
