use httpmock::Method::GET;

use crate::common::{self, LEAGUE_ID};

#[tokio::test]
async fn offline_league_uses_recorded_fixture() {
    let server = common::setup_server();
    let mock = common::mock_league(&server);
    let client = common::client_for(&server);

    let league = client.league(LEAGUE_ID).await.unwrap();

    mock.assert();
    assert_eq!(league.league_id, LEAGUE_ID);
    assert_eq!(league.name, "Sleeperbot Friends League");
    assert_eq!(league.sport, "nfl");
    assert_eq!(league.total_rosters, 2);
    assert_eq!(league.roster_positions.len(), 11);
    assert_eq!(league.settings.playoff_week_start, Some(15));
    assert_eq!(league.scoring_settings.get("pass_td"), Some(4.0));
    assert_eq!(league.scoring_settings.get("bonus_rec_te"), None);
}

#[tokio::test]
async fn offline_rosters_users_and_matchups() {
    let server = common::setup_server();
    let (m_matchups, m_rosters, m_users) = common::mock_league_week(&server, 1);
    let client = common::client_for(&server);

    let matchups = client.matchups(LEAGUE_ID, 1).await.unwrap();
    let rosters = client.rosters(LEAGUE_ID).await.unwrap();
    let users = client.league_users(LEAGUE_ID).await.unwrap();

    m_matchups.assert();
    m_rosters.assert();
    m_users.assert();

    assert_eq!(matchups.len(), 2);
    assert_eq!(matchups[0].matchup_id, Some(2));
    assert_eq!(matchups[1].points, 90.5);

    assert_eq!(rosters[0].owner_id.as_deref(), Some("188815879448829952"));
    assert_eq!((rosters[0].settings.wins, rosters[0].settings.losses), (5, 2));
    assert!((rosters[0].settings.points_for() - 1617.78).abs() < 1e-9);
    assert!(rosters[1].reserve.is_empty());

    assert_eq!(users[0].metadata.team_name.as_deref(), Some("Dezpacito"));
    assert_eq!(users[1].metadata.team_name, None);
    assert_eq!(users[1].avatar, None);
}

#[tokio::test]
async fn sport_state_hits_versioned_path() {
    let server = common::setup_server();
    let mock = common::mock_state(&server, "regular", 5);
    let client = common::client_for(&server);

    let state = client.sport_state("nfl").await.unwrap();

    mock.assert();
    assert_eq!(state.week, 5);
    assert_eq!(state.season_type, "regular");
}

#[tokio::test]
async fn brackets_transactions_and_traded_picks() {
    let server = common::setup_server();
    let winners = common::mock_json(
        &server,
        &format!("/v1/league/{LEAGUE_ID}/winners_bracket"),
        r#"[{"r":1,"m":1,"t1":3,"t2":6,"w":null,"l":null},
            {"r":2,"m":5,"t1":1,"t2":3,"t1_from":{"w":1},"t2_from":{"w":2},"w":1,"l":3,"p":1},
            {"r":2,"m":6,"t1":null,"t2":null,"t1_from":{"l":1},"t2_from":{"l":2},"w":null,"l":null,"p":3}]"#
            .to_string(),
    );
    let losers = common::mock_json(
        &server,
        &format!("/v1/league/{LEAGUE_ID}/losers_bracket"),
        "[]".to_string(),
    );
    let txs = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/league/{LEAGUE_ID}/transactions/3"));
        then.status(200).body(
            r#"[{"type":"trade","transaction_id":"434852362033561600","status":"complete",
                 "roster_ids":[2,1],"adds":{"4035":1},"drops":{"4035":2},"leg":3,
                 "draft_picks":[{"season":"2025","round":5,"roster_id":1,"previous_owner_id":1,"owner_id":2}],
                 "waiver_budget":[],"consenter_ids":[2,1],"creator":"160000000000000000",
                 "created":1558039402803,"status_updated":1558039402803,"settings":null,"metadata":null}]"#,
        );
    });
    let picks = common::mock_json(
        &server,
        &format!("/v1/league/{LEAGUE_ID}/traded_picks"),
        r#"[{"season":"2025","round":5,"roster_id":1,"previous_owner_id":1,"owner_id":2}]"#
            .to_string(),
    );
    let client = common::client_for(&server);

    let w = client.winners_bracket(LEAGUE_ID).await.unwrap();
    let l = client.losers_bracket(LEAGUE_ID).await.unwrap();
    let t = client.transactions(LEAGUE_ID, 3).await.unwrap();
    let p = client.league_traded_picks(LEAGUE_ID).await.unwrap();

    winners.assert();
    losers.assert();
    txs.assert();
    picks.assert();

    assert_eq!(w.len(), 3);
    assert_eq!(w[1].winner, Some(1));
    assert_eq!(w[1].team_1_from.as_ref().and_then(|s| s.winner_of), Some(1));
    assert_eq!(w[2].placement, Some(3));
    assert_eq!(w[2].team_1, None);
    assert!(l.is_empty());
    assert_eq!(t[0].kind, "trade");
    assert_eq!(t[0].roster_ids, vec![2, 1]);
    assert_eq!(p[0].owner_id, 2);
}
