use crate::common::{self, LEAGUE_ID};

#[tokio::test]
async fn team_matchups_pair_both_rosters() {
    let server = common::setup_server();
    let league = common::mock_league(&server);
    let (matchups, rosters, users) = common::mock_league_week(&server, 1);
    let client = common::client_for(&server);

    let pairs = client.team_matchups(LEAGUE_ID, 1).await.unwrap();

    league.assert_hits(0);
    matchups.assert();
    rosters.assert();
    users.assert();

    assert_eq!(pairs.len(), 1);
    let p = &pairs[0];
    assert_eq!(p.matchup_id, 2);
    assert_eq!(p.team_name_1, "Dezpacito");
    assert_eq!(p.team_name_2, "Team Gronk");
    assert_eq!((p.team_1_wins, p.team_1_losses), (5, 2));
    assert_eq!((p.team_2_wins, p.team_2_losses), (3, 4));
}

#[tokio::test]
async fn scoreboards_carry_weekly_points() {
    let server = common::setup_server();
    let _mocks = common::mock_league_week(&server, 1);
    let client = common::client_for(&server);

    let boards = client.scoreboards(LEAGUE_ID, 1).await.unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].team_name_1, "Dezpacito");
    assert_eq!(boards[0].points_1, 100.5);
    assert_eq!(boards[0].team_name_2, "Team Gronk");
    assert_eq!(boards[0].points_2, 90.5);
}

#[tokio::test]
async fn fantasy_info_follows_user_order() {
    let server = common::setup_server();
    let _mocks = common::mock_league_week(&server, 1);
    let client = common::client_for(&server);

    let teams = client.fantasy_info(LEAGUE_ID, 1).await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].owner_id, "188815879448829952");
    assert_eq!(teams[0].display_name, "sleeperuser");
    assert_eq!(teams[0].roster_id, 1);
    assert_eq!(teams[1].owner_id, "331222445627224064");
    assert_eq!(teams[1].roster_id, 2);
    assert!(teams.iter().all(|t| t.week == 1 && t.matchup_id == 2));
}
