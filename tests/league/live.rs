use sleeper_rs::SleeperClient;

use crate::common::{self, LEAGUE_ID};

#[tokio::test]
#[ignore]
async fn live_league_smoke_and_or_record() {
    if !common::live_or_record_enabled() {
        return;
    }

    let client = SleeperClient::new().unwrap();

    let league = client.league(LEAGUE_ID).await.unwrap();
    assert_eq!(league.league_id, LEAGUE_ID);

    let state = client.sport_state(&league.sport).await.unwrap();
    assert!(!state.season_type.is_empty());

    let _ = client.rosters(LEAGUE_ID).await.unwrap();
    let _ = client.league_users(LEAGUE_ID).await.unwrap();
    let _ = client.matchups(LEAGUE_ID, 1).await.unwrap();
}
