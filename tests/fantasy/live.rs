use sleeper_rs::SleeperClient;

use crate::common::{self, LEAGUE_ID};

#[tokio::test]
#[ignore]
async fn live_scoreboards_for_current_week() {
    if !common::live_or_record_enabled() {
        return;
    }

    let client = SleeperClient::new().unwrap();
    let week = client.resolve_week(LEAGUE_ID, 0).await.unwrap();
    assert!(week >= 1);

    let boards = client.scoreboards(LEAGUE_ID, 0).await.unwrap();
    let pairs = client.team_matchups(LEAGUE_ID, 0).await.unwrap();
    assert_eq!(boards.len(), pairs.len());
}
