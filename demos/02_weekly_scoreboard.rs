use sleeper_rs::SleeperClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let league_id = args.next().unwrap_or_else(|| "289646328504385536".to_string());
    // 0 (or nothing) means "the current week"
    let week: i32 = args.next().map(|w| w.parse()).transpose()?.unwrap_or(0);

    let client = SleeperClient::builder().rate_limit(5.0, 1).build()?;

    let week_no = client.resolve_week(&league_id, week).await?;
    println!("--- Week {week_no} ---");

    let mut boards = client.scoreboards(&league_id, week_no as i32).await?;
    boards.sort_by_key(|b| b.matchup_id);
    for b in &boards {
        println!(
            "  #{:<2} {:>24} {:>7.2} - {:<7.2} {}",
            b.matchup_id, b.team_name_1, b.points_1, b.points_2, b.team_name_2
        );
    }
    println!();

    let mut pairs = client.team_matchups(&league_id, week_no as i32).await?;
    pairs.sort_by_key(|p| p.matchup_id);
    println!("--- Records ---");
    for p in &pairs {
        println!(
            "  {} ({}-{}) vs {} ({}-{})",
            p.team_name_1, p.team_1_wins, p.team_1_losses, p.team_name_2, p.team_2_wins, p.team_2_losses
        );
    }

    Ok(())
}
