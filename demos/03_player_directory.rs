use sleeper_rs::{SeasonType, SleeperClient, TrendingKind, load_players};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SleeperClient::new()?;

    // 1. The full directory is ~5MB; fetch it once and cache it on disk.
    let cache = std::env::temp_dir().join("sleeper_nfl_players.json");
    let players = if cache.exists() {
        load_players(&cache).await?
    } else {
        client.save_all_players("nfl", &cache).await?;
        load_players(&cache).await?
    };
    println!("{} players cached at {}", players.len(), cache.display());

    // 2. Who is being added right now.
    let trending = client
        .trending("nfl", TrendingKind::Add)
        .lookback_hours(24)
        .limit(10)
        .fetch()
        .await?;
    println!("--- Trending adds (24h) ---");
    for t in &trending {
        let name = players.get(&t.player_id).map(|p| p.name()).unwrap_or_default();
        println!("  {:<24} +{}", name, t.count);
    }
    println!();

    // 3. Depth chart and schedule.
    let chart = client.nfl_team_depth_chart("KC").await?;
    if let Some(qbs) = chart.position("QB") {
        let names: Vec<String> = qbs
            .iter()
            .map(|id| players.get(id).map_or_else(|| id.clone(), |p| p.name()))
            .collect();
        println!("KC quarterbacks: {}", names.join(", "));
    }

    let games = client.nfl_schedule(2024, SeasonType::Regular).await?;
    println!("2024 regular season: {} games", games.len());

    Ok(())
}
