use sleeper_rs::SleeperClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let league_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "289646328504385536".to_string());

    let client = SleeperClient::new()?;

    // 1. League metadata and the sport's current week.
    let league = client.league(&league_id).await?;
    let state = client.sport_state(&league.sport).await?;
    println!("--- {} ({} {}) ---", league.name, league.sport, league.season);
    println!("Status: {}, {} rosters", league.status, league.total_rosters);
    println!("Current week: {} ({})", state.week, state.season_type);
    println!();

    // 2. Standings, joined by hand from users and rosters.
    let users = client.league_users(&league_id).await?;
    let mut rosters = client.rosters(&league_id).await?;
    rosters.sort_by(|a, b| {
        b.settings
            .wins
            .cmp(&a.settings.wins)
            .then(b.settings.points_for().total_cmp(&a.settings.points_for()))
    });
    println!("--- Standings ---");
    for roster in &rosters {
        let owner = users
            .iter()
            .find(|u| Some(u.user_id.as_str()) == roster.owner_id.as_deref())
            .map_or("(orphan)", |u| u.display_name.as_str());
        println!(
            "  {:<20} {}-{}  {:.2} pts",
            owner,
            roster.settings.wins,
            roster.settings.losses,
            roster.settings.points_for()
        );
    }
    println!();

    // 3. Recent transactions.
    let txs = client.transactions(&league_id, state.week.max(1)).await?;
    println!("--- Week {} transactions: {} ---", state.week.max(1), txs.len());
    for tx in txs.iter().take(5) {
        println!("  {} ({})", tx.kind, tx.status);
    }

    Ok(())
}
