use clap::Subcommand;
use codedaily_core::storage::Database;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Sprints completed today
    Today,
    /// All-time sprint totals
    All,
    /// Recent sprint history
    Recent {
        #[arg(long, default_value = "10")]
        limit: u32,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    match action {
        StatsAction::Today => {
            let stats = db.stats_today()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::All => {
            let stats = db.stats_all()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Recent { limit } => {
            let records = db.recent_sprints(limit)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
