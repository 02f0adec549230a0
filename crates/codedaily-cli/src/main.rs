use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "codedaily", version, about = "Code Daily CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with a display name
    Login {
        /// Name to greet you by
        name: String,
    },
    /// Log out; credits are kept
    Logout,
    /// Navigate to a view (hub, input, roadmap, aiRoadmap, ...)
    Goto {
        /// View name
        view: String,
    },
    /// Focus timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Collect the reward for a completed sprint
    Collect,
    /// Roadmap generator
    Roadmap {
        #[command(subcommand)]
        action: commands::roadmap::RoadmapAction,
    },
    /// Upgrade catalog and unlock progress
    Upgrades,
    /// Sprint statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Login { name } => commands::account::login(&name),
        Commands::Logout => commands::account::logout(),
        Commands::Goto { view } => commands::account::goto(&view),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Collect => commands::account::collect(),
        Commands::Roadmap { action } => commands::roadmap::run(action),
        Commands::Upgrades => commands::upgrades::run(),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "codedaily",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
