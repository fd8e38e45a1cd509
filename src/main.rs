use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use torneo_mus::api::state::AppState;
use torneo_mus::config::AppConfig;
use torneo_mus::models::{MatchId, TeamId};
use torneo_mus::storage::{JsonlStore, StorageConfig, TournamentStore};
use torneo_mus::tournament::Tournament;

#[derive(Parser)]
#[command(name = "torneo-mus")]
#[command(about = "Round-robin mus tournament tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Register a team
    AddTeam {
        /// Team display name
        #[arg(long)]
        name: String,

        /// First player
        #[arg(long)]
        player1: String,

        /// Second player
        #[arg(long)]
        player2: String,
    },

    /// Generate the round-robin schedule (one-shot)
    Generate,

    /// Record a game result against a match
    Record {
        /// Match id (see `matches`)
        #[arg(long)]
        match_id: String,

        /// Points for the first team of the pairing
        #[arg(long)]
        score_a: u32,

        /// Points for the second team of the pairing
        #[arg(long)]
        score_b: u32,
    },

    /// List all matches with their current state
    Matches,

    /// Show the current ranking
    Ranking,

    /// Show tournament progress
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(std::path::Path::new(&cli.config))?;
    let data_dir = cli
        .data_dir
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let store = JsonlStore::new(StorageConfig::new(data_dir));

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::load(Arc::new(store))?;
            let app = torneo_mus::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::AddTeam {
            name,
            player1,
            player2,
        } => {
            let mut tournament = store.load()?;
            let team = tournament.add_team(&name, &player1, &player2)?;
            let (saved_name, saved_id) = (team.name.clone(), team.id.clone());
            store.save_teams(tournament.teams())?;
            println!("Registered team: {} ({})", saved_name, saved_id);
            println!("Teams so far: {}", tournament.teams().len());
        }
        Commands::Generate => {
            let mut tournament = store.load()?;
            tournament.generate_schedule()?;
            store.save_matches(tournament.matches())?;

            println!(
                "\n=== Schedule ({} matches) ===\n",
                tournament.matches().len()
            );
            for m in tournament.matches() {
                println!(
                    "  {}  {} vs {}",
                    m.id,
                    team_name(&tournament, &m.team_a),
                    team_name(&tournament, &m.team_b),
                );
            }
        }
        Commands::Record {
            match_id,
            score_a,
            score_b,
        } => {
            let mut tournament = store.load()?;
            let id = MatchId::from(match_id);
            let updated = tournament.record_game(&id, score_a, score_b)?.clone();
            store.save_matches(tournament.matches())?;

            println!(
                "Game {}: {} {} - {} {}",
                updated.games.len(),
                team_name(&tournament, &updated.team_a),
                score_a,
                score_b,
                team_name(&tournament, &updated.team_b),
            );
            match updated.winner() {
                Some(winner) => println!(
                    "Match completed. Winner: {}",
                    team_name(&tournament, winner)
                ),
                None => println!(
                    "Match {} ({}-{})",
                    updated.status.label(),
                    updated.games_won(&updated.team_a),
                    updated.games_won(&updated.team_b),
                ),
            }
        }
        Commands::Matches => {
            let tournament = store.load()?;
            if tournament.matches().is_empty() {
                println!("No matches. Run `generate` after registering teams.");
                return Ok(());
            }

            println!("\n=== Matches ({}) ===\n", tournament.matches().len());
            for m in tournament.matches() {
                let score = format!(
                    "{}-{}",
                    m.games_won(&m.team_a),
                    m.games_won(&m.team_b)
                );
                println!(
                    "  [{:<11}] {:<20} vs {:<20} {}  {}",
                    m.status.label(),
                    team_name(&tournament, &m.team_a),
                    team_name(&tournament, &m.team_b),
                    score,
                    m.id,
                );
            }
        }
        Commands::Ranking => {
            let tournament = store.load()?;
            let ranking = tournament.ranking();

            println!("\n=== Ranking ===\n");
            println!(
                "  {:>3}  {:<20} {:>5} {:>9} {:>8} {:>8}",
                "#", "Team", "Vacas", "Dif.games", "Dif.pts", "Played"
            );
            for (i, s) in ranking.iter().enumerate() {
                println!(
                    "  {:>3}  {:<20} {:>5} {:>9} {:>8} {:>5}/{}",
                    i + 1,
                    s.team.name,
                    s.vacas_won,
                    s.games_diff,
                    s.points_diff,
                    s.matches_played,
                    s.matches_total,
                );
            }
        }
        Commands::Status => {
            let tournament = store.load()?;
            let summary = tournament.summary();
            println!("\n=== Tournament Status ===");
            println!("Teams:             {}", summary.teams);
            println!("Matches:           {}", summary.matches);
            println!("Completed:         {}", summary.completed_matches);
            println!("Progress:          {}%", summary.progress_percentage);
        }
    }

    Ok(())
}

fn team_name(tournament: &Tournament, id: &TeamId) -> String {
    tournament
        .teams()
        .iter()
        .find(|t| t.id == *id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string())
}
