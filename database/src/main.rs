use clap::{Parser, Subcommand};
use std::error::Error;

mod commands;
mod config;

/// Provisions and maintains the Launchpad Postgres database
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database named in DATABASE_URL, or `--name`
    Create {
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply pending schema migrations
    Migrate {
        /// Apply at most this many pending migrations
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Drop every table, then migrate from scratch
    Reset,
    /// List applied and pending migrations
    Status,
    /// Insert the demo startups when the startups table is empty
    Seed,
}

async fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Create { name } => commands::create::execute(name).await,
        Commands::Migrate { steps } => commands::migrate::execute(steps).await,
        Commands::Reset => commands::migrate::reset().await,
        Commands::Status => commands::migrate::status().await,
        Commands::Seed => commands::seed::execute().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command).await {
        tracing::error!("Command failed: {}", err);
        return Err(err);
    }

    Ok(())
}
