use anyhow::Context;
use clap::{Parser, Subcommand};
use sea_orm::EntityTrait;
use tracing::info;

use db::config::AppConfig;
use db::database;
use db::entity::submission;
use db::feedback::Feedback;
use db::seed;

/// Database bootstrap for the Robusta model-evaluation platform.
#[derive(Parser)]
#[command(name = "robusta-db", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drop, recreate, and seed the schema with the fixed sample rows
    Init,
    /// Print the feedback document of submission 1
    Test,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load config")?;
    let db = database::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Command::Init => {
            seed::reset_schema(&db)
                .await
                .context("Failed to reset schema")?;
            seed::seed_sample_data(&db)
                .await
                .context("Failed to seed sample data")?;
            info!("Database initialized");
        }
        Command::Test => {
            let row = submission::Entity::find_by_id(1)
                .one(&db)
                .await
                .context("Failed to query submission 1")?
                .context("Submission 1 not found; run `init` first")?;

            let feedback = Feedback::from_column(row.feedback.as_ref())
                .context("Submission 1 carries a malformed feedback document")?;
            match feedback.to_column() {
                Some(doc) => println!("{doc}"),
                None => println!("EMPTY FEEDBACK"),
            }
        }
    }

    Ok(())
}
