use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_client::api::{HttpResumeClient, ResumeApi};
use resume_client::config::ClientConfig;
use resume_client::local_store::FileStore;
use resume_client::sync::{ResumeSync, SaveOutcome};

/// Sync this profile's resume with the resume API.
#[derive(Parser)]
#[command(name = "resume-sync", version)]
struct Cli {
    /// Overrides RESUME_API_URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Overrides RESUME_PROFILE_DIR.
    #[arg(long)]
    profile_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the API is up.
    Status,
    /// Load the working resume and print it.
    Load,
    /// Replace the working resume with a JSON file and save it.
    Save { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(profile_dir) = cli.profile_dir {
        config.profile_dir = profile_dir;
    }

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = Arc::new(HttpResumeClient::new(&config.api_url)?);

    if let Command::Status = cli.command {
        let health = api.health().await.context("resume API is not reachable")?;
        println!("{}", serde_json::to_string(&health)?);
        return Ok(());
    }

    let store = FileStore::open(&config.profile_dir).with_context(|| {
        format!("cannot open profile directory {}", config.profile_dir.display())
    })?;
    let (mut sync, outcome) = ResumeSync::init(api, Arc::new(store)).await;
    info!("User {} loaded from {:?}", sync.user_id(), outcome.source);

    match cli.command {
        Command::Load => {
            println!("{}", serde_json::to_string_pretty(&sync.resume())?);
        }
        Command::Save { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let data: Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            match sync.edit(data).await {
                SaveOutcome::Saved { updated_at } => println!("saved at {updated_at}"),
                SaveOutcome::LocalOnly { error } => {
                    println!("saved locally only; remote save failed: {error}")
                }
                SaveOutcome::NothingToSave => println!("nothing to save"),
            }
        }
        Command::Status => {}
    }

    Ok(())
}
