mod config;
mod entity;
mod error;
mod ingest;
mod youtube;

use colored::Colorize;
use config::Config;
use dotenv::dotenv;
use entity::{Blueprint, Entity};
use ingest::Ingestor;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube::YouTube;

async fn run(config: &Config) -> error::Result<Vec<Entity>> {
    let youtube = YouTube::new(&config.api_key, &config.api_base);
    let entities = Ingestor::new(youtube, config)
        .run(chrono::Utc::now())
        .await?;

    ingest::write_entities(&config.output, &entities)?;
    Ok(entities)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("using {}", config);

    match run(&config).await {
        Ok(entities) => {
            let videos = entities
                .iter()
                .filter(|e| e.blueprint == Blueprint::Video)
                .count();
            let playlists = entities.len() - videos;

            println!(
                "{} {} entities ({} playlist, {} videos) to {}",
                "wrote".green().bold(),
                entities.len(),
                playlists,
                videos,
                config.output.display().to_string().cyan()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
