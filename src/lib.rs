pub mod api;
pub mod browser;
pub mod cache;
pub mod cli;
pub mod clients;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use config::Config;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Commands::Daemon) => cli::cmd_daemon(config).await,

        Some(cli::Commands::Breeds) => cli::cmd_breeds(&config).await,

        Some(cli::Commands::Images { breed, count }) => {
            cli::cmd_images(&config, &breed, count).await
        }

        Some(cli::Commands::Fav { command }) => match command {
            cli::FavCommands::List => cli::cmd_fav_list(&config).await,
            cli::FavCommands::Add { image_url, breed } => {
                cli::cmd_fav_add(&config, &image_url, &breed).await
            }
            cli::FavCommands::Remove { image_url } => {
                cli::cmd_fav_remove(&config, &image_url).await
            }
        },

        Some(cli::Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        None => {
            use clap::CommandFactory;
            cli::Cli::command().print_help()?;
            Ok(())
        }
    }
}
