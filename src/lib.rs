//! rSessionGate library root.
//! Exposes the session, audit and navigation components, the key/value
//! stores they run on, and the CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::CliApp;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    if let Commands::Init { seed } = &cli.command {
        return cli::commands::init::handle(cli, *seed).await;
    }

    let app = CliApp::open(cfg)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &app),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, &app).await,
        Commands::Register { .. } => cli::commands::register::handle(&cli.command, &app).await,
        Commands::Logout => cli::commands::logout::handle(&app).await,
        Commands::Whoami => cli::commands::whoami::handle(&app).await,
        Commands::Status => cli::commands::status::handle(&app).await,
        Commands::Navigate { .. } => cli::commands::navigate::handle(&cli.command, &app).await,
        Commands::Goal { .. } => cli::commands::goal::handle(&cli.command, &app).await,
        Commands::Hours => cli::commands::hours::handle(&app).await,
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &app).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, cfg).await
}
