//! rPonto library root.
//! Exposes the CLI parser, the high-level run() function and the
//! time-accounting engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
        Commands::Employee { .. } => commands::employee::handle(cmd, cfg),
        Commands::Punch { .. } => commands::punch::handle(cmd, cfg),
        Commands::Status { .. } => commands::status::handle(cmd, cfg),
        Commands::Correct { .. } => commands::correct::handle(cmd, cfg),
        Commands::Justify { .. } => commands::justify::handle(cmd, cfg),
        Commands::Holiday { .. } => commands::holiday::handle(cmd, cfg),
        Commands::Week { .. } => commands::week::handle(cmd, cfg),
        Commands::Month { .. } => commands::month::handle(cmd, cfg),
        Commands::Dashboard { .. } => commands::dashboard::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
