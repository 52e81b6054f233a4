pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod http;
pub mod pgn;
pub mod ranking;
pub mod scoring;
pub mod services;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::sync::Arc;

use crate::api::LichessClient;
use crate::api::handlers::AppState;
use crate::cli::Command;
use crate::config::{AppConfig, SeriesFilter};
use crate::services::pipeline::LeaderboardService;
use crate::services::resolver::resolve_tournaments;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_leaderboard(limit: Option<usize>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(print_leaderboard(load_config()?, limit))
}

pub fn handle_achievements() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(print_achievements(load_config()?))
}

pub fn handle_tournaments() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(print_tournaments(load_config()?))
}

pub fn handle_serve(port: u16) -> Result<()> {
    let config = load_config()?;
    let service = build_server_service(&config, port)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(service.run())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn load_config() -> Result<AppConfig> {
    AppConfig::from_env().context("Invalid configuration")
}

fn load_filter(config: &AppConfig) -> Result<SeriesFilter> {
    config.validate().context("Invalid configuration")
}

fn build_leaderboard_service(config: &AppConfig) -> Result<LeaderboardService<LichessClient>> {
    let filter = load_filter(config)?;
    let client = LichessClient::new(&config.client, &config.series)?;
    LeaderboardService::new(Arc::new(client), filter)
}

fn build_server_service(config: &AppConfig, port: u16) -> Result<ServerService<LichessClient>> {
    let leaderboard = build_leaderboard_service(config)?;
    let state = AppState::new(&config.client.base_url);
    Ok(ServerService::new(port, config.refresh.interval(), state, leaderboard))
}

async fn print_leaderboard(config: AppConfig, limit: Option<usize>) -> Result<()> {
    let service = build_leaderboard_service(&config)?;
    let snapshot = service.run().await;
    display::print_leaderboard(&snapshot.leaderboard, limit, snapshot.computed_at);
    Ok(())
}

async fn print_achievements(config: AppConfig) -> Result<()> {
    let service = build_leaderboard_service(&config)?;
    let snapshot = service.run().await;

    let achievements = &snapshot.achievements;
    for podium in [&achievements.waffles, &achievements.waffled, &achievements.committed] {
        display::print_podium(podium);
    }
    display::print_updated(snapshot.computed_at);
    Ok(())
}

async fn print_tournaments(config: AppConfig) -> Result<()> {
    let filter = load_filter(&config)?;
    let client = LichessClient::new(&config.client, &config.series)?;

    let resolved = resolve_tournaments(&client, &filter).await;
    display::print_tournaments(&resolved.tournaments, Utc::now());
    Ok(())
}
