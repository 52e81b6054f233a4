use anyhow::Result;

use waf_leaderboard::cli::Command;
use waf_leaderboard::{
    handle_achievements, handle_completions, handle_leaderboard, handle_serve, handle_tournaments, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Leaderboard { limit } => handle_leaderboard(*limit),
        Command::Achievements => handle_achievements(),
        Command::Tournaments => handle_tournaments(),
        Command::Serve { port } => handle_serve(*port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
