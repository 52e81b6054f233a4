use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "WAF-FLED arena leaderboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Compute the leaderboard once and print it
    Leaderboard {
        /// Only show the first N players
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Compute the achievement podiums once and print them
    Achievements,
    /// List the series tournaments found in the team feed
    Tournaments,
    /// Serve the leaderboard as JSON, refreshing on an interval
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
