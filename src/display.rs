use chrono::{DateTime, Local, Utc};
use colored::Colorize;

use crate::domain::{LeaderboardEntry, Podium, Tournament};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const SCORE_WIDTH: usize = 7;

pub fn print_leaderboard(entries: &[LeaderboardEntry], limit: Option<usize>, updated_at: DateTime<Utc>) {
    if entries.is_empty() {
        println!("{}", "No games counted yet".dimmed());
        return;
    }

    // escape codes carry no width, so columns are padded before styling
    println!(
        "{}  {} {} {:>4} {:>4} {}",
        format!("{:>4}", "#").bold(),
        format!("{:<24}", "Player").bold(),
        format!("{:>width$}", "Score", width = SCORE_WIDTH).bold(),
        "🧇",
        "💥",
        format!("{:>5}", "Games").bold()
    );

    for entry in entries.iter().take(limit.unwrap_or(entries.len())) {
        let player = &entry.player;
        println!(
            "{:>4}  {:<24} {} {:>4} {:>4} {:>5}",
            entry.rank,
            player.name,
            format_score(player.score, SCORE_WIDTH),
            player.waffle_wins,
            player.waffle_losses,
            player.games_played
        );
    }

    print_updated(updated_at);
}

pub fn print_podium(podium: &Podium) {
    println!("{}", podium.key.title().bold());

    if podium.entries.is_empty() {
        println!("  {}", "No data yet".dimmed());
        return;
    }

    for (entry, medal) in podium.entries.iter().zip(MEDALS) {
        println!("  {} {:<24} {}", medal, entry.player.name, entry.value);
    }
}

pub fn print_tournaments(tournaments: &[Tournament], now: DateTime<Utc>) {
    if tournaments.is_empty() {
        println!("{}", "No tournaments found".dimmed());
        return;
    }

    for t in tournaments {
        let (status, label) = if t.is_past(now) {
            (format!("{:>9}", "Finished").red(), "Ended")
        } else {
            (format!("{:>9}", "Upcoming").green(), "Starts")
        };
        let when = if t.is_past(now) { t.end_time() } else { t.starts_at };
        println!(
            "{:<32} {:<8} {}  {}: {}",
            t.name,
            t.id,
            status,
            label,
            when.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn print_updated(updated_at: DateTime<Utc>) {
    println!(
        "\n{}",
        format!("Last updated: {}", updated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")).dimmed()
    );
}

/// Right-aligned to `width` visible columns, then coloured by sign
fn format_score(score: f64, width: usize) -> String {
    let digits = if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    };
    let text = format!("{:>width$}", digits);

    if score > 0.0 {
        text.green().to_string()
    } else if score < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the colour override is process-wide, keep every toggle inside this test
    #[test]
    fn test_format_score_pads_before_colouring() {
        colored::control::set_override(false);
        assert_eq!(format_score(3.0, 0), "3");
        assert_eq!(format_score(-1.5, 0), "-1.5");
        assert_eq!(format_score(0.0, 0), "0");
        assert_eq!(format_score(1.5, SCORE_WIDTH), "    1.5");

        colored::control::set_override(true);
        let coloured = format_score(1.5, SCORE_WIDTH);
        assert!(coloured.contains("    1.5"));
        assert!(coloured.starts_with('\u{1b}'));
        assert_eq!(format_score(0.0, 3), "  0");

        colored::control::unset_override();
    }
}
