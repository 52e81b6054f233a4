/// Header line every exported game starts with
pub const GAME_START_MARKER: &str = "[Event ";

/// Split a concatenated PGN export into one block per game.
///
/// A block starts at each line beginning with `[Event ` and runs up to the next one.
/// Text before the first marker is kept as its own block so the extractor can reject it.
pub fn split_games(export: &str) -> Vec<String> {
    if export.trim().is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in export.lines() {
        if line.starts_with(GAME_START_MARKER) && !current.trim().is_empty() {
            blocks.push(std::mem::take(&mut current));
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.trim().is_empty() {
        blocks.push(current);
    }

    blocks
}
