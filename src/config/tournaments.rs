/// Series tournaments that predate the naming convention or were run outside
/// the team feed, and so can't be discovered automatically.
///
/// The id is the last path segment of https://lichess.org/tournament/{id}
pub fn manual_tournaments() -> Vec<String> {
    ["ZLfbxNcu", "Z2DuzTxs", "O4X6VErR", "HVMkt9VQ", "NmRTO3Nr", "wIUsm1em"]
        .iter()
        .map(|id| id.to_string())
        .collect()
}
