/// Collapse a raw recognized-text blob into canonical question text.
///
/// Each line is trimmed, blank lines are dropped, and the remainder is
/// rejoined with newlines. `None` means recognition produced nothing usable
/// and the pipeline must not proceed.
pub fn canonical_question(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
