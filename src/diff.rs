/// Characters of cleaned diff forwarded to the summarizer.
pub const MAX_DIFF_CHARS: usize = 2000;

/// Header and notice lines that never carry code.
const SKIPPED_PREFIXES: [&str; 5] = ["diff --git", "index", "---", "+++", "Binary files"];

/// Keep only added/removed lines, without their `+`/`-` marker.
///
/// Returns `None` when no content line survives (mode-only changes, binary
/// files, pure renames).
pub fn clean_diff(raw: &str) -> Option<String> {
    let kept: Vec<&str> = raw
        .split('\n')
        .filter(|line| !SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p)))
        .filter_map(|line| line.strip_prefix('+').or_else(|| line.strip_prefix('-')))
        .collect();

    if kept.is_empty() {
        return None;
    }

    Some(kept.join("\n"))
}

/// The first `max_chars` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Clean then cap the diff to [`MAX_DIFF_CHARS`].
pub fn prepare_diff(raw: &str) -> Option<String> {
    let cleaned = clean_diff(raw)?;
    let truncated = truncate_chars(&cleaned, MAX_DIFF_CHARS);
    if truncated.len() < cleaned.len() {
        log::info!(
            "Cleaned diff truncated from {} to {} characters",
            cleaned.chars().count(),
            MAX_DIFF_CHARS
        );
    }
    Some(truncated.to_string())
}
