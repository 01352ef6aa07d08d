//! String utilities for the domain layer.

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
///
/// Lengths are counted in characters, so multi-byte text is never split
/// and never cut earlier than ASCII text of the same length.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    kept + "..."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Capital of France?", 40), "Capital of France?");
        assert_eq!(truncate("Capital of France?", 10), "Capital...");
        assert_eq!(truncate("Capital", 7), "Capital");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("éééééé", 6), "éééééé");
        assert_eq!(truncate("éééééé", 5), "éé...");
        assert_eq!(truncate("Zürich", 20), "Zürich");
    }

    #[test]
    fn test_truncate_below_ellipsis_width() {
        assert_eq!(truncate("Paris", 2), "...");
    }
}
