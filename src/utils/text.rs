//! Text helpers

/// Cut `text` to at most `max` characters, marking the cut with "..."
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        // Counts characters, not bytes
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
    }
}
