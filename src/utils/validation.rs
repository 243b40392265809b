//! Input validation utilities

use crate::error::{AppError, AppResult};

/// Reject `value` when it is larger than `max` bytes
pub fn check_size(label: &str, value: &str, max: usize) -> AppResult<()> {
    if value.len() > max {
        return Err(AppError::Validation(format!(
            "{} exceeds maximum size of {} bytes",
            label, max
        )));
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        assert!(check_size("Source code", "abc", 3).is_ok());
        match check_size("Source code", "abcd", 3) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Source code exceeds maximum size of 3 bytes")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Two Sum \u{7}"), "Two Sum");
        assert_eq!(sanitize_string("a\tb\nc"), "a\tb\nc");
        assert_eq!(sanitize_string(" \u{0} "), "");
    }
}
