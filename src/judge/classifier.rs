//! Verdict classification
//!
//! Local output comparison is authoritative whenever an expected output is
//! known. Without one, the judge's status kind is trusted as-is.

use crate::{
    models::{ExecutionResult, StatusKind, Verdict},
    utils::truncate_chars,
};

/// Longest output excerpt quoted in a wrong-answer message
const MESSAGE_EXCERPT_CHARS: usize = 80;

/// Derives verdicts from normalized execution results
pub struct VerdictClassifier;

impl VerdictClassifier {
    /// Classify `result` against `expected_output`
    pub fn classify(result: &ExecutionResult, expected_output: &str) -> Verdict {
        let expected = expected_output.trim();

        if !result.status.ran_to_completion() {
            return Verdict {
                passed: false,
                status: result.status,
                message: failure_message(result),
                actual_output: String::new(),
                expected_output: expected.to_string(),
            };
        }

        let actual = result.stdout.trim();

        let status = if expected.is_empty() {
            result.status
        } else if actual == expected {
            StatusKind::Accepted
        } else {
            StatusKind::WrongAnswer
        };

        let message = match status {
            StatusKind::Accepted => StatusKind::Accepted.label().to_string(),
            _ if expected.is_empty() => StatusKind::WrongAnswer.label().to_string(),
            _ => format!(
                "{}: expected \"{}\", got \"{}\"",
                StatusKind::WrongAnswer.label(),
                excerpt(expected),
                excerpt(actual)
            ),
        };

        Verdict {
            passed: status == StatusKind::Accepted,
            status,
            message,
            actual_output: actual.to_string(),
            expected_output: expected.to_string(),
        }
    }
}

fn failure_message(result: &ExecutionResult) -> String {
    match result.status {
        StatusKind::Unknown if !result.judge_status_description.trim().is_empty() => format!(
            "{}: {}",
            StatusKind::Unknown.label(),
            result.judge_status_description.trim()
        ),
        kind => kind.label().to_string(),
    }
}

fn excerpt(text: &str) -> String {
    truncate_chars(text, MESSAGE_EXCERPT_CHARS)
}
