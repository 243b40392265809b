//! Submission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::status_kinds;

/// Request sent to the judge for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub source_code: String,
    pub language_id: i32,
    pub stdin: String,
    /// Server-side comparison hint, omitted when no answer is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
}

/// A request together with what the classifier compares against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub request: SubmissionRequest,
    pub language: String,
    pub expected_output: String,
}

/// Discrete outcome of one execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Accepted,
    WrongAnswer,
    CompileError,
    RuntimeError,
    TimeLimitExceeded,
    Unknown,
}

impl StatusKind {
    /// Get status kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => status_kinds::ACCEPTED,
            Self::WrongAnswer => status_kinds::WRONG_ANSWER,
            Self::CompileError => status_kinds::COMPILE_ERROR,
            Self::RuntimeError => status_kinds::RUNTIME_ERROR,
            Self::TimeLimitExceeded => status_kinds::TIME_LIMIT_EXCEEDED,
            Self::Unknown => status_kinds::UNKNOWN,
        }
    }

    /// Parse status kind from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            status_kinds::ACCEPTED => Some(Self::Accepted),
            status_kinds::WRONG_ANSWER => Some(Self::WrongAnswer),
            status_kinds::COMPILE_ERROR => Some(Self::CompileError),
            status_kinds::RUNTIME_ERROR => Some(Self::RuntimeError),
            status_kinds::TIME_LIMIT_EXCEEDED => Some(Self::TimeLimitExceeded),
            status_kinds::UNKNOWN => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::CompileError => "Compile Error",
            Self::RuntimeError => "Runtime Error",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::Unknown => "Unknown",
        }
    }

    /// The program ran to completion, so its stdout is meaningful
    pub fn ran_to_completion(&self) -> bool {
        matches!(self, Self::Accepted | Self::WrongAnswer)
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized judge response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub status: StatusKind,
    /// Status id as reported by the judge
    pub judge_status_id: i32,
    pub judge_status_description: String,
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    /// Elapsed time in seconds
    pub time_seconds: Option<f64>,
    /// Peak memory in kilobytes
    pub memory_kb: Option<i64>,
}

impl ExecutionResult {
    /// Error text worth showing for a failed run
    pub fn error_text(&self) -> &str {
        match self.status {
            StatusKind::CompileError => &self.compile_output,
            _ => &self.stderr,
        }
    }
}

/// Classified outcome shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    pub status: StatusKind,
    /// Never empty
    pub message: String,
    pub actual_output: String,
    pub expected_output: String,
}

/// One row of a user's submission history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: String,
    pub exercise_id: Option<String>,
    pub language: String,
    pub source_code: String,
    pub status: StatusKind,
    pub passed: bool,
    pub output: String,
    pub error_output: String,
    pub time_seconds: Option<f64>,
    pub memory_kb: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build an entry for a completed execution.
    ///
    /// The id is a UUIDv7, so ids sort by creation time.
    pub fn from_execution(
        user_id: &str,
        exercise_id: Option<&str>,
        prepared: &PreparedSubmission,
        result: &ExecutionResult,
        verdict: &Verdict,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: user_id.to_string(),
            exercise_id: exercise_id.map(str::to_string),
            language: prepared.language.clone(),
            source_code: prepared.request.source_code.clone(),
            status: verdict.status,
            passed: verdict.passed,
            output: result.stdout.clone(),
            error_output: result.error_text().to_string(),
            time_seconds: result.time_seconds,
            memory_kb: result.memory_kb,
            created_at: Utc::now(),
        }
    }
}
