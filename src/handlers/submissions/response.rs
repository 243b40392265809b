//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{HistoryEntry, StatusKind},
    services::submission_service::SubmissionOutcome,
};

/// Verdict of one run
#[derive(Debug, Serialize)]
pub struct SubmitCodeResponse {
    pub submission_id: Uuid,
    pub passed: bool,
    pub status: StatusKind,
    pub message: String,
    pub actual_output: String,
    pub expected_output: String,
    pub error_output: String,
    pub time_seconds: Option<f64>,
    pub memory_kb: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

impl From<SubmissionOutcome> for SubmitCodeResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let SubmissionOutcome { entry, verdict } = outcome;
        Self {
            submission_id: entry.id,
            passed: verdict.passed,
            status: verdict.status,
            message: verdict.message,
            actual_output: verdict.actual_output,
            expected_output: verdict.expected_output,
            error_output: entry.error_output,
            time_seconds: entry.time_seconds,
            memory_kb: entry.memory_kb,
            submitted_at: entry.created_at,
        }
    }
}

/// One past submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub exercise_id: Option<String>,
    pub language: String,
    pub source_code: String,
    pub status: StatusKind,
    pub passed: bool,
    pub output: String,
    pub error_output: String,
    pub time_seconds: Option<f64>,
    pub memory_kb: Option<i64>,
    pub submitted_at: DateTime<Utc>,
}

impl From<HistoryEntry> for SubmissionResponse {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            exercise_id: entry.exercise_id,
            language: entry.language,
            source_code: entry.source_code,
            status: entry.status,
            passed: entry.passed,
            output: entry.output,
            error_output: entry.error_output,
            time_seconds: entry.time_seconds,
            memory_kb: entry.memory_kb,
            submitted_at: entry.created_at,
        }
    }
}

/// Submission list response, most recent first
#[derive(Debug, Serialize)]
pub struct SubmissionsListResponse {
    pub submissions: Vec<SubmissionResponse>,
    pub total: usize,
}
