//! Submission history repository

use std::borrow::Cow;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    history::HistoryStore,
    models::{HistoryEntry, StatusKind},
};

/// History persisted in PostgreSQL (insert and select only)
#[derive(Debug, Clone)]
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// PostgreSQL `TEXT` cannot hold NUL; programs may print it anyway
fn pg_text(value: &str) -> Cow<'_, str> {
    if value.contains('\0') {
        Cow::Owned(value.replace('\0', "\u{FFFD}"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Row shape of `submission_history`
#[derive(Debug, FromRow)]
struct HistoryRow {
    id: Uuid,
    user_id: String,
    exercise_id: Option<String>,
    language: String,
    source_code: String,
    status: String,
    passed: bool,
    output: String,
    error_output: String,
    time_seconds: Option<f64>,
    memory_kb: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<HistoryRow> for HistoryEntry {
    type Error = AppError;

    fn try_from(row: HistoryRow) -> Result<Self, Self::Error> {
        let status = StatusKind::from_str(&row.status).ok_or_else(|| {
            AppError::Database(format!("Unknown status kind in history: {}", row.status))
        })?;

        Ok(HistoryEntry {
            id: row.id,
            user_id: row.user_id,
            exercise_id: row.exercise_id,
            language: row.language,
            source_code: row.source_code,
            status,
            passed: row.passed,
            output: row.output,
            error_output: row.error_output,
            time_seconds: row.time_seconds,
            memory_kb: row.memory_kb,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn record(&self, entry: HistoryEntry) -> AppResult<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO submission_history (
                id, user_id, exercise_id, language, source_code, status,
                passed, output, error_output, time_seconds, memory_kb, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id
            "#,
        )
        .bind(entry.id)
        .bind(pg_text(&entry.user_id))
        .bind(entry.exercise_id.as_deref().map(pg_text))
        .bind(pg_text(&entry.language))
        .bind(pg_text(&entry.source_code))
        .bind(entry.status.as_str())
        .bind(entry.passed)
        .bind(pg_text(&entry.output))
        .bind(pg_text(&entry.error_output))
        .bind(entry.time_seconds)
        .bind(entry.memory_kb)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self, user_id: &str, exercise_id: Option<&str>) -> AppResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT * FROM submission_history
            WHERE
                user_id = $1
                AND ($2::text IS NULL OR exercise_id = $2)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(pg_text(user_id))
        .bind(exercise_id.map(pg_text))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(HistoryEntry::try_from).collect()
    }
}
