//! Judge execution client
//!
//! Talks to a Judge0-compatible service using its synchronous
//! `wait=true` mode and normalizes the response. One call is one suspension
//! point; there is no polling, retrying or cancellation here.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    config::{JudgeConfig, JudgeCredential},
    constants::{judge_headers, JUDGE_SUBMISSIONS_PATH, JUDGE_WAIT_QUERY},
    error::{AppError, AppResult},
    judge::status::kind_for_status,
    models::{ExecutionResult, StatusKind, SubmissionRequest},
};

/// Longest slice of an error body kept for diagnostics
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Transport-level failures talking to the judge
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The service could not be reached
    #[error("judge unreachable: {0}")]
    Network(String),

    /// No response within the wait budget
    #[error("judge did not respond within {0:?}")]
    Timeout(Duration),

    /// The service answered with something other than a result
    #[error("judge returned status {status}: {message}")]
    Service { status: u16, message: String },
}

/// Something that can run a submission to completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// Submit and wait for the terminal result
    async fn submit(&self, request: &SubmissionRequest) -> Result<ExecutionResult, ExecutionError>;
}

/// Raw judge response, as received
#[derive(Debug, Default, Deserialize)]
pub struct RawSubmissionResponse {
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    /// Seconds, usually a numeric string such as `"0.012"`
    #[serde(default)]
    pub time: Option<serde_json::Value>,
    /// Kilobytes
    #[serde(default)]
    pub memory: Option<serde_json::Value>,
    #[serde(default)]
    pub status: RawStatus,
}

/// Raw `status` object
#[derive(Debug, Default, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub description: String,
}

/// Normalize a raw response.
///
/// Compiler output wins over stderr, stderr wins over the reported status id.
pub fn normalize(raw: RawSubmissionResponse) -> ExecutionResult {
    let stdout = raw.stdout.unwrap_or_default();
    let stderr = raw.stderr.unwrap_or_default();
    let compile_output = raw.compile_output.unwrap_or_default();

    let status = if !compile_output.trim().is_empty() {
        StatusKind::CompileError
    } else if !stderr.trim().is_empty() {
        StatusKind::RuntimeError
    } else {
        kind_for_status(raw.status.id)
    };

    ExecutionResult {
        status,
        judge_status_id: raw.status.id,
        judge_status_description: raw.status.description,
        stdout,
        stderr,
        compile_output,
        time_seconds: raw.time.as_ref().and_then(parse_seconds),
        memory_kb: raw.memory.as_ref().and_then(parse_kilobytes),
    }
}

fn parse_seconds(value: &serde_json::Value) -> Option<f64> {
    let secs = match value {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }?;
    (secs.is_finite() && secs >= 0.0).then_some(secs)
}

fn parse_kilobytes(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|kb| *kb >= 0)
}

/// HTTP client for a Judge0-compatible service
#[derive(Debug, Clone)]
pub struct Judge0Client {
    http: reqwest::Client,
    submissions_url: String,
    wait_timeout: Duration,
}

impl Judge0Client {
    /// Create a client; the credential is baked into default headers here
    pub fn new(config: &JudgeConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.wait_timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(credential_headers(&config.credential)?)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build judge client: {}", e)))?;

        Ok(Self {
            http,
            submissions_url: format!(
                "{}{}?{}",
                config.base_url.trim_end_matches('/'),
                JUDGE_SUBMISSIONS_PATH,
                JUDGE_WAIT_QUERY
            ),
            wait_timeout: config.wait_timeout,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ExecutionError {
        if err.is_connect() {
            ExecutionError::Network(err.to_string())
        } else if err.is_timeout() {
            ExecutionError::Timeout(self.wait_timeout)
        } else {
            ExecutionError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl JudgeClient for Judge0Client {
    async fn submit(&self, request: &SubmissionRequest) -> Result<ExecutionResult, ExecutionError> {
        let start = Instant::now();
        debug!(
            language_id = request.language_id,
            source_bytes = request.source_code.len(),
            stdin_bytes = request.stdin.len(),
            "Submitting to judge"
        );

        let response = self
            .http
            .post(&self.submissions_url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = service_message(&body);
            warn!(status = status.as_u16(), message = %message, "Judge rejected submission");
            return Err(ExecutionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let raw: RawSubmissionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ExecutionError::Timeout(self.wait_timeout)
            } else {
                ExecutionError::Service {
                    status: status.as_u16(),
                    message: format!("invalid judge response: {}", e),
                }
            }
        })?;

        let result = normalize(raw);
        info!(
            language_id = request.language_id,
            judge_status = result.judge_status_id,
            status = %result.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Judge call completed"
        );

        Ok(result)
    }
}

fn credential_headers(credential: &JudgeCredential) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut insert = |name: &'static str, value: &str| -> AppResult<()> {
        let mut value = HeaderValue::from_str(value).map_err(|_| {
            AppError::Configuration(format!("Invalid value for judge header {}", name))
        })?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static(name), value);
        Ok(())
    };

    match credential {
        JudgeCredential::None => {}
        JudgeCredential::RapidApi { key, host } => {
            insert(judge_headers::RAPIDAPI_KEY, key)?;
            insert(judge_headers::RAPIDAPI_HOST, host)?;
        }
        JudgeCredential::AuthToken(token) => insert(judge_headers::AUTH_TOKEN, token)?,
    }

    Ok(headers)
}

/// Pull a readable message out of an error body
fn service_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
