//! Submission service
//!
//! `submit_code` is the one entry point for running code: build, submit,
//! classify, record. Validation and transport failures come back as errors and
//! leave no trace in the history; judging outcomes always produce a verdict.

use tracing::{info, warn};

use crate::{
    error::AppResult,
    handlers::submissions::request::SubmitCodeRequest,
    history::HistoryStore,
    judge::{JudgeClient, SubmissionBuilder, VerdictClassifier},
    models::{HistoryEntry, TestData, Verdict},
    services::ExerciseCatalog,
};

/// Result of one completed run
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub entry: HistoryEntry,
    pub verdict: Verdict,
}

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Run `payload` for `user_id` and record the outcome
    pub async fn submit_code(
        judge: &dyn JudgeClient,
        history: &dyn HistoryStore,
        catalog: &ExerciseCatalog,
        user_id: &str,
        payload: SubmitCodeRequest,
    ) -> AppResult<SubmissionOutcome> {
        let exercise = match payload.exercise_id.as_deref() {
            Some(id) => Some(catalog.get(id).await?),
            None => None,
        };

        // Either half of the test data is enough; stdin defaults to empty
        let default_test = if payload.stdin.is_some() || payload.expected_output.is_some() {
            Some(TestData {
                stdin: payload.stdin.unwrap_or_default(),
                expected_output: payload.expected_output.unwrap_or_default(),
            })
        } else {
            None
        };

        let prepared = SubmissionBuilder::build(
            exercise.as_ref(),
            &payload.code,
            &payload.language,
            default_test,
        )?;

        let result = judge.submit(&prepared.request).await.map_err(|e| {
            warn!(
                user_id = %user_id,
                exercise_id = ?payload.exercise_id,
                language = %prepared.language,
                error = %e,
                "Judge call failed"
            );
            e
        })?;

        let verdict = VerdictClassifier::classify(&result, &prepared.expected_output);

        let entry = HistoryEntry::from_execution(
            user_id,
            exercise.as_ref().map(|e| e.id.as_str()),
            &prepared,
            &result,
            &verdict,
        );
        history.record(entry.clone()).await?;

        info!(
            submission_id = %entry.id,
            user_id = %user_id,
            exercise_id = ?entry.exercise_id,
            language = %entry.language,
            status = %verdict.status,
            passed = verdict.passed,
            "Submission judged"
        );

        Ok(SubmissionOutcome { entry, verdict })
    }

    /// Submission history of `user_id`, most recent first
    pub async fn list_submissions(
        history: &dyn HistoryStore,
        user_id: &str,
        exercise_id: Option<&str>,
    ) -> AppResult<Vec<HistoryEntry>> {
        history.list(user_id, exercise_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        history::InMemoryHistoryStore,
        judge::{client::MockJudgeClient, ExecutionError},
        models::{ExecutionResult, StatusKind},
    };
    use std::time::Duration;

    fn judged(status: StatusKind, stdout: &str, compile_output: &str) -> ExecutionResult {
        ExecutionResult {
            status,
            judge_status_id: if status == StatusKind::Accepted { 3 } else { 6 },
            judge_status_description: status.label().to_string(),
            stdout: stdout.into(),
            stderr: String::new(),
            compile_output: compile_output.into(),
            time_seconds: Some(0.015),
            memory_kb: Some(3300),
        }
    }

    fn custom_run(code: &str, expected: &str) -> SubmitCodeRequest {
        SubmitCodeRequest {
            code: code.into(),
            language: "python".into(),
            exercise_id: None,
            stdin: Some(String::new()),
            expected_output: Some(expected.into()),
        }
    }

    #[tokio::test]
    async fn test_hello_world_is_accepted_and_recorded() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit()
            .withf(|req| {
                req.language_id == 71
                    && req.source_code == "print('hello')"
                    && req.stdin.is_empty()
                    && req.expected_output.as_deref() == Some("hello\n")
            })
            .times(1)
            .returning(|_| Ok(judged(StatusKind::Accepted, "hello\n", "")));
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let outcome = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            custom_run("print('hello')", "hello\n"),
        )
        .await
        .unwrap();

        assert!(outcome.verdict.passed);
        assert_eq!(outcome.verdict.status, StatusKind::Accepted);

        let listed = history.list("alice", None).await.unwrap();
        assert_eq!(listed, vec![outcome.entry.clone()]);
        assert_eq!(outcome.entry.exercise_id, None);
        assert_eq!(outcome.entry.time_seconds, Some(0.015));
    }

    #[tokio::test]
    async fn test_syntax_error_is_a_verdict_not_an_error() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit()
            .times(1)
            .returning(|_| Ok(judged(StatusKind::CompileError, "", "SyntaxError: invalid syntax")));
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let outcome = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            custom_run("print('hello'", "hello\n"),
        )
        .await
        .unwrap();

        assert!(!outcome.verdict.passed);
        assert_eq!(outcome.verdict.status, StatusKind::CompileError);
        assert_eq!(outcome.entry.error_output, "SyntaxError: invalid syntax");
        assert_eq!(history.list("alice", None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exercise_test_data_is_used() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit()
            .withf(|req| req.expected_output.as_deref() == Some("9\n"))
            .times(1)
            .returning(|_| Ok(judged(StatusKind::Accepted, "8\n", "")));
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let outcome = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            SubmitCodeRequest {
                code: "print(8)".into(),
                language: "python".into(),
                exercise_id: Some("find-maximum".into()),
                stdin: None,
                expected_output: None,
            },
        )
        .await
        .unwrap();

        // The judge said Accepted but local comparison disagrees
        assert!(!outcome.verdict.passed);
        assert_eq!(outcome.verdict.status, StatusKind::WrongAnswer);
        assert_eq!(outcome.entry.exercise_id.as_deref(), Some("find-maximum"));

        let filtered = SubmissionService::list_submissions(&history, "alice", Some("find-maximum"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert!(SubmissionService::list_submissions(&history, "alice", Some("sum-of-two-numbers"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_validation_failures_never_reach_the_judge() {
        let mut judge = MockJudgeClient::new();
        judge.expect_submit().times(0);
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let cases = vec![
            custom_run("   \n", "5"),
            SubmitCodeRequest {
                language: "cobol".into(),
                ..custom_run("print(5)", "5")
            },
            SubmitCodeRequest {
                stdin: None,
                expected_output: None,
                ..custom_run("print(5)", "")
            },
            SubmitCodeRequest {
                exercise_id: Some("missing".into()),
                ..custom_run("print(5)", "5")
            },
        ];

        for payload in cases {
            let err = SubmissionService::submit_code(&judge, &history, &catalog, "alice", payload)
                .await
                .unwrap_err();
            assert!(!err.is_transport(), "got {:?}", err);
        }
        assert!(history.list("alice", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_expected_output_alone_is_enough_test_data() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit()
            .withf(|req| req.stdin.is_empty() && req.expected_output.as_deref() == Some("hello\n"))
            .times(1)
            .returning(|_| Ok(judged(StatusKind::Accepted, "hello\n", "")));
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let outcome = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            SubmitCodeRequest {
                stdin: None,
                ..custom_run("print('hello')", "hello\n")
            },
        )
        .await
        .unwrap();

        assert!(outcome.verdict.passed);
        assert_eq!(history.list("alice", None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_timeout_propagates_and_records_nothing() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit()
            .times(1)
            .returning(|_| Err(ExecutionError::Timeout(Duration::from_secs(30))));
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let err = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            custom_run("import time\nwhile True: time.sleep(1)", "done"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::JudgeTimeout(_)));
        assert!(history.list("alice", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_error_keeps_status_code() {
        let mut judge = MockJudgeClient::new();
        judge.expect_submit().times(1).returning(|_| {
            Err(ExecutionError::Service {
                status: 503,
                message: "maintenance".into(),
            })
        });
        let history = InMemoryHistoryStore::new();
        let catalog = ExerciseCatalog::with_builtin();

        let err = SubmissionService::submit_code(
            &judge,
            &history,
            &catalog,
            "alice",
            custom_run("print(5)", "5"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::JudgeService { status: 503, .. }));
        assert!(history.list("alice", None).await.unwrap().is_empty());
    }
}
