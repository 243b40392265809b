//! Submission builder
//!
//! Turns an exercise (or caller supplied test data) and a solution into a
//! judge request. Everything here is local validation; nothing is sent.

use crate::{
    constants::{MAX_SOURCE_CODE_SIZE, MAX_TEST_DATA_SIZE},
    error::{AppError, AppResult},
    judge::languages::LanguageRegistry,
    models::{Exercise, PreparedSubmission, SubmissionRequest, TestData},
    utils::check_size,
};

/// Builds judge requests
pub struct SubmissionBuilder;

impl SubmissionBuilder {
    /// Build a request for `source_code` in `language`.
    ///
    /// The exercise's test data wins over `default_test`. With neither there is
    /// nothing to run against and the build fails.
    pub fn build(
        exercise: Option<&Exercise>,
        source_code: &str,
        language: &str,
        default_test: Option<TestData>,
    ) -> AppResult<PreparedSubmission> {
        if source_code.trim().is_empty() {
            return Err(AppError::Validation(
                "Source code cannot be empty".to_string(),
            ));
        }
        check_size("Source code", source_code, MAX_SOURCE_CODE_SIZE)?;

        let language_id = LanguageRegistry::resolve(language)?;

        let test = match (exercise, default_test) {
            (Some(exercise), _) => exercise.test_data(),
            (None, Some(test)) => test,
            (None, None) => {
                return Err(AppError::Validation(
                    "Select an exercise or provide test input".to_string(),
                ));
            }
        };

        check_size("Test input", &test.stdin, MAX_TEST_DATA_SIZE)?;
        check_size("Expected output", &test.expected_output, MAX_TEST_DATA_SIZE)?;

        let judge_hint = if test.expected_output.trim().is_empty() {
            None
        } else {
            Some(test.expected_output.clone())
        };

        Ok(PreparedSubmission {
            request: SubmissionRequest {
                source_code: source_code.to_string(),
                language_id,
                stdin: test.stdin,
                expected_output: judge_hint,
            },
            language: language.trim().to_string(),
            expected_output: test.expected_output,
        })
    }
}
