//! Submission request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_LANGUAGE_NAME_LENGTH;

/// Run code against an exercise, or against caller supplied test data
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitCodeRequest {
    /// Source code; its byte size is checked when the submission is built
    #[validate(length(min = 1))]
    pub code: String,

    /// Language name, e.g. "python"
    #[validate(length(min = 1, max = MAX_LANGUAGE_NAME_LENGTH))]
    pub language: String,

    /// Exercise to run against; its test data wins over `stdin`/`expected_output`
    pub exercise_id: Option<String>,

    pub stdin: Option<String>,

    pub expected_output: Option<String>,
}

/// List submissions query parameters
#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub exercise_id: Option<String>,
}
