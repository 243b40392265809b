//! Exercise request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_EXERCISE_DESCRIPTION_LENGTH, MAX_EXERCISE_TITLE_LENGTH};

/// Paste a custom exercise
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomExerciseRequest {
    #[validate(length(min = 1, max = MAX_EXERCISE_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_EXERCISE_DESCRIPTION_LENGTH))]
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub test_input: String,

    pub expected_output: String,

    pub hint: Option<String>,

    pub starter_code: Option<String>,

    #[validate(length(max = 64))]
    pub category: Option<String>,
}
