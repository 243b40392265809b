//! Exercise response DTOs

use serde::Serialize;

use crate::models::{Difficulty, Exercise};

/// Catalog entry without the problem body
#[derive(Debug, Serialize)]
pub struct ExerciseSummary {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub category: String,
}

impl From<Exercise> for ExerciseSummary {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            title: exercise.title,
            difficulty: exercise.difficulty,
            category: exercise.category,
        }
    }
}

/// Exercise list response
#[derive(Debug, Serialize)]
pub struct ExercisesListResponse {
    pub exercises: Vec<ExerciseSummary>,
    pub total: usize,
}
