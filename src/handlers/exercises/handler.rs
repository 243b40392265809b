//! Exercise handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Exercise,
    state::AppState,
};

use super::{
    request::CreateCustomExerciseRequest,
    response::{ExerciseSummary, ExercisesListResponse},
};

/// List the catalog
pub async fn list_exercises(State(state): State<AppState>) -> Json<ExercisesListResponse> {
    let exercises: Vec<ExerciseSummary> = state
        .exercises()
        .list()
        .await
        .into_iter()
        .map(Into::into)
        .collect();

    Json(ExercisesListResponse {
        total: exercises.len(),
        exercises,
    })
}

/// Get one exercise, starter code and test data included
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Exercise>> {
    Ok(Json(state.exercises().get(&id).await?))
}

/// Add a pasted custom exercise
pub async fn create_custom_exercise(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCustomExerciseRequest>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    payload.validate()?;

    tracing::debug!(user_id = %auth_user.id, "Creating custom exercise");
    let exercise = state.exercises().add_custom(payload).await?;

    Ok((StatusCode::CREATED, Json(exercise)))
}
