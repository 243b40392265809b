//! Submission handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::SubmissionService,
    state::AppState,
};

use super::{
    request::{ListSubmissionsQuery, SubmitCodeRequest},
    response::{SubmissionResponse, SubmissionsListResponse, SubmitCodeResponse},
};

/// Run code and return its verdict
pub async fn submit_code(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SubmitCodeRequest>,
) -> AppResult<Json<SubmitCodeResponse>> {
    payload.validate()?;

    let outcome = SubmissionService::submit_code(
        state.judge(),
        state.history(),
        state.exercises(),
        &auth_user.id,
        payload,
    )
    .await?;

    Ok(Json(outcome.into()))
}

/// List the caller's submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListSubmissionsQuery>,
) -> AppResult<Json<SubmissionsListResponse>> {
    let entries = SubmissionService::list_submissions(
        state.history(),
        &auth_user.id,
        query.exercise_id.as_deref(),
    )
    .await?;

    let submissions: Vec<SubmissionResponse> = entries.into_iter().map(Into::into).collect();

    Ok(Json(SubmissionsListResponse {
        total: submissions.len(),
        submissions,
    }))
}
