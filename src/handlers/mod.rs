//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod exercises;
pub mod health;
pub mod languages;
pub mod submissions;

use axum::{middleware, Router};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(languages::routes())
        .nest("/exercises", exercises::routes(state.clone()))
        .nest(
            "/submissions",
            submissions::routes()
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}
