//! Exercise handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Exercise routes; adding a custom exercise requires a bearer token
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handler::create_custom_exercise)
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
        .route("/", get(handler::list_exercises))
        .route("/{id}", get(handler::get_exercise))
}
