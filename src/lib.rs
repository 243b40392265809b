//! Practice Judge - remote code execution for practice exercises
//!
//! Learners submit a solution to an exercise (or to test data they paste in);
//! this service validates it, runs it on a remote Judge0-compatible judge,
//! turns the judge's answer into a verdict and keeps a per-user history.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Exercise catalog and the `submit_code` entry point
//! - **Judge**: Language registry, submission builder, judge client, verdict
//!   classifier
//! - **History**: Append-only submission history (in memory or PostgreSQL)
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod history;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware as axum_middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Full application router with the standard layer stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes(state.clone()))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
