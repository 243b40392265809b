//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config, history::HistoryStore, judge::JudgeClient, services::ExerciseCatalog,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Remote judge client, holding the judge credential
    judge: Arc<dyn JudgeClient>,

    /// Submission history backend
    history: Arc<dyn HistoryStore>,

    /// Built-in and custom exercises
    exercises: ExerciseCatalog,

    /// Name of the history backend, reported by the health check
    history_backend: &'static str,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        judge: Arc<dyn JudgeClient>,
        history: Arc<dyn HistoryStore>,
        history_backend: &'static str,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                judge,
                history,
                exercises: ExerciseCatalog::with_builtin(),
                history_backend,
                config,
            }),
        }
    }

    /// Get a reference to the judge client
    pub fn judge(&self) -> &dyn JudgeClient {
        self.inner.judge.as_ref()
    }

    /// Get a reference to the history store
    pub fn history(&self) -> &dyn HistoryStore {
        self.inner.history.as_ref()
    }

    /// Get a reference to the exercise catalog
    pub fn exercises(&self) -> &ExerciseCatalog {
        &self.inner.exercises
    }

    pub fn history_backend(&self) -> &'static str {
        self.inner.history_backend
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
