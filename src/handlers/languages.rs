//! Language listing

use axum::{routing::get, Json, Router};

use crate::{
    judge::{Language, LanguageRegistry},
    state::AppState,
};

/// Supported languages, in registry order
async fn list_languages() -> Json<&'static [Language]> {
    Json(LanguageRegistry::all())
}

/// Language routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/languages", get(list_languages))
}
