//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod history_repo;

pub use history_repo::PgHistoryStore;
