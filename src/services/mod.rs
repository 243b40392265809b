//! Business logic services

pub mod exercise_service;
pub mod submission_service;

pub use exercise_service::ExerciseCatalog;
pub use submission_service::{SubmissionOutcome, SubmissionService};
