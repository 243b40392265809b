//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod exercise;
pub mod submission;

pub use exercise::*;
pub use submission::*;
