//! Remote judging pipeline
//!
//! A run goes through four steps:
//!
//! 1. **Builder** (`builder.rs`): local validation and request assembly.
//! 2. **Client** (`client.rs`): one waited call to the remote judge, plus
//!    normalization of its raw response.
//! 3. **Status table** (`status.rs`): judge status id to status kind.
//! 4. **Classifier** (`classifier.rs`): status kind plus local output
//!    comparison into a single verdict.

pub mod builder;
pub mod classifier;
pub mod client;
pub mod languages;
pub mod status;

pub use builder::SubmissionBuilder;
pub use classifier::VerdictClassifier;
pub use client::{ExecutionError, Judge0Client, JudgeClient};
pub use languages::{Language, LanguageRegistry};
