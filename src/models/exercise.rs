//! Exercise model

use serde::{Deserialize, Serialize};

/// A practice problem with one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub hint: String,
    pub starter_code: String,
    /// Fed to the program as standard input
    pub test_input: String,
    pub expected_output: String,
}

impl Exercise {
    /// Test data the submission builder runs against
    pub fn test_data(&self) -> TestData {
        TestData {
            stdin: self.test_input.clone(),
            expected_output: self.expected_output.clone(),
        }
    }
}

/// Standard input and the answer it should produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestData {
    pub stdin: String,
    /// Empty when no answer is known
    pub expected_output: String,
}

/// Exercise difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Custom => write!(f, "custom"),
        }
    }
}
