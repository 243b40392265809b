//! Exercise catalog service

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    constants::{CUSTOM_EXERCISE_PREFIX, MAX_TEST_DATA_SIZE},
    error::{AppError, AppResult},
    handlers::exercises::request::CreateCustomExerciseRequest,
    models::{Difficulty, Exercise},
    utils::{check_size, sanitize_string},
};

/// Built-in practice problems plus user-pasted custom ones
#[derive(Debug)]
pub struct ExerciseCatalog {
    builtin: Vec<Exercise>,
    custom: RwLock<Vec<Exercise>>,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl ExerciseCatalog {
    /// Catalog seeded with the built-in exercises
    pub fn with_builtin() -> Self {
        Self::new(builtin_exercises())
    }

    pub fn new(builtin: Vec<Exercise>) -> Self {
        Self {
            builtin,
            custom: RwLock::new(Vec::new()),
        }
    }

    /// Built-in exercises first, then custom ones in creation order
    pub async fn list(&self) -> Vec<Exercise> {
        let custom = self.custom.read().await;
        self.builtin.iter().chain(custom.iter()).cloned().collect()
    }

    /// Get one exercise by id
    pub async fn get(&self, id: &str) -> AppResult<Exercise> {
        if let Some(exercise) = self.builtin.iter().find(|e| e.id == id) {
            return Ok(exercise.clone());
        }

        self.custom
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Exercise {} not found", id)))
    }

    /// Add a pasted custom exercise; it is never modified afterwards
    pub async fn add_custom(&self, payload: CreateCustomExerciseRequest) -> AppResult<Exercise> {
        let title = sanitize_string(&payload.title);
        if title.is_empty() {
            return Err(AppError::Validation("Exercise title cannot be empty".to_string()));
        }
        check_size("Test input", &payload.test_input, MAX_TEST_DATA_SIZE)?;
        check_size("Expected output", &payload.expected_output, MAX_TEST_DATA_SIZE)?;

        let exercise = Exercise {
            id: format!("{}{}", CUSTOM_EXERCISE_PREFIX, Uuid::new_v4()),
            title,
            description: payload.description,
            difficulty: Difficulty::Custom,
            category: payload
                .category
                .map(|c| sanitize_string(&c))
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "Custom".to_string()),
            hint: payload.hint.unwrap_or_default(),
            starter_code: payload.starter_code.unwrap_or_default(),
            test_input: payload.test_input,
            expected_output: payload.expected_output,
        };

        self.custom.write().await.push(exercise.clone());
        tracing::info!(exercise_id = %exercise.id, title = %exercise.title, "Custom exercise added");

        Ok(exercise)
    }
}

/// The practice page's static problem set
pub fn builtin_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "sum-of-two-numbers".to_string(),
            title: "Sum of Two Numbers".to_string(),
            description: "Write a function that takes two numbers as input and returns their sum."
                .to_string(),
            difficulty: Difficulty::Easy,
            category: "Functions".to_string(),
            hint: "Think about using the + operator".to_string(),
            starter_code: concat!(
                "def add_numbers(a, b):\n",
                "    return a + b\n",
                "\n",
                "if __name__ == \"__main__\":\n",
                "    print(add_numbers(2, 3))  # Expected output: 5\n",
            )
            .to_string(),
            test_input: String::new(),
            expected_output: "5\n".to_string(),
        },
        Exercise {
            id: "find-maximum".to_string(),
            title: "Find Maximum".to_string(),
            description: "Write a function that finds the maximum number in a list.".to_string(),
            difficulty: Difficulty::Medium,
            category: "Algorithms".to_string(),
            hint: "You can use a loop or the max() function".to_string(),
            starter_code: concat!(
                "def find_max(numbers):\n",
                "    return max(numbers)\n",
                "\n",
                "if __name__ == \"__main__\":\n",
                "    print(find_max([1, 5, 3, 9, 2]))  # Expected output: 9\n",
            )
            .to_string(),
            test_input: String::new(),
            expected_output: "9\n".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(title: &str) -> CreateCustomExerciseRequest {
        CreateCustomExerciseRequest {
            title: title.to_string(),
            description: "Echo the input".to_string(),
            test_input: "hi\n".to_string(),
            expected_output: "hi\n".to_string(),
            hint: None,
            starter_code: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_builtin_catalog() {
        let catalog = ExerciseCatalog::with_builtin();
        let exercises = catalog.list().await;
        assert_eq!(exercises.len(), 2);

        let sum = catalog.get("sum-of-two-numbers").await.unwrap();
        assert_eq!(sum.expected_output, "5\n");
        assert_eq!(sum.difficulty, Difficulty::Easy);
        assert!(sum.starter_code.contains("add_numbers"));
    }

    #[tokio::test]
    async fn test_unknown_exercise() {
        let catalog = ExerciseCatalog::with_builtin();
        assert!(matches!(
            catalog.get("nope").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_custom_exercise() {
        let catalog = ExerciseCatalog::with_builtin();
        let created = catalog.add_custom(custom("  Echo  ")).await.unwrap();

        assert!(created.id.starts_with(CUSTOM_EXERCISE_PREFIX));
        assert_eq!(created.title, "Echo");
        assert_eq!(created.difficulty, Difficulty::Custom);
        assert_eq!(created.category, "Custom");

        assert_eq!(catalog.get(&created.id).await.unwrap(), created);
        let listed = catalog.list().await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_custom_title_required() {
        let catalog = ExerciseCatalog::with_builtin();
        assert!(matches!(
            catalog.add_custom(custom(" \n ")).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(catalog.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_custom_test_data_size_limit() {
        let catalog = ExerciseCatalog::with_builtin();
        let mut payload = custom("Big");
        payload.expected_output = "x".repeat(MAX_TEST_DATA_SIZE + 1);
        assert!(matches!(
            catalog.add_custom(payload).await,
            Err(AppError::Validation(_))
        ));
    }
}
