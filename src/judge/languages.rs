//! Language registry
//!
//! Maps canonical language names to the judge's numeric language ids.
//! Resolution happens before anything is sent to the judge.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// A language the judge can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Lowercase canonical name used by callers
    pub name: &'static str,
    /// Judge language id
    pub id: i32,
    pub display_name: &'static str,
}

/// Judge0 CE language ids
const LANGUAGES: &[Language] = &[
    Language {
        name: "c",
        id: 50,
        display_name: "C (GCC 9.2.0)",
    },
    Language {
        name: "cpp",
        id: 54,
        display_name: "C++ (GCC 9.2.0)",
    },
    Language {
        name: "java",
        id: 62,
        display_name: "Java (OpenJDK 13.0.1)",
    },
    Language {
        name: "javascript",
        id: 63,
        display_name: "JavaScript (Node.js 12.14.0)",
    },
    Language {
        name: "python",
        id: 71,
        display_name: "Python (3.8.1)",
    },
];

/// Static language registry
pub struct LanguageRegistry;

impl LanguageRegistry {
    /// Resolve a canonical language name to its judge id
    pub fn resolve(name: &str) -> AppResult<i32> {
        Self::find(name)
            .map(|language| language.id)
            .ok_or_else(|| {
                AppError::UnsupportedLanguage(format!(
                    "{} (supported: {})",
                    name.trim(),
                    Self::names().join(", ")
                ))
            })
    }

    /// Look up a language entry by canonical name
    pub fn find(name: &str) -> Option<&'static Language> {
        let name = name.trim();
        LANGUAGES.iter().find(|language| language.name == name)
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    /// Canonical names of all supported languages
    pub fn names() -> Vec<&'static str> {
        LANGUAGES.iter().map(|language| language.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_languages() {
        assert_eq!(LanguageRegistry::resolve("python").unwrap(), 71);
        assert_eq!(LanguageRegistry::resolve("javascript").unwrap(), 63);
        assert_eq!(LanguageRegistry::resolve("java").unwrap(), 62);
        assert_eq!(LanguageRegistry::resolve("cpp").unwrap(), 54);
        assert_eq!(LanguageRegistry::resolve("c").unwrap(), 50);
        assert_eq!(LanguageRegistry::resolve(" python\n").unwrap(), 71);
    }

    #[test]
    fn test_resolve_unsupported_language() {
        match LanguageRegistry::resolve("cobol") {
            Err(AppError::UnsupportedLanguage(message)) => assert_eq!(
                message,
                "cobol (supported: c, cpp, java, javascript, python)"
            ),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
        // Canonical names are lowercase
        assert!(LanguageRegistry::resolve("Python").is_err());
        assert!(LanguageRegistry::resolve("").is_err());
    }

    #[test]
    fn test_registry_ids_are_unique() {
        let mut ids: Vec<i32> = LanguageRegistry::all().iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), LanguageRegistry::all().len());
        assert!(LanguageRegistry::names().contains(&"python"));
    }
}
