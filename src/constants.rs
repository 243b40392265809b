//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// JUDGE DEFAULTS
// =============================================================================

/// Default judge base URL (hosted Judge0 CE)
pub const DEFAULT_JUDGE_BASE_URL: &str = "https://judge0-ce.p.rapidapi.com";

/// Default overall wait budget for one judge call, in seconds
pub const DEFAULT_JUDGE_WAIT_SECONDS: u64 = 30;

/// Default connect timeout for the judge, in seconds
pub const DEFAULT_JUDGE_CONNECT_TIMEOUT_SECONDS: u64 = 5;

/// Judge submission path, relative to the base URL
pub const JUDGE_SUBMISSIONS_PATH: &str = "/submissions";

/// Query string selecting plain-text fields and synchronous completion
pub const JUDGE_WAIT_QUERY: &str = "base64_encoded=false&wait=true";

/// Header names understood by Judge0 deployments (lowercase for `HeaderName::from_static`)
pub mod judge_headers {
    pub const RAPIDAPI_KEY: &str = "x-rapidapi-key";
    pub const RAPIDAPI_HOST: &str = "x-rapidapi-host";
    pub const AUTH_TOKEN: &str = "x-auth-token";
}

/// Judge0 status identifiers
pub mod judge_status {
    pub const IN_QUEUE: i32 = 1;
    pub const PROCESSING: i32 = 2;
    pub const ACCEPTED: i32 = 3;
    pub const WRONG_ANSWER: i32 = 4;
    pub const TIME_LIMIT_EXCEEDED: i32 = 5;
    pub const COMPILATION_ERROR: i32 = 6;
    pub const RUNTIME_ERROR_SIGSEGV: i32 = 7;
    pub const RUNTIME_ERROR_SIGXFSZ: i32 = 8;
    pub const RUNTIME_ERROR_SIGFPE: i32 = 9;
    pub const RUNTIME_ERROR_SIGABRT: i32 = 10;
    pub const RUNTIME_ERROR_NZEC: i32 = 11;
    pub const RUNTIME_ERROR_OTHER: i32 = 12;
    pub const INTERNAL_ERROR: i32 = 13;
    pub const EXEC_FORMAT_ERROR: i32 = 14;
}

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Prefix of the Authorization header value
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// STATUS KINDS
// =============================================================================

/// Verdict status kinds as stored in the history table
pub mod status_kinds {
    pub const ACCEPTED: &str = "accepted";
    pub const WRONG_ANSWER: &str = "wrong_answer";
    pub const COMPILE_ERROR: &str = "compile_error";
    pub const RUNTIME_ERROR: &str = "runtime_error";
    pub const TIME_LIMIT_EXCEEDED: &str = "time_limit_exceeded";
    pub const UNKNOWN: &str = "unknown";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 64 * 1024;

/// Maximum standard input / expected output size in bytes (1 MB)
pub const MAX_TEST_DATA_SIZE: usize = 1024 * 1024;

/// Maximum exercise title length
pub const MAX_EXERCISE_TITLE_LENGTH: u64 = 256;

/// Maximum exercise description length
pub const MAX_EXERCISE_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum language name length accepted in a request
pub const MAX_LANGUAGE_NAME_LENGTH: u64 = 20;

/// Prefix of generated custom exercise identifiers
pub const CUSTOM_EXERCISE_PREFIX: &str = "custom-";
