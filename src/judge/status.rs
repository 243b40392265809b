//! Judge status table
//!
//! Explicit mapping from Judge0 status ids to [`StatusKind`]. Every documented
//! id appears exactly once; anything else is `Unknown`.

use crate::{constants::judge_status, models::StatusKind};

/// `(status id, kind)` for every documented judge status
pub const STATUS_TABLE: &[(i32, StatusKind)] = &[
    // Non-terminal states should never come back from a waited call
    (judge_status::IN_QUEUE, StatusKind::Unknown),
    (judge_status::PROCESSING, StatusKind::Unknown),
    (judge_status::ACCEPTED, StatusKind::Accepted),
    (judge_status::WRONG_ANSWER, StatusKind::WrongAnswer),
    (judge_status::TIME_LIMIT_EXCEEDED, StatusKind::TimeLimitExceeded),
    (judge_status::COMPILATION_ERROR, StatusKind::CompileError),
    (judge_status::RUNTIME_ERROR_SIGSEGV, StatusKind::RuntimeError),
    (judge_status::RUNTIME_ERROR_SIGXFSZ, StatusKind::RuntimeError),
    (judge_status::RUNTIME_ERROR_SIGFPE, StatusKind::RuntimeError),
    (judge_status::RUNTIME_ERROR_SIGABRT, StatusKind::RuntimeError),
    (judge_status::RUNTIME_ERROR_NZEC, StatusKind::RuntimeError),
    (judge_status::RUNTIME_ERROR_OTHER, StatusKind::RuntimeError),
    (judge_status::INTERNAL_ERROR, StatusKind::Unknown),
    (judge_status::EXEC_FORMAT_ERROR, StatusKind::RuntimeError),
];

/// Map a judge status id to its kind
pub fn kind_for_status(status_id: i32) -> StatusKind {
    STATUS_TABLE
        .iter()
        .find(|(id, _)| *id == status_id)
        .map(|(_, kind)| *kind)
        .unwrap_or(StatusKind::Unknown)
}
