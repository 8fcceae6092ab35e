// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Emergence Kernel failures.
///
/// Per-cycle numeric anomalies never surface here; they are absorbed
/// with fallback values inside the estimators.
#[derive(Error, Debug)]
pub enum EmergenceError {
    /// Configuration error (construction time only).
    #[error("config error: {0}")]
    Config(String),

    /// Invalid caller-supplied structure (e.g. adjacency out of range).
    #[error("validation error: {0}")]
    Validation(String),
}

pub type EmergenceResult<T> = Result<T, EmergenceError>;
