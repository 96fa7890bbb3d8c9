//! Typed errors returned by the evaluation engine.
//!
//! All failures are returned as values so callers (validation UIs,
//! report builders) can handle them structurally; nothing in this
//! crate panics on bad input.

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
