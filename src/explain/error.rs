//! Explanation error types.

use thiserror::Error;

/// Errors from the LLM explanation step.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// Called with an empty candidate list.
    #[error("explanation requires at least one candidate restaurant")]
    NoCandidates,

    /// The model provider failed or was unreachable.
    #[error("provider error: {0}")]
    Provider(String),

    /// The model replied with something that is not the expected JSON object.
    #[error("invalid model response ({reason}); snippet: {snippet:?}")]
    InvalidResponse { reason: String, snippet: String },

    /// Prompt could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for explanation operations.
pub type ExplainResult<T> = Result<T, ExplainError>;
