//! LLM explanation of ranked results.
//!
//! The explainer receives the already-ranked candidates and returns prose. It never
//! reorders or filters the ranked list; callers treat any failure here as non-fatal.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prompt;
pub mod types;


pub use client::{Explainer, GenaiExplainer};
pub use config::{DEFAULT_MAX_PROMPT_CANDIDATES, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ExplainConfig};
pub use error::{ExplainError, ExplainResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockExplainer;
pub use prompt::{build_system_prompt, build_user_prompt, parse_response};
pub use types::{DEFAULT_TITLE, ExplainedPick, RecommendationExplanation};
