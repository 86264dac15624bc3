//! Platematch library crate (used by the CLI and integration tests).
//!
//! # Public API Surface
//!
//! ## Preprocessing
//! - [`FieldRoleMap`] - header → field-role resolution
//! - [`RowNormalizer`], [`CanonicalRecord`], [`PriceBucket`] - per-row normalization
//! - [`preprocess`], [`preprocess_to`], [`PreprocessReport`] - raw CSV → canonical CSV
//!
//! ## Querying
//! - [`PreferenceSet`], [`PreferenceMatcher`] - filtering
//! - [`rank`] - ordering and truncation
//! - [`Dataset`], [`CatalogCache`], [`RestaurantResult`], [`Place`] - canonical dataset access
//!
//! ## Recommendation
//! - [`Recommender`], [`RecommendationResponse`] - query plus optional explanation
//! - [`Explainer`], [`GenaiExplainer`], [`ExplainConfig`] - LLM explanation step
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `PLATEMATCH_*` environment settings
//!
//! ## Test/Mock Support
//! [`MockExplainer`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod explain;
pub mod matching;
pub mod normalize;
pub mod preprocess;
pub mod ranking;
pub mod recommend;
pub mod schema;

pub use catalog::{
    CatalogCache, CatalogError, CatalogResult, Dataset, Place, RestaurantEntry, RestaurantResult,
};
pub use config::{Config, ConfigError};
#[cfg(any(test, feature = "mock"))]
pub use explain::MockExplainer;
pub use explain::{
    ExplainConfig, ExplainError, ExplainResult, Explainer, GenaiExplainer,
    RecommendationExplanation,
};
pub use matching::{PreferenceMatcher, PreferenceSet};
pub use normalize::{CanonicalRecord, PriceBucket, RowNormalizer};
pub use preprocess::{PreprocessError, PreprocessReport, preprocess, preprocess_to};
pub use ranking::{Rankable, rank};
pub use recommend::{RecommendError, RecommendationResponse, Recommender};
pub use schema::{FieldRole, FieldRoleMap};
