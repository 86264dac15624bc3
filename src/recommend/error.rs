use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that fail a recommendation request.
///
/// Explanation failures are reported inside the response instead.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;
