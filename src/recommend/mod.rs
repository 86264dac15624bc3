//! Query then (optionally) explain.
//!
//! The ranked list is computed first and never modified afterwards. An explanation
//! failure is logged and reported in `explanation_error`; the request still succeeds.

pub mod error;


pub use error::{RecommendError, RecommendResult};

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{CatalogCache, RestaurantResult};
use crate::explain::Explainer;
use crate::matching::PreferenceSet;

/// Ranked restaurants plus optional explanation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub restaurants: Vec<RestaurantResult>,
    pub explanation: Option<String>,
    pub explanation_error: Option<String>,
}

/// Serves recommendation requests against canonical datasets.
#[derive(Clone)]
pub struct Recommender {
    cache: CatalogCache,
    explainer: Option<Arc<dyn Explainer>>,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("cache", &self.cache)
            .field("explainer", &self.explainer.is_some())
            .finish()
    }
}

impl Recommender {
    pub fn new(cache: CatalogCache) -> Self {
        Self {
            cache,
            explainer: None,
        }
    }

    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Ranked matches for `prefs`, without explanation.
    pub fn query(
        &self,
        dataset: &Path,
        prefs: &PreferenceSet,
    ) -> RecommendResult<Vec<RestaurantResult>> {
        Ok(self.cache.get_or_load(dataset)?.query(prefs))
    }

    /// Ranked matches plus an explanation when an explainer is configured and at
    /// least one restaurant matched.
    pub async fn recommend(
        &self,
        dataset: &Path,
        prefs: &PreferenceSet,
    ) -> RecommendResult<RecommendationResponse> {
        let restaurants = self.query(dataset, prefs)?;

        let mut response = RecommendationResponse {
            restaurants,
            explanation: None,
            explanation_error: None,
        };

        let Some(explainer) = &self.explainer else {
            return Ok(response);
        };
        if response.restaurants.is_empty() {
            debug!("No matches; skipping explanation");
            return Ok(response);
        }

        match explainer
            .explain(prefs, &response.restaurants, prefs.result_limit())
            .await
        {
            Ok(explanation) => response.explanation = Some(explanation.to_text()),
            Err(e) => {
                warn!(error = %e, "Explanation failed; returning ranked results only");
                response.explanation_error = Some(e.to_string());
            }
        }

        Ok(response)
    }
}
