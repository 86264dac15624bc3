use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::client::Explainer;
use super::error::{ExplainError, ExplainResult};
use super::types::{DEFAULT_TITLE, ExplainedPick, RecommendationExplanation};
use crate::catalog::RestaurantResult;
use crate::matching::PreferenceSet;

/// Deterministic offline explainer.
///
/// Picks candidates in the order given and describes each from its own fields.
#[derive(Debug, Default)]
pub struct MockExplainer {
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockExplainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// An explainer whose every call fails with a provider error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reason(candidate: &RestaurantResult) -> String {
        let mut parts = Vec::new();
        if !candidate.cuisines.is_empty() {
            parts.push(format!("serves {}", candidate.cuisines.join(", ")));
        }
        if let Some(rating) = candidate.rating {
            parts.push(format!("rated {}", rating));
        }
        if !candidate.price_bucket.is_empty() {
            parts.push(format!("{} price range", candidate.price_bucket));
        }
        if parts.is_empty() {
            "Matches your preferences.".to_string()
        } else {
            format!("{}.", parts.join("; "))
        }
    }
}

#[async_trait]
impl Explainer for MockExplainer {
    async fn explain(
        &self,
        _prefs: &PreferenceSet,
        candidates: &[RestaurantResult],
        max_recommendations: usize,
    ) -> ExplainResult<RecommendationExplanation> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(ExplainError::Provider(message.clone()));
        }
        if candidates.is_empty() {
            return Err(ExplainError::NoCandidates);
        }

        let recommendations: Vec<ExplainedPick> = candidates
            .iter()
            .take(max_recommendations)
            .enumerate()
            .map(|(i, candidate)| ExplainedPick {
                restaurant_id: candidate.id.clone(),
                restaurant_name: candidate.name.clone(),
                match_score: Some(100.0 - 5.0 * i as f64),
                reason: Self::reason(candidate),
            })
            .collect();

        Ok(RecommendationExplanation {
            title: DEFAULT_TITLE.to_string(),
            summary: format!(
                "{} of {} candidates selected.",
                recommendations.len(),
                candidates.len()
            ),
            recommendations,
            raw_response_text: String::new(),
        })
    }
}
