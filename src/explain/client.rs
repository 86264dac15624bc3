use async_trait::async_trait;
use genai::Client;
use genai::ModelIden;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use genai::resolver::{AuthData, AuthResolver};
use tracing::{debug, error};

use super::config::ExplainConfig;
use super::error::{ExplainError, ExplainResult};
use super::prompt::{build_system_prompt, build_user_prompt, parse_response};
use super::types::RecommendationExplanation;
use crate::catalog::RestaurantResult;
use crate::matching::PreferenceSet;

/// Produces a natural-language explanation for a ranked candidate list.
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Explains up to `max_recommendations` picks from `candidates`.
    ///
    /// Fails with [`ExplainError::NoCandidates`] when `candidates` is empty.
    async fn explain(
        &self,
        prefs: &PreferenceSet,
        candidates: &[RestaurantResult],
        max_recommendations: usize,
    ) -> ExplainResult<RecommendationExplanation>;
}

/// Chat-model explainer backed by `genai`.
pub struct GenaiExplainer {
    client: Client,
    config: ExplainConfig,
}

impl std::fmt::Debug for GenaiExplainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiExplainer")
            .field("model", &self.config.model)
            .field("temperature", &self.config.temperature)
            .field("max_tokens", &self.config.max_tokens)
            .finish_non_exhaustive()
    }
}

impl GenaiExplainer {
    pub fn new(config: ExplainConfig) -> Self {
        let client = match config.api_key.clone() {
            Some(key) => Client::builder()
                .with_auth_resolver(AuthResolver::from_resolver_fn(
                    move |_: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
                        Ok(Some(AuthData::from_single(key.clone())))
                    },
                ))
                .build(),
            None => Client::default(),
        };
        Self { client, config }
    }

    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    fn chat_options(&self) -> ChatOptions {
        let options = ChatOptions::default().with_temperature(self.config.temperature);
        match self.config.max_tokens {
            Some(max_tokens) => options.with_max_tokens(max_tokens),
            None => options,
        }
    }
}

#[async_trait]
impl Explainer for GenaiExplainer {
    async fn explain(
        &self,
        prefs: &PreferenceSet,
        candidates: &[RestaurantResult],
        max_recommendations: usize,
    ) -> ExplainResult<RecommendationExplanation> {
        if candidates.is_empty() {
            return Err(ExplainError::NoCandidates);
        }

        let user_prompt = build_user_prompt(
            prefs,
            candidates,
            max_recommendations,
            self.config.max_prompt_candidates,
        )?;
        let request = ChatRequest::new(vec![
            ChatMessage::system(build_system_prompt()),
            ChatMessage::user(user_prompt),
        ]);

        debug!(
            model = %self.config.model,
            candidates = candidates.len(),
            max_recommendations,
            "Requesting explanation"
        );

        let response = self
            .client
            .exec_chat(&self.config.model, request, Some(&self.chat_options()))
            .await
            .map_err(|e| {
                error!("Provider error: {}", e);
                ExplainError::Provider(e.to_string())
            })?;

        parse_response(response.first_text().unwrap_or_default())
    }
}
