//! Explanation provider configuration.

use crate::config::{
    ConfigError, flag_from_env, parse_f64_from_env, parse_optional_string_from_env,
    parse_optional_u64_from_env, parse_string_from_env,
};

/// Default chat model (served by Groq).
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Max candidates included in a prompt.
pub const DEFAULT_MAX_PROMPT_CANDIDATES: usize = 50;

/// Settings for the explanation step. Passed explicitly to the explainer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainConfig {
    pub model: String,
    /// When `None` the provider's own key variable (e.g. `GROQ_API_KEY`) is used.
    pub api_key: Option<String>,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    /// Use the deterministic offline explainer.
    pub use_mock: bool,
    pub max_prompt_candidates: usize,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            use_mock: false,
            max_prompt_candidates: DEFAULT_MAX_PROMPT_CANDIDATES,
        }
    }
}

impl ExplainConfig {
    const ENV_MODEL: &'static str = "PLATEMATCH_LLM_MODEL";
    const ENV_API_KEY: &'static str = "PLATEMATCH_LLM_API_KEY";
    const ENV_TEMPERATURE: &'static str = "PLATEMATCH_LLM_TEMPERATURE";
    const ENV_MAX_TOKENS: &'static str = "PLATEMATCH_LLM_MAX_TOKENS";
    const ENV_MOCK_PROVIDER: &'static str = "PLATEMATCH_MOCK_PROVIDER";

    /// Loads settings from `PLATEMATCH_LLM_*` variables and validates them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_tokens = parse_optional_u64_from_env(Self::ENV_MAX_TOKENS)?
            .map(|value| {
                u32::try_from(value).map_err(|_| ConfigError::InvalidValue {
                    name: Self::ENV_MAX_TOKENS,
                    value: value.to_string(),
                    reason: "exceeds u32 range",
                })
            })
            .transpose()?;

        let config = Self {
            model: parse_string_from_env(Self::ENV_MODEL, defaults.model),
            api_key: parse_optional_string_from_env(Self::ENV_API_KEY),
            temperature: parse_f64_from_env(Self::ENV_TEMPERATURE, defaults.temperature)?,
            max_tokens,
            use_mock: flag_from_env(Self::ENV_MOCK_PROVIDER),
            max_prompt_candidates: defaults.max_prompt_candidates,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_TEMPERATURE,
                value: self.temperature.to_string(),
                reason: "must be between 0 and 2",
            });
        }

        if self.max_tokens == Some(0) {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MAX_TOKENS,
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}
