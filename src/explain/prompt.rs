//! Prompt construction and response parsing.

use serde_json::{Map, Value, json};

use super::error::{ExplainError, ExplainResult};
use super::types::{DEFAULT_TITLE, ExplainedPick, RecommendationExplanation};
use crate::catalog::RestaurantResult;
use crate::matching::PreferenceSet;

const SNIPPET_CHARS: usize = 500;

const SYSTEM_PROMPT: &str = "You are an AI restaurant recommendation assistant. \
Given a user's preferences and a list of candidate restaurants, \
you must select and clearly explain the best options for the user.\n\n\
Requirements:\n\
- Always base your answer ONLY on the provided candidate restaurants.\n\
- Prefer restaurants that match the requested cuisine, location, and price level.\n\
- Prefer higher ratings, but explain trade-offs when needed.\n\
- Output strictly in the JSON schema described in the instructions.";

pub fn build_system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The preferences the user actually stated. Blank strings and empty lists are dropped.
fn stated_preferences(prefs: &PreferenceSet) -> Map<String, Value> {
    let mut stated = Map::new();

    if let Some(price) = non_blank(&prefs.price_preference) {
        stated.insert("price_preference".into(), json!(price));
    }
    if let Some(location) = non_blank(&prefs.location) {
        stated.insert("location".into(), json!(location));
    }
    if let Some(min_rating) = prefs.min_rating {
        stated.insert("min_rating".into(), json!(min_rating));
    }
    if let Some(cuisines) = prefs.cuisine_preferences.as_ref().filter(|c| !c.is_empty()) {
        stated.insert("cuisine_preferences".into(), json!(cuisines));
    }
    stated
}

/// JSON user prompt: instructions, stated preferences, the first `max_candidates`
/// candidates, and the response schema.
pub fn build_user_prompt(
    prefs: &PreferenceSet,
    candidates: &[RestaurantResult],
    max_recommendations: usize,
    max_candidates: usize,
) -> ExplainResult<String> {
    let shown = &candidates[..candidates.len().min(max_candidates)];

    let prompt = json!({
        "instructions": format!(
            "You are given:\n\
             1) user_preferences: the user's stated preferences, and\n\
             2) candidate_restaurants: a list of possible restaurants that you MUST choose from.\n\n\
             Select up to {} restaurants that best match the preferences.\n\
             Return ONLY a single JSON object matching the 'response_schema' below. \
             Do not include any extra commentary or markdown.\n",
            max_recommendations
        ),
        "user_preferences": stated_preferences(prefs),
        "candidate_restaurants": shown,
        "response_schema": {
            "title": "Short title summarizing the recommendation context",
            "summary": "1-2 paragraphs explaining your high-level reasoning",
            "recommendations": [{
                "restaurant_id": "id string or null",
                "restaurant_name": "string",
                "match_score": "number between 0 and 100 reflecting how well it matches the user preferences",
                "reason": "1-3 sentences explaining why this restaurant is a good choice",
            }],
        },
    });

    Ok(serde_json::to_string_pretty(&prompt)?)
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

fn string_field(item: &Map<String, Value>, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_field(item: &Map<String, Value>, key: &str) -> Option<f64> {
    match item.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses the model's reply. Non-object recommendation items are skipped.
pub fn parse_response(text: &str) -> ExplainResult<RecommendationExplanation> {
    let invalid = |reason: String| ExplainError::InvalidResponse {
        reason,
        snippet: snippet(text),
    };

    let value: Value = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| invalid(format!("malformed JSON: {}", e)))?;
    let Value::Object(data) = value else {
        return Err(invalid("expected a JSON object".to_string()));
    };

    let title = string_field(&data, "title")
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let summary = string_field(&data, "summary").unwrap_or_default();

    let recommendations = match data.get("recommendations") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(|item| ExplainedPick {
                restaurant_id: string_field(item, "restaurant_id"),
                restaurant_name: string_field(item, "restaurant_name").unwrap_or_default(),
                match_score: number_field(item, "match_score"),
                reason: string_field(item, "reason").unwrap_or_default(),
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(RecommendationExplanation {
        title,
        summary,
        recommendations,
        raw_response_text: text.to_string(),
    })
}
