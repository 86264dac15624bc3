//! Per-field parsers. None of these fail: unusable input yields `None` or empty.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::record::PriceBucket;
use crate::constants::{MAX_RATING, MIN_RATING};

static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("valid decimal pattern"));

static DISALLOWED_CUISINE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 &-]").expect("valid cuisine charset pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Parses a rating written as a plain decimal in `[0, 5]`.
///
/// `"4.1/5"`, `"NEW"`, `"-"` and `"7"` all yield `None`; out-of-range values are never
/// clamped.
pub fn parse_rating(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !PLAIN_DECIMAL.is_match(trimmed) {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| (MIN_RATING..=MAX_RATING).contains(v))
}

/// Parses a price-range level. Only integers 1-4 map to a bucket.
pub fn parse_price_range(raw: &str) -> Option<PriceBucket> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(PriceBucket::from_level)
}

/// Parses a non-negative average cost for two. Thousands separators are accepted.
pub fn parse_avg_cost(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Price-range level wins over average cost whenever it is valid.
pub fn derive_price_bucket(
    price_range: Option<&str>,
    avg_cost: Option<&str>,
) -> Option<PriceBucket> {
    price_range
        .and_then(parse_price_range)
        .or_else(|| avg_cost.and_then(parse_avg_cost).map(PriceBucket::from_avg_cost))
}

/// Normalizes one cuisine token: lowercase, keep `[a-z0-9 &-]`, collapse whitespace.
pub fn normalize_cuisine_token(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = DISALLOWED_CUISINE_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Splits a comma-separated cuisine cell into a sorted, deduplicated token list.
pub fn normalize_cuisines(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_cuisine_token)
        .filter(|token| !token.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
