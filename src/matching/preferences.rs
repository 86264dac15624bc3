use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NUM_RESULTS, MAX_NUM_RESULTS, MIN_NUM_RESULTS};

/// A caller's query: optional filters plus a bounded result count.
///
/// Field names follow the JSON request shape used by the service layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    /// `low`, `medium`, `high` or `premium`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_preference: Option<String>,

    /// Free text, comma-separated into parts (e.g. `"Bangalore, Indiranagar"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_preferences: Option<Vec<String>>,

    /// Requested result count; see [`clamp_num_results`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_results: Option<i64>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price_preference = Some(price.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisine_preferences = Some(cuisines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_num_results(mut self, num_results: i64) -> Self {
        self.num_results = Some(num_results);
        self
    }

    /// The clamped number of results to return.
    pub fn result_limit(&self) -> usize {
        clamp_num_results(self.num_results)
    }

    /// Returns `true` if no filter is set (the result count does not count).
    pub fn is_unfiltered(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().is_none_or(|v| v.trim().is_empty());
        blank(&self.price_preference)
            && blank(&self.location)
            && self.min_rating.is_none()
            && self
                .cuisine_preferences
                .as_ref()
                .is_none_or(|c| c.iter().all(|s| s.trim().is_empty()))
    }
}

/// Defaults to 5 and clamps into `[1, 10]`.
pub fn clamp_num_results(requested: Option<i64>) -> usize {
    match requested {
        Some(n) => n.clamp(MIN_NUM_RESULTS, MAX_NUM_RESULTS) as usize,
        None => DEFAULT_NUM_RESULTS,
    }
}
