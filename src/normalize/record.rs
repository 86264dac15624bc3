use serde::{Deserialize, Serialize};

use crate::constants::{
    CUISINE_SEPARATOR, HIGH_COST_CEILING, LOW_COST_CEILING, MEDIUM_COST_CEILING,
};

/// Affordability tier derived from price-range or average-cost signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    Low,
    Medium,
    High,
    Premium,
}

impl PriceBucket {
    /// Maps a 1-4 price-range level; anything else is `None`.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(PriceBucket::Low),
            2 => Some(PriceBucket::Medium),
            3 => Some(PriceBucket::High),
            4 => Some(PriceBucket::Premium),
            _ => None,
        }
    }

    /// Maps a non-negative average cost for two by threshold.
    pub fn from_avg_cost(cost: f64) -> Self {
        if cost <= LOW_COST_CEILING {
            PriceBucket::Low
        } else if cost <= MEDIUM_COST_CEILING {
            PriceBucket::Medium
        } else if cost <= HIGH_COST_CEILING {
            PriceBucket::High
        } else {
            PriceBucket::Premium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::Low => "low",
            PriceBucket::Medium => "medium",
            PriceBucket::High => "high",
            PriceBucket::Premium => "premium",
        }
    }
}

impl std::str::FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(PriceBucket::Low),
            "medium" => Ok(PriceBucket::Medium),
            "high" => Ok(PriceBucket::High),
            "premium" => Ok(PriceBucket::Premium),
            _ => Err(format!("Unknown price bucket: {}", s)),
        }
    }
}

impl std::fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset row after normalization.
///
/// Created once during preprocessing (or when loading a canonical file) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    /// Source columns, verbatim, aligned to the source header width.
    pub original_fields: Vec<String>,
    /// Trimmed city, `""` if unresolved.
    pub std_city: String,
    /// Trimmed locality, `""` if unresolved.
    pub std_locality: String,
    /// Rating in `[0, 5]`, absent if unparseable or out of range.
    pub std_rating: Option<f64>,
    /// Absent if neither price signal was usable.
    pub std_price_bucket: Option<PriceBucket>,
    /// Normalized cuisine tokens, sorted and deduplicated.
    pub std_cuisines: Vec<String>,
}

impl CanonicalRecord {
    /// Discard rule: a record is kept only if it says something about where it is or
    /// what it serves.
    pub fn is_retainable(&self) -> bool {
        !self.std_city.is_empty() || !self.std_locality.is_empty() || !self.std_cuisines.is_empty()
    }

    /// The five derived columns in canonical file order.
    pub fn derived_fields(&self) -> [String; 5] {
        [
            self.std_city.clone(),
            self.std_locality.clone(),
            self.std_rating.map(format_rating).unwrap_or_default(),
            self.std_price_bucket
                .map(|b| b.as_str().to_string())
                .unwrap_or_default(),
            join_cuisines(&self.std_cuisines),
        ]
    }

    pub fn price_bucket_str(&self) -> &'static str {
        self.std_price_bucket.map(|b| b.as_str()).unwrap_or("")
    }
}

/// Whole numbers keep one decimal (`4.0`); everything else uses the shortest form.
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

pub fn join_cuisines(cuisines: &[String]) -> String {
    let mut joined = String::new();
    for (i, cuisine) in cuisines.iter().enumerate() {
        if i > 0 {
            joined.push(CUISINE_SEPARATOR);
        }
        joined.push_str(cuisine);
    }
    joined
}

/// Inverse of [`join_cuisines`]; empty segments are dropped.
pub fn split_cuisines(joined: &str) -> Vec<String> {
    joined
        .split(CUISINE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
