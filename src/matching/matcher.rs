use std::collections::BTreeSet;

use super::preferences::PreferenceSet;
use crate::normalize::{CanonicalRecord, normalize_cuisines};

/// Every location part must be a case-insensitive substring of the city or of the
/// locality. `parts` are expected lowercase; an empty slice always matches.
pub fn location_matches(record: &CanonicalRecord, parts: &[String]) -> bool {
    if parts.is_empty() {
        return true;
    }
    let city = record.std_city.to_lowercase();
    let locality = record.std_locality.to_lowercase();
    parts
        .iter()
        .all(|part| city.contains(part.as_str()) || locality.contains(part.as_str()))
}

/// The record's bucket must equal `price` (lowercase). A record without a bucket never
/// satisfies a price preference.
pub fn price_matches(record: &CanonicalRecord, price: Option<&str>) -> bool {
    match price {
        Some(wanted) => record.price_bucket_str() == wanted,
        None => true,
    }
}

/// The record must carry a rating at or above `floor`.
pub fn rating_matches(record: &CanonicalRecord, floor: Option<f64>) -> bool {
    match floor {
        Some(floor) => record.std_rating.is_some_and(|rating| rating >= floor),
        None => true,
    }
}

/// At least one wanted cuisine must appear in the record's cuisine set.
pub fn cuisine_matches(record: &CanonicalRecord, wanted: &BTreeSet<String>) -> bool {
    wanted.is_empty() || record.std_cuisines.iter().any(|c| wanted.contains(c))
}

/// A [`PreferenceSet`] normalized once for repeated evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceMatcher {
    location_parts: Vec<String>,
    price: Option<String>,
    min_rating: Option<f64>,
    cuisines: BTreeSet<String>,
}

impl PreferenceMatcher {
    pub fn new(prefs: &PreferenceSet) -> Self {
        let location_parts = prefs
            .location
            .as_deref()
            .map(|loc| {
                loc.split(',')
                    .map(|part| part.trim().to_lowercase())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let price = prefs
            .price_preference
            .as_deref()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty());

        let cuisines = prefs
            .cuisine_preferences
            .iter()
            .flatten()
            .flat_map(|c| normalize_cuisines(c))
            .collect();

        Self {
            location_parts,
            price,
            min_rating: prefs.min_rating,
            cuisines,
        }
    }

    pub fn location_parts(&self) -> &[String] {
        &self.location_parts
    }

    pub fn cuisines(&self) -> &BTreeSet<String> {
        &self.cuisines
    }

    /// Conjunction of all predicates, stopping at the first failure.
    pub fn matches(&self, record: &CanonicalRecord) -> bool {
        location_matches(record, &self.location_parts)
            && price_matches(record, self.price.as_deref())
            && rating_matches(record, self.min_rating)
            && cuisine_matches(record, &self.cuisines)
    }
}

/// One-shot form of [`PreferenceMatcher::matches`].
pub fn matches(record: &CanonicalRecord, prefs: &PreferenceSet) -> bool {
    PreferenceMatcher::new(prefs).matches(record)
}
