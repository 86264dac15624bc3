use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize::CanonicalRecord;

/// A distinct city/locality pairing offered to callers as a location choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub label: String,
    pub city: String,
    pub locality: String,
}

impl Place {
    /// `"{city}, {locality}"`, whichever half is present, or `None` if both are empty.
    pub fn from_record(record: &CanonicalRecord) -> Option<Self> {
        let city = record.std_city.as_str();
        let locality = record.std_locality.as_str();
        let label = match (city.is_empty(), locality.is_empty()) {
            (false, false) => format!("{}, {}", city, locality),
            (false, true) => city.to_string(),
            (true, false) => locality.to_string(),
            (true, true) => return None,
        };
        Some(Self {
            label,
            city: city.to_string(),
            locality: locality.to_string(),
        })
    }
}

/// Distinct places, deduplicated case-insensitively on the label (first occurrence
/// wins) and sorted by label.
pub fn distinct_places<'a, I>(records: I) -> Vec<Place>
where
    I: IntoIterator<Item = &'a CanonicalRecord>,
{
    let mut seen = HashSet::new();
    let mut places: Vec<Place> = records
        .into_iter()
        .filter_map(Place::from_record)
        .filter(|place| seen.insert(place.label.to_lowercase()))
        .collect();
    places.sort_by(|a, b| a.label.cmp(&b.label));
    places
}

/// Union of every record's cuisine tokens, sorted.
pub fn distinct_cuisines<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CanonicalRecord>,
{
    records
        .into_iter()
        .flat_map(|r| r.std_cuisines.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
