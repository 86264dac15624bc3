use std::fs::File;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{CatalogError, CatalogResult};
use super::places::{Place, distinct_cuisines, distinct_places};
use crate::constants::{DERIVED_COLUMNS, UNKNOWN_NAME};
use crate::matching::{PreferenceMatcher, PreferenceSet};
use crate::normalize::{CanonicalRecord, PriceBucket, RowNormalizer, parse_rating, split_cuisines};
use crate::ranking::{Rankable, rank};
use crate::schema::{FieldRole, FieldRoleMap};

/// A canonical record plus the identity recovered from its original columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantEntry {
    pub id: Option<String>,
    pub name: String,
    pub record: CanonicalRecord,
}

impl Rankable for RestaurantEntry {
    fn rank_rating(&self) -> Option<f64> {
        self.record.std_rating
    }

    fn rank_name(&self) -> &str {
        &self.name
    }
}

/// One ranked result as exposed to the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantResult {
    pub id: Option<String>,
    pub name: String,
    pub city: String,
    pub locality: String,
    pub rating: Option<f64>,
    pub price_bucket: String,
    pub cuisines: Vec<String>,
}

impl From<&RestaurantEntry> for RestaurantResult {
    fn from(entry: &RestaurantEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            city: entry.record.std_city.clone(),
            locality: entry.record.std_locality.clone(),
            rating: entry.record.std_rating,
            price_bucket: entry.record.price_bucket_str().to_string(),
            cuisines: entry.record.std_cuisines.clone(),
        }
    }
}

/// Where each derived column sits in a canonical header.
#[derive(Debug, Clone, Copy)]
struct DerivedLayout {
    city: usize,
    locality: usize,
    rating: usize,
    price_bucket: usize,
    cuisines: usize,
}

impl DerivedLayout {
    /// Finds the derived columns, preferring the rightmost occurrence of each name.
    fn locate(headers: &StringRecord) -> Option<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.trim().eq_ignore_ascii_case(name))
                .map(|(i, _)| i)
                .last()
        };
        let [city, locality, rating, price_bucket, cuisines] = DERIVED_COLUMNS;
        Some(Self {
            city: find(city)?,
            locality: find(locality)?,
            rating: find(rating)?,
            price_bucket: find(price_bucket)?,
            cuisines: find(cuisines)?,
        })
    }

    fn contains(&self, index: usize) -> bool {
        [
            self.city,
            self.locality,
            self.rating,
            self.price_bucket,
            self.cuisines,
        ]
        .contains(&index)
    }
}

/// How rows of a loaded file become canonical records.
enum RowSource {
    /// The file already carries derived columns.
    Canonical {
        layout: DerivedLayout,
        original_columns: Vec<usize>,
    },
    /// Derived columns are missing; rows are normalized on load.
    Raw(RowNormalizer),
}

impl RowSource {
    fn record(&self, row: &StringRecord) -> Option<CanonicalRecord> {
        match self {
            RowSource::Canonical {
                layout,
                original_columns,
            } => {
                let cell = |i: usize| row.get(i).unwrap_or_default();
                Some(CanonicalRecord {
                    original_fields: original_columns
                        .iter()
                        .map(|&i| cell(i).to_string())
                        .collect(),
                    std_city: cell(layout.city).trim().to_string(),
                    std_locality: cell(layout.locality).trim().to_string(),
                    std_rating: parse_rating(cell(layout.rating)),
                    std_price_bucket: cell(layout.price_bucket).parse::<PriceBucket>().ok(),
                    std_cuisines: split_cuisines(cell(layout.cuisines)),
                })
            }
            RowSource::Raw(normalizer) => normalizer.normalize(row),
        }
    }
}

/// An in-memory canonical dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<RestaurantEntry>,
}

impl Dataset {
    pub fn new(entries: Vec<RestaurantEntry>) -> Self {
        Self { entries }
    }

    /// Loads a canonical CSV file.
    ///
    /// A file without the derived columns is normalized on the fly (discard rule
    /// included). Invalid UTF-8 is decoded lossily; rows the CSV reader cannot parse
    /// are skipped.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        if !path.exists() {
            return Err(CatalogError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(File::open(path)?);

        let headers = match reader.byte_headers() {
            Ok(h) => StringRecord::from_byte_record_lossy(h.clone()),
            Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
            Err(_) => {
                return Err(CatalogError::EmptySource {
                    path: path.to_path_buf(),
                });
            }
        };
        if headers.iter().all(|f| f.trim().is_empty()) {
            return Err(CatalogError::EmptySource {
                path: path.to_path_buf(),
            });
        }

        let identity = FieldRoleMap::from_record(&headers);
        let source = match DerivedLayout::locate(&headers) {
            Some(layout) => RowSource::Canonical {
                layout,
                original_columns: (0..headers.len()).filter(|i| !layout.contains(*i)).collect(),
            },
            None => {
                warn!(
                    path = %path.display(),
                    "Dataset has no derived columns; normalizing rows on load"
                );
                RowSource::Raw(RowNormalizer::from_headers(&headers))
            }
        };

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for result in reader.byte_records() {
            let row = match result {
                Ok(row) => StringRecord::from_byte_record_lossy(row),
                Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    skipped += 1;
                    warn!(error = %e, "Skipping unreadable dataset row");
                    continue;
                }
            };

            if let Some(record) = source.record(&row) {
                entries.push(RestaurantEntry {
                    id: identity_value(&identity, FieldRole::Id, &row),
                    name: identity_value(&identity, FieldRole::Name, &row)
                        .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                    record,
                });
            }
        }

        debug!(
            path = %path.display(),
            entries = entries.len(),
            skipped,
            "Dataset loaded"
        );

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RestaurantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filters by `prefs`, ranks, and truncates to the clamped result count.
    pub fn query(&self, prefs: &PreferenceSet) -> Vec<RestaurantResult> {
        let matcher = PreferenceMatcher::new(prefs);
        let limit = prefs.result_limit();

        let matched: Vec<&RestaurantEntry> = self
            .entries
            .iter()
            .filter(|entry| matcher.matches(&entry.record))
            .collect();
        let matched_count = matched.len();

        let results: Vec<RestaurantResult> = rank(matched, limit)
            .into_iter()
            .map(RestaurantResult::from)
            .collect();

        debug!(
            total = self.entries.len(),
            matched = matched_count,
            returned = results.len(),
            limit,
            "Query evaluated"
        );

        results
    }

    pub fn places(&self) -> Vec<Place> {
        distinct_places(self.entries.iter().map(|e| &e.record))
    }

    pub fn cuisines(&self) -> Vec<String> {
        distinct_cuisines(self.entries.iter().map(|e| &e.record))
    }
}

fn identity_value(roles: &FieldRoleMap, role: FieldRole, row: &StringRecord) -> Option<String> {
    roles
        .value(role, row)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
