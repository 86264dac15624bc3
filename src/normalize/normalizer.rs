use csv::StringRecord;

use super::fields::{derive_price_bucket, normalize_cuisines, parse_rating};
use super::record::CanonicalRecord;
use crate::schema::{FieldRole, FieldRoleMap};

/// Normalizes rows of a single source file.
///
/// Holds the [`FieldRoleMap`] resolved from that file's header and the header width
/// used to align ragged rows.
#[derive(Debug, Clone)]
pub struct RowNormalizer {
    roles: FieldRoleMap,
    width: usize,
}

impl RowNormalizer {
    pub fn new(roles: FieldRoleMap, width: usize) -> Self {
        Self { roles, width }
    }

    /// Resolves roles from `headers` and remembers its width.
    pub fn from_headers(headers: &StringRecord) -> Self {
        Self::new(FieldRoleMap::from_record(headers), headers.len())
    }

    pub fn roles(&self) -> &FieldRoleMap {
        &self.roles
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Builds the canonical record for `row`, or `None` if the discard rule drops it.
    pub fn normalize(&self, row: &StringRecord) -> Option<CanonicalRecord> {
        let record = self.derive(row);
        record.is_retainable().then_some(record)
    }

    /// Computes every derived field without applying the discard rule.
    pub fn derive(&self, row: &StringRecord) -> CanonicalRecord {
        let cell = |role: FieldRole| self.roles.value(role, row);

        let std_city = cell(FieldRole::City).map(str::trim).unwrap_or_default();
        let std_locality = cell(FieldRole::Locality).map(str::trim).unwrap_or_default();
        let std_rating = cell(FieldRole::Rating).and_then(parse_rating);
        let std_price_bucket =
            derive_price_bucket(cell(FieldRole::PriceRange), cell(FieldRole::AvgCostForTwo));
        let std_cuisines = cell(FieldRole::Cuisine)
            .map(normalize_cuisines)
            .unwrap_or_default();

        CanonicalRecord {
            original_fields: self.aligned_fields(row),
            std_city: std_city.to_string(),
            std_locality: std_locality.to_string(),
            std_rating,
            std_price_bucket,
            std_cuisines,
        }
    }

    fn aligned_fields(&self, row: &StringRecord) -> Vec<String> {
        (0..self.width)
            .map(|i| row.get(i).unwrap_or_default().to_string())
            .collect()
    }
}
