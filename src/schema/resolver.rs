use csv::StringRecord;

use crate::constants::{
    AVG_COST_HEADERS, CITY_HEADERS, CUISINE_HEADERS, ID_HEADERS, LOCALITY_HEADERS, NAME_HEADERS,
    PRICE_RANGE_HEADERS, RATING_HEADERS,
};

/// Logical column roles the pipeline knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Id,
    Name,
    City,
    Locality,
    Cuisine,
    Rating,
    PriceRange,
    AvgCostForTwo,
}

impl FieldRole {
    pub const COUNT: usize = 8;

    pub const ALL: [FieldRole; Self::COUNT] = [
        FieldRole::Id,
        FieldRole::Name,
        FieldRole::City,
        FieldRole::Locality,
        FieldRole::Cuisine,
        FieldRole::Rating,
        FieldRole::PriceRange,
        FieldRole::AvgCostForTwo,
    ];

    /// Candidate header names in priority order (lowercase).
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            FieldRole::Id => ID_HEADERS,
            FieldRole::Name => NAME_HEADERS,
            FieldRole::City => CITY_HEADERS,
            FieldRole::Locality => LOCALITY_HEADERS,
            FieldRole::Cuisine => CUISINE_HEADERS,
            FieldRole::Rating => RATING_HEADERS,
            FieldRole::PriceRange => PRICE_RANGE_HEADERS,
            FieldRole::AvgCostForTwo => AVG_COST_HEADERS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldRole::Id => "id",
            FieldRole::Name => "name",
            FieldRole::City => "city",
            FieldRole::Locality => "locality",
            FieldRole::Cuisine => "cuisine",
            FieldRole::Rating => "rating",
            FieldRole::PriceRange => "price_range",
            FieldRole::AvgCostForTwo => "avg_cost_for_two",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header column chosen for a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Zero-based position in the header (and in every row).
    pub index: usize,
    /// The header text exactly as it appears in the file.
    pub header: String,
}

/// Role → column mapping for one file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRoleMap {
    columns: [Option<ResolvedColumn>; FieldRole::COUNT],
}

impl FieldRoleMap {
    /// Resolves every role against `headers`.
    ///
    /// For each role the candidates are tried in order; the first candidate present in
    /// the header wins. Header comparison ignores case and surrounding whitespace. If the
    /// same header appears twice, the leftmost column is used. Unmatched roles stay
    /// unresolved.
    pub fn resolve<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized: Vec<(String, &str)> = headers
            .into_iter()
            .map(|h| (h.trim().to_lowercase(), h))
            .collect();

        let mut map = Self::default();
        for role in FieldRole::ALL {
            map.columns[role.slot()] = role.candidates().iter().find_map(|candidate| {
                normalized
                    .iter()
                    .position(|(lower, _)| lower == candidate)
                    .map(|index| ResolvedColumn {
                        index,
                        header: normalized[index].1.to_string(),
                    })
            });
        }
        map
    }

    /// Convenience wrapper over [`FieldRoleMap::resolve`] for a parsed header record.
    pub fn from_record(headers: &StringRecord) -> Self {
        Self::resolve(headers.iter())
    }

    pub fn column(&self, role: FieldRole) -> Option<&ResolvedColumn> {
        self.columns[role.slot()].as_ref()
    }

    pub fn index(&self, role: FieldRole) -> Option<usize> {
        self.column(role).map(|c| c.index)
    }

    pub fn is_resolved(&self, role: FieldRole) -> bool {
        self.columns[role.slot()].is_some()
    }

    /// Returns the cell for `role` in `record`, or `None` if the role is unresolved or
    /// the row is too short to contain that column.
    pub fn value<'r>(&self, role: FieldRole, record: &'r StringRecord) -> Option<&'r str> {
        self.index(role).and_then(|i| record.get(i))
    }

    /// Roles that found no matching header.
    pub fn unresolved(&self) -> Vec<FieldRole> {
        FieldRole::ALL
            .into_iter()
            .filter(|role| !self.is_resolved(*role))
            .collect()
    }
}
