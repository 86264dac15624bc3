//! Canonical dataset access: the query interface and the catalog accessors.
//!
//! Query results carry `{id, name, city, locality, rating, price_bucket, cuisines}`;
//! `id` and `name` come from the original columns (`id`, `restaurant_id`, ... /
//! `name`, `restaurant name`, ...). A missing name is reported as `"Unknown"`.
//!
//! The query path only fails when the dataset file itself is missing or has no header.

pub mod cache;
pub mod dataset;
pub mod error;
pub mod places;


use std::path::Path;

pub use cache::CatalogCache;
pub use dataset::{Dataset, RestaurantEntry, RestaurantResult};
pub use error::{CatalogError, CatalogResult};
pub use places::{Place, distinct_cuisines, distinct_places};

use crate::matching::PreferenceSet;

/// Loads the canonical file at `path` and returns the ranked matches for `prefs`.
pub fn query(path: &Path, prefs: &PreferenceSet) -> CatalogResult<Vec<RestaurantResult>> {
    Ok(Dataset::load(path)?.query(prefs))
}

/// Distinct places in the canonical file at `path`.
pub fn places(path: &Path) -> CatalogResult<Vec<Place>> {
    Ok(Dataset::load(path)?.places())
}

/// Distinct cuisine vocabulary in the canonical file at `path`.
pub fn cuisines(path: &Path) -> CatalogResult<Vec<String>> {
    Ok(Dataset::load(path)?.cuisines())
}
