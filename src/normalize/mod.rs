//! Row Normalizer.
//!
//! Turns one raw row into a [`CanonicalRecord`] with the standardized fields the
//! matcher works on. Field-level parse failures degrade to empty/absent values; the
//! only reason a row produces no record is the discard rule (no city, no locality and
//! no cuisines).

pub mod fields;
pub mod normalizer;
pub mod record;

#[cfg(test)]
mod tests;

pub use fields::{
    derive_price_bucket, normalize_cuisine_token, normalize_cuisines, parse_avg_cost,
    parse_price_range, parse_rating,
};
pub use normalizer::RowNormalizer;
pub use record::{CanonicalRecord, PriceBucket, format_rating, join_cuisines, split_cuisines};
