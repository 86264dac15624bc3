//! Cross-cutting, shared constants.
//!
//! Candidate header lists are ordered by priority: the first entry found in a file's
//! header (compared case-insensitively) wins.

pub const CITY_HEADERS: &[&str] = &["city", "listed_in(city)", "restaurant_city", "town"];

pub const LOCALITY_HEADERS: &[&str] = &[
    "locality",
    "location",
    "area",
    "neighborhood",
    "neighbourhood",
    "locality verbose",
];

pub const CUISINE_HEADERS: &[&str] = &["cuisines", "cuisine", "cuisine_type", "food_type"];

pub const RATING_HEADERS: &[&str] = &[
    "aggregate rating",
    "aggregate_rating",
    "rating",
    "rate",
    "avg_rating",
    "stars",
];

pub const PRICE_RANGE_HEADERS: &[&str] =
    &["price range", "price_range", "price_level", "price_tier"];

pub const AVG_COST_HEADERS: &[&str] = &[
    "average cost for two",
    "average_cost_for_two",
    "avg_cost_for_two",
    "approx_cost(for two people)",
    "cost_for_two",
];

pub const ID_HEADERS: &[&str] = &["id", "restaurant_id", "restaurant id", "res_id"];

pub const NAME_HEADERS: &[&str] = &["name", "restaurant name", "restaurant_name", "restaurant"];

pub const STD_CITY: &str = "std_city";
pub const STD_LOCALITY: &str = "std_locality";
pub const STD_RATING: &str = "std_rating";
pub const STD_PRICE_BUCKET: &str = "std_price_bucket";
pub const STD_CUISINES: &str = "std_cuisines";

/// Derived columns appended to every canonical file, in output order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    STD_CITY,
    STD_LOCALITY,
    STD_RATING,
    STD_PRICE_BUCKET,
    STD_CUISINES,
];

/// Separator used when serializing `std_cuisines`.
pub const CUISINE_SEPARATOR: char = '|';

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Average-cost-for-two ceilings for the `low`, `medium` and `high` buckets.
pub const LOW_COST_CEILING: f64 = 500.0;
pub const MEDIUM_COST_CEILING: f64 = 1000.0;
pub const HIGH_COST_CEILING: f64 = 2000.0;

pub const DEFAULT_NUM_RESULTS: usize = 5;
pub const MIN_NUM_RESULTS: i64 = 1;
pub const MAX_NUM_RESULTS: i64 = 10;

/// Name reported for records whose name column is missing or empty.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Suffix appended to the input file stem when no output path is given.
pub const PROCESSED_SUFFIX: &str = "_processed";
