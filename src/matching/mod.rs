//! Preference Matcher.
//!
//! A record matches when every requested preference holds (location, price, rating
//! floor, cuisine). Each predicate is a standalone pure function so it can be tested
//! on its own; [`PreferenceMatcher`] normalizes a [`PreferenceSet`] once and
//! short-circuits across them.
//!
//! Multi-part locations are deliberately loose: each comma-separated part only has to
//! appear in the city *or* the locality, independently of the other parts.

pub mod matcher;
pub mod preferences;


pub use matcher::{
    PreferenceMatcher, cuisine_matches, location_matches, matches, price_matches, rating_matches,
};
pub use preferences::{PreferenceSet, clamp_num_results};
