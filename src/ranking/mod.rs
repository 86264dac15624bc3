//! Ranking Engine.
//!
//! Orders matched records by rating (descending, unrated last) and then by display name
//! (ascending, ordinal), and truncates to the requested result count.

pub mod ranker;


pub use ranker::{Rankable, compare, rank};
