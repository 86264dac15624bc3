//! Preprocessing Pipeline.
//!
//! Streams a raw restaurant CSV through the [`RowNormalizer`](crate::normalize::RowNormalizer)
//! and writes the canonical CSV: original header plus the five derived columns, then one
//! line per retained row.
//!
//! # Concurrency
//!
//! Readers assume a stable file. The writer builds the output in a temporary file in the
//! target directory and atomically renames it over the target, so concurrent readers see
//! either the previous file or the complete new one. Callers must still serialize
//! preprocessing runs against the same output path.

pub mod error;
pub mod pipeline;
pub mod writer;


pub use error::{PreprocessError, PreprocessResult};
pub use pipeline::{PreprocessReport, default_output_path, preprocess, preprocess_to};
pub use writer::AtomicCsvWriter;
