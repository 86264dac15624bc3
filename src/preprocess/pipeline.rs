use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::{PreprocessError, PreprocessResult};
use super::writer::AtomicCsvWriter;
use crate::constants::{DERIVED_COLUMNS, PROCESSED_SUFFIX};
use crate::normalize::RowNormalizer;

/// Outcome of one preprocessing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    pub output_path: PathBuf,
    /// Data rows that parsed as CSV.
    pub rows_read: usize,
    pub rows_written: usize,
    /// Rows dropped by the discard rule.
    pub rows_discarded: usize,
    /// Rows that could not be parsed at all.
    pub rows_skipped: usize,
}

/// `data/restaurants.csv` → `data/restaurants_processed.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    input.with_file_name(format!("{}{}.csv", stem, PROCESSED_SUFFIX))
}

/// Preprocesses `input` into [`default_output_path`].
pub fn preprocess(input: &Path) -> PreprocessResult<PreprocessReport> {
    preprocess_to(input, &default_output_path(input))
}

/// Preprocesses `input` into `output`, fully replacing any previous output.
pub fn preprocess_to(input: &Path, output: &Path) -> PreprocessResult<PreprocessReport> {
    if !input.exists() {
        return Err(PreprocessError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let file = File::open(input)?;
    run(file, input, output)
}

fn run<R: Read>(source: R, input: &Path, output: &Path) -> PreprocessResult<PreprocessReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = read_headers(&mut reader, input)?;
    let normalizer = RowNormalizer::from_headers(&headers);

    let unresolved = normalizer.roles().unresolved();
    if !unresolved.is_empty() {
        debug!(
            input = %input.display(),
            unresolved = ?unresolved,
            "Some field roles have no matching header"
        );
    }

    let mut writer = AtomicCsvWriter::create(output)?;
    writer.write_record(headers.iter().chain(DERIVED_COLUMNS))?;

    let mut rows_read = 0;
    let mut rows_written = 0;
    let mut rows_discarded = 0;
    let mut rows_skipped = 0;

    for result in reader.byte_records() {
        let row = match result {
            Ok(row) => StringRecord::from_byte_record_lossy(row),
            Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                rows_skipped += 1;
                warn!(
                    line = ?e.position().map(|p| p.line()),
                    error = %e,
                    "Skipping unreadable row"
                );
                continue;
            }
        };
        rows_read += 1;

        match normalizer.normalize(&row) {
            Some(record) => {
                let derived = record.derived_fields();
                writer.write_record(
                    record
                        .original_fields
                        .iter()
                        .map(String::as_str)
                        .chain(derived.iter().map(String::as_str)),
                )?;
                rows_written += 1;
            }
            None => {
                rows_discarded += 1;
                debug!(
                    line = ?row.position().map(|p| p.line()),
                    "Discarding row without city, locality or cuisines"
                );
            }
        }
    }

    let output_path = writer.commit()?;

    info!(
        input = %input.display(),
        output = %output_path.display(),
        rows_read,
        rows_written,
        rows_discarded,
        rows_skipped,
        "Preprocessing complete"
    );

    Ok(PreprocessReport {
        output_path,
        rows_read,
        rows_written,
        rows_discarded,
        rows_skipped,
    })
}

fn read_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    input: &Path,
) -> PreprocessResult<StringRecord> {
    let empty = || PreprocessError::EmptySource {
        path: input.to_path_buf(),
    };

    match reader.byte_headers() {
        Ok(headers) => {
            let headers = StringRecord::from_byte_record_lossy(headers.clone());
            if headers.iter().any(|h| !h.trim().is_empty()) {
                Ok(headers)
            } else {
                Err(empty())
            }
        }
        Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => Err(e.into()),
        Err(_) => Err(empty()),
    }
}
