use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use super::error::{PreprocessError, PreprocessResult};

const TEMP_PREFIX: &str = ".platematch-";
const TEMP_SUFFIX: &str = ".csv.tmp";

/// CSV writer that only replaces its target on [`commit`](AtomicCsvWriter::commit).
///
/// Fields are quoted only when they contain a comma, a quote or a line break; quotes
/// inside a field are doubled. Dropping the writer without committing leaves the target
/// untouched and removes the temporary file.
pub struct AtomicCsvWriter {
    target: PathBuf,
    writer: csv::Writer<NamedTempFile>,
}

impl std::fmt::Debug for AtomicCsvWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicCsvWriter")
            .field("target", &self.target)
            .finish()
    }
}

impl AtomicCsvWriter {
    /// Opens a temporary file next to `target`, creating the directory if needed.
    pub fn create(target: &Path) -> PreprocessResult<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)?;

        let writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .flexible(false)
            .from_writer(temp);

        Ok(Self {
            target: target.to_path_buf(),
            writer,
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write_record<I, T>(&mut self, record: I) -> PreprocessResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(record)?;
        Ok(())
    }

    /// Flushes, syncs and renames the temporary file over the target.
    pub fn commit(mut self) -> PreprocessResult<PathBuf> {
        self.writer.flush()?;
        let temp = self
            .writer
            .into_inner()
            .map_err(|e| PreprocessError::Io(std::io::Error::other(e.to_string())))?;
        temp.as_file().sync_all()?;

        temp.persist(&self.target)
            .map_err(|e| PreprocessError::Persist {
                path: self.target.clone(),
                source: e.error,
            })?;

        Ok(self.target)
    }
}
