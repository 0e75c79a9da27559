// crates/simplify_snippet/src/processor.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SimplifyOptions;
use crate::simplify_source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The file content changed (and was written unless in dry-run mode).
    Updated,
    /// Simplifying produced identical content; the file was not touched.
    Unchanged,
}

/// Trait that abstracts file processing.
pub trait FileProcessor {
    /// Reads, simplifies and rewrites the file at `file_path`.
    fn process_file(&self, file_path: &Path) -> Result<ProcessOutcome>;
}

/// Reads the whole file, runs [`simplify_source`] and writes the result back
/// to the same path.
#[derive(Debug, Clone, Default)]
pub struct DefaultFileProcessor {
    pub options: SimplifyOptions,
    pub dry_run: bool,
}

impl FileProcessor for DefaultFileProcessor {
    fn process_file(&self, file_path: &Path) -> Result<ProcessOutcome> {
        let original = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let simplified = simplify_source(&original, &self.options);
        if simplified == original {
            log::debug!("{} already simplified", file_path.display());
            return Ok(ProcessOutcome::Unchanged);
        }

        if self.dry_run {
            log::info!("dry run: not writing {}", file_path.display());
        } else {
            fs::write(file_path, &simplified)
                .with_context(|| format!("Failed to write {}", file_path.display()))?;
        }
        log::debug!(
            "{}: {} -> {} bytes",
            file_path.display(),
            original.len(),
            simplified.len()
        );
        Ok(ProcessOutcome::Updated)
    }
}

/// Public API function to process a file using a provided `FileProcessor` implementation.
pub fn process_file_with_processor<P: AsRef<Path>>(
    processor: &dyn FileProcessor,
    file_path: P,
) -> Result<ProcessOutcome> {
    processor.process_file(file_path.as_ref())
}
