// crates/simplify_snippet/src/batch.rs

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::processor::{FileProcessor, ProcessOutcome};

/// Collects the files under `root` whose name ends with `suffix`, sorted by
/// path. Only the top level of `root` is searched unless `recursive` is set.
pub fn discover_files(root: &Path, suffix: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("Search root {} is not a directory", root.display());
    }

    let walker = if recursive {
        WalkDir::new(root)
    } else {
        WalkDir::new(root).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.file_name()
                .and_then(|s| s.to_str())
                .map(|name| name.ends_with(suffix))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Failed(String),
}

impl From<ProcessOutcome> for FileOutcome {
    fn from(outcome: ProcessOutcome) -> Self {
        match outcome {
            ProcessOutcome::Updated => FileOutcome::Updated,
            ProcessOutcome::Unchanged => FileOutcome::Unchanged,
        }
    }
}

/// Per-file results of one batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn updated(&self) -> usize {
        self.count(|o| *o == FileOutcome::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == FileOutcome::Unchanged)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Console line for one processed file.
pub fn report_line(path: &Path, outcome: &FileOutcome) -> String {
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    match outcome {
        FileOutcome::Updated => format!("✓ Updated: {}", name),
        FileOutcome::Unchanged => format!("- Unchanged: {}", name),
        FileOutcome::Failed(err) => format!("✗ Error: {}: {}", name, err),
    }
}

/// Runs `processor` over every file. A failure is recorded and the batch
/// carries on with the next file. `on_result` is called after each file.
pub fn run_batch(
    files: &[PathBuf],
    processor: &dyn FileProcessor,
    mut on_result: impl FnMut(&Path, &FileOutcome),
) -> BatchReport {
    let mut report = BatchReport::default();
    for path in files {
        let outcome = match processor.process_file(path) {
            Ok(outcome) => FileOutcome::from(outcome),
            Err(err) => {
                log::warn!("failed to process {}: {:#}", path.display(), err);
                FileOutcome::Failed(format!("{:#}", err))
            }
        };
        on_result(path, &outcome);
        report.entries.push((path.clone(), outcome));
    }
    report
}
