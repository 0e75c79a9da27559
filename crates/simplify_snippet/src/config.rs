// crates/simplify_snippet/src/config.rs

use anyhow::{Context, Result};
use entry_block::ScanStrategy;
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the search root when no ROOT
/// argument is given.
pub const ROOT_ENV: &str = "SIMPLIFY_ROOT";

/// Knobs for the per-document pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Brace scanner used to find the end of `func main()`.
    pub strategy: ScanStrategy,
    /// Prepend `package intermediate` when a file has no package line.
    pub ensure_header: bool,
}

/// Centralized runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub root: PathBuf,
    pub suffix: String,
    pub recursive: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub options: SimplifyOptions,
}

/// Picks the search root: explicit argument first, then `SIMPLIFY_ROOT`,
/// then the current directory.
pub fn resolve_root(arg: Option<&str>) -> Result<PathBuf> {
    if let Some(root) = arg {
        return Ok(PathBuf::from(root));
    }
    if let Ok(root) = env::var(ROOT_ENV) {
        if !root.is_empty() {
            return Ok(PathBuf::from(root));
        }
    }
    env::current_dir().context("Failed to get current directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let root = resolve_root(Some("/tmp/topics")).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/topics"));
    }

    #[test]
    fn test_default_options() {
        let options = SimplifyOptions::default();
        assert_eq!(options.strategy, ScanStrategy::Lexical);
        assert!(!options.ensure_header);
    }
}
