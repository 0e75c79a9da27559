// crates/simplify_snippet/src/lib.rs

pub mod batch;
pub mod config;
pub mod processor;

pub use batch::{discover_files, run_batch, BatchReport, FileOutcome};
pub use config::{resolve_root, AppConfig, SimplifyOptions};
pub use processor::{
    process_file_with_processor, DefaultFileProcessor, FileProcessor, ProcessOutcome,
};

use entry_block::extract_entry_block_with;
use noise_filter::filter_noise;
use relabel_package::{ensure_package_header, relabel_top_level};
use snippet_markers::{ENTRY_HEADER, SOURCE_PACKAGE, TARGET_PACKAGE};

/// Simplifies one Go teaching snippet.
///
/// Runs the noise filter, truncates after the closing brace of
/// `func main()` and relabels `package main`, in that order. Running it
/// again on its own output changes nothing.
pub fn simplify_source(content: &str, options: &SimplifyOptions) -> String {
    let filtered = filter_noise(content);
    let truncated = extract_entry_block_with(&filtered, ENTRY_HEADER, options.strategy);
    let relabeled = relabel_top_level(&truncated, SOURCE_PACKAGE, TARGET_PACKAGE);
    if options.ensure_header {
        ensure_package_header(&relabeled, TARGET_PACKAGE)
    } else {
        relabeled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entry_block::ScanStrategy;

    #[test]
    fn test_simplify_source_minimal() {
        let input = "package main\n\nfunc main() {\n\tprintln(1)\n}\n\nfunc after() {}\n";
        let output = simplify_source(input, &SimplifyOptions::default());
        assert_eq!(output, "package intermediate\n\nfunc main() {\n\tprintln(1)\n}");
    }

    #[test]
    fn test_simplify_source_ensure_header() {
        let options = SimplifyOptions {
            strategy: ScanStrategy::Lexical,
            ensure_header: true,
        };
        let output = simplify_source("func main() {\n}\n", &options);
        assert_eq!(output, "package intermediate\n\nfunc main() {\n}");
    }

    #[test]
    fn test_simplify_source_naive_strategy() {
        let options = SimplifyOptions {
            strategy: ScanStrategy::Naive,
            ensure_header: false,
        };
        let input = "package main\nfunc main() {\n\ts := \"}\"\n}\n";
        assert_eq!(
            simplify_source(input, &options),
            "package intermediate\nfunc main() {\n\ts := \"}"
        );
    }
}
