// crates/entry_block/src/api.rs

use crate::factory::{create_block_scanner, ScanStrategy};
use crate::traits::BlockScan;

/// Scans `content` for the entry construct introduced by `header`.
pub fn scan_entry_block(content: &str, header: &str, strategy: ScanStrategy) -> BlockScan {
    create_block_scanner(strategy).scan(content, header)
}

/// Truncates `content` right after the closing brace of the entry construct.
///
/// When the header is missing, or its braces never balance, the content is
/// returned unchanged: a document without an entry point is left as-is and
/// an unbalanced cut would be worse than no cut at all.
pub fn extract_entry_block_with(content: &str, header: &str, strategy: ScanStrategy) -> String {
    match scan_entry_block(content, header, strategy) {
        BlockScan::Closed(block) => content[..=block.end].to_string(),
        BlockScan::NotFound => {
            log::debug!("entry header '{}' not found; leaving document as-is", header);
            content.to_string()
        }
        BlockScan::Unterminated { start } => {
            log::warn!(
                "entry block starting at byte {} never closes; skipping truncation",
                start
            );
            content.to_string()
        }
    }
}

/// [`extract_entry_block_with`] using the lexical scanner.
pub fn extract_entry_block(content: &str, header: &str) -> String {
    extract_entry_block_with(content, header, ScanStrategy::default())
}
