// crates/entry_block/src/naive.rs

use crate::traits::{Block, BlockScan, BlockScanner};
use snippet_markers::{CLOSE_BRACE, OPEN_BRACE};

/// Counts every brace character, whatever context it appears in.
///
/// Braces inside string literals or comments can therefore end the scan
/// early or late; [`crate::lexical::LexicalBraceScanner`] avoids that.
pub struct NaiveBraceScanner;

impl BlockScanner for NaiveBraceScanner {
    fn scan(&self, content: &str, header: &str) -> BlockScan {
        if header.is_empty() {
            return BlockScan::NotFound;
        }
        let start = match content.find(header) {
            Some(start) => start,
            None => return BlockScan::NotFound,
        };

        let body_start = start + header.len();
        let mut depth = 0usize;
        for (offset, c) in content[body_start..].char_indices() {
            if c == OPEN_BRACE {
                depth += 1;
            } else if c == CLOSE_BRACE {
                if depth == 0 {
                    return BlockScan::Closed(Block {
                        start,
                        end: body_start + offset,
                    });
                }
                depth -= 1;
            }
        }
        BlockScan::Unterminated { start }
    }
}
