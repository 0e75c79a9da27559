// crates/entry_block/src/lexical.rs

use crate::lexer::{classify, Context};
use crate::traits::{Block, BlockScan, BlockScanner};
use snippet_markers::{CLOSE_BRACE, OPEN_BRACE};

const OPEN: u8 = OPEN_BRACE as u8;
const CLOSE: u8 = CLOSE_BRACE as u8;

/// Brace scanner that only looks at code.
///
/// The header must start in code context (a `func main() {` quoted in a
/// comment does not count) and braces inside comments, string, rune and raw
/// string literals never change the depth.
pub struct LexicalBraceScanner;

impl BlockScanner for LexicalBraceScanner {
    fn scan(&self, content: &str, header: &str) -> BlockScan {
        if header.is_empty() {
            return BlockScan::NotFound;
        }
        let contexts = classify(content);
        let start = match content
            .match_indices(header)
            .map(|(i, _)| i)
            .find(|&i| contexts[i] == Context::Code)
        {
            Some(start) => start,
            None => return BlockScan::NotFound,
        };

        let body_start = start + header.len();
        let mut depth = 0usize;
        for (offset, &b) in content.as_bytes().iter().enumerate().skip(body_start) {
            if contexts[offset] != Context::Code {
                continue;
            }
            match b {
                OPEN => depth += 1,
                CLOSE => {
                    if depth == 0 {
                        return BlockScan::Closed(Block { start, end: offset });
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        BlockScan::Unterminated { start }
    }
}
