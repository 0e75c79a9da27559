// crates/entry_block/src/traits.rs

/// Byte range of an entry construct: `start` is where the header begins,
/// `end` is the offset of its matching closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

/// Outcome of scanning a document for the entry construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockScan {
    /// The header does not occur (library-style file).
    NotFound,
    /// The header was found at `start` but its braces never balance.
    Unterminated { start: usize },
    /// The entry construct closes at `Block::end`.
    Closed(Block),
}

/// Locates the balanced brace block that follows an entry header.
pub trait BlockScanner {
    /// Scans `content` for the first `header` (which includes its opening
    /// brace) and looks for the brace that brings the depth back to the
    /// level of the header.
    fn scan(&self, content: &str, header: &str) -> BlockScan;
}
