// crates/entry_block/src/factory.rs

use crate::lexical::LexicalBraceScanner;
use crate::naive::NaiveBraceScanner;
use crate::traits::BlockScanner;

/// Which brace-counting strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Skip braces inside comments and literals.
    #[default]
    Lexical,
    /// Count every brace character.
    Naive,
}

// Only visible within the crate.
pub(crate) fn create_block_scanner(strategy: ScanStrategy) -> Box<dyn BlockScanner> {
    match strategy {
        ScanStrategy::Lexical => Box::new(LexicalBraceScanner),
        ScanStrategy::Naive => Box::new(NaiveBraceScanner),
    }
}
