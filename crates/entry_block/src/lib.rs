// crates/entry_block/src/lib.rs

pub mod api;
mod factory; // internal
pub mod lexer;
pub mod lexical;
pub mod naive;
pub mod traits;

pub use api::{extract_entry_block, extract_entry_block_with, scan_entry_block};
pub use factory::ScanStrategy;
pub use traits::{Block, BlockScan, BlockScanner};
