//! Unicode lookups: character names, printability, and the block table.

pub mod blocks;
mod names;

pub use blocks::{all_block_ids, block_of, lookup, printable_candidates, UnicodeBlock, COMMON_BLOCK_IDS};
pub use names::{describe, SystemDatabase, UnicodeDatabase};
