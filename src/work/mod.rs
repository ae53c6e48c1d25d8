//! Work module for record representation and input parsing.

pub mod item;
pub mod parser;

pub use item::{CrawlContext, Rank, Restriction, WorkRecord, WorkType};
pub use parser::{load_batch, parse_batch, WorkBatch};
