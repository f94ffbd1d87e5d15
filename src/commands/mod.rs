//! Command implementations

pub mod simple;
pub mod vocabulary;

pub use simple::run_simple;
pub use vocabulary::{VocabularySummary, summarize};
