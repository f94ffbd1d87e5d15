//! Vocabulary sources
//!
//! Provides the built-in word table compiled into the binary, a loader for
//! tab-separated word tables and the `WordSource` abstraction the quiz fetches from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORD_ROWS, WORD_ROWS_COUNT};
pub use loader::ParseError;
pub use source::{EmbeddedSource, FetchError, FileSource, WordSource, fetch_in_background};
