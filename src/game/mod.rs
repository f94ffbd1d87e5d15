//! Word game engine
//!
//! The quiz controller talks to the engine only through the `GameSession` trait.
//! `WordsGame` is the concrete engine: it keeps the vocabulary, tracks how well each
//! word is known and generates exercises that favour the weakest words.

mod database;
mod engine;
pub mod exercise;
pub mod results;
mod session;

pub use database::Database;
pub use engine::{GameConfig, WordsGame};
pub use exercise::{Exercise, ExerciseKind, VerbForm};
pub use results::{ResultsTable, WordResults};
pub use session::GameSession;
