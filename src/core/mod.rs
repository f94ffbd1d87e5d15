//! Core domain types for the vocabulary quiz
//!
//! Words, their grammatical metadata and the spelling rules used to grade typed answers.
//! Nothing here touches the terminal or the game state.

mod spelling;
mod vocabulary;
mod word;

pub use spelling::{capitalize_noun, check_spelling_perfect, check_spelling_simple, umlaut_normalize};
pub use vocabulary::Vocabulary;
pub use word::{NounArticle, PartOfSpeech, PerfectAux, VerbForms, VocabWord, WordKind};
