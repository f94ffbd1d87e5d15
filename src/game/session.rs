//! The contract between the quiz controller and a word game engine

use crate::core::Vocabulary;

/// A word game session as seen by the quiz controller
///
/// Query methods describe the current exercise and return empty strings, an empty
/// answer list or `false` while no exercise exists.
pub trait GameSession {
    /// Add fetched words to the session, returning the number of distinct words known
    fn load_words(&mut self, vocabulary: Vocabulary) -> usize;

    /// Generate the next exercise
    ///
    /// Returns `false` if no exercise could be generated. The previous exercise, if
    /// any, stays current in that case.
    fn create_exercise(&mut self) -> bool;

    /// Task text of the current exercise
    fn task(&self) -> String;

    /// Answer variants of a multiple-choice exercise, in button order
    fn answers(&self) -> Vec<String>;

    /// Grade a multiple-choice answer by its index into `answers()`
    fn check_answer(&mut self, index: usize) -> bool;

    /// Whether the current exercise expects typed input rather than a choice
    fn is_exercise_input(&self) -> bool;

    /// Grade a typed answer
    fn check_answer_input(&mut self, text: &str) -> bool;

    /// Canonical spelling of the expected typed answer
    fn correct_spelling(&self) -> String;

    fn correct_message(&self) -> String;

    fn incorrect_message(&self) -> String;
}
