//! Vocabulary command
//!
//! Fetches a word source and counts what it holds.

use crate::core::PartOfSpeech;
use crate::wordlists::{FetchError, WordSource};

/// Contents of a word source
#[derive(Debug, Clone)]
pub struct VocabularySummary {
    pub source: String,
    pub total: usize,
    pub by_part_of_speech: Vec<(PartOfSpeech, usize)>,
    pub by_group: Vec<(String, usize)>,
}

/// Fetch `source` and summarise it
///
/// # Errors
///
/// Returns the source's error if the fetch fails.
pub fn summarize(source: &dyn WordSource) -> Result<VocabularySummary, FetchError> {
    let vocabulary = source.fetch()?;
    tracing::debug!(words = vocabulary.len(), source = %source.describe(), "vocabulary fetched");

    Ok(VocabularySummary {
        source: source.describe(),
        total: vocabulary.len(),
        by_part_of_speech: vocabulary.count_by_part_of_speech(),
        by_group: vocabulary.count_by_group(),
    })
}
