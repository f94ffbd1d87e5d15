//! A loaded list of vocabulary words

use super::{PartOfSpeech, VocabWord};
use strum::IntoEnumIterator;

/// Words produced by a word source, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<VocabWord>,
}

impl Vocabulary {
    #[must_use]
    pub const fn new(words: Vec<VocabWord>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocabWord> {
        self.words.iter()
    }

    /// Number of words per part of speech, zero counts omitted
    #[must_use]
    pub fn count_by_part_of_speech(&self) -> Vec<(PartOfSpeech, usize)> {
        PartOfSpeech::iter()
            .map(|pos| {
                let count = self
                    .words
                    .iter()
                    .filter(|w| w.part_of_speech() == pos)
                    .count();
                (pos, count)
            })
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Number of words per group, in order of first appearance
    #[must_use]
    pub fn count_by_group(&self) -> Vec<(String, usize)> {
        let mut groups: Vec<(String, usize)> = Vec::new();
        for word in &self.words {
            match groups.iter_mut().find(|(name, _)| name == word.group()) {
                Some((_, count)) => *count += 1,
                None => groups.push((word.group().to_string(), 1)),
            }
        }
        groups
    }
}

impl IntoIterator for Vocabulary {
    type Item = VocabWord;
    type IntoIter = std::vec::IntoIter<VocabWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabWord;
    type IntoIter = std::slice::Iter<'a, VocabWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<VocabWord> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = VocabWord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
