//! In-memory word database

use crate::core::{PartOfSpeech, VocabWord};
use rustc_hash::FxHashMap;

/// Words keyed by their German spelling
///
/// Keeps insertion order so that seeded sessions draw the same words every run.
#[derive(Debug, Default)]
pub struct Database {
    words: Vec<VocabWord>,
    index: FxHashMap<String, usize>,
}

impl Database {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, replacing any earlier entry with the same key
    pub fn insert(&mut self, word: VocabWord) {
        if let Some(&idx) = self.index.get(word.word()) {
            self.words[idx] = word;
        } else {
            self.index.insert(word.word().to_string(), self.words.len());
            self.words.push(word);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VocabWord> {
        self.index.get(key).map(|&idx| &self.words[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabWord> {
        self.words.iter()
    }

    /// Words sharing `word`'s group and part of speech, `word` itself excluded
    pub fn siblings<'a>(&'a self, word: &'a VocabWord) -> impl Iterator<Item = &'a VocabWord> {
        let pos: PartOfSpeech = word.part_of_speech();
        self.words.iter().filter(move |w| {
            w.word() != word.word() && w.group() == word.group() && w.part_of_speech() == pos
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NounArticle, WordKind};

    fn noun(word: &str, translation: &str, group: &str) -> VocabWord {
        VocabWord::new(word, translation, group, WordKind::Noun { article: NounArticle::Der })
    }

    #[test]
    fn insert_replaces_duplicates() {
        let mut db = Database::new();
        assert!(db.is_empty());
        db.insert(noun("hund", "пёс", "Tiere"));
        db.insert(noun("vogel", "птица", "Tiere"));
        db.insert(noun("hund", "собака", "Tiere"));

        assert_eq!(db.len(), 2);
        assert_eq!(db.get("hund").unwrap().translation(), "собака");
        let order: Vec<&str> = db.iter().map(VocabWord::word).collect();
        assert_eq!(order, ["hund", "vogel"]);
    }

    #[test]
    fn siblings_share_group_and_part_of_speech() {
        let mut db = Database::new();
        db.insert(noun("hund", "собака", "Tiere"));
        db.insert(noun("vogel", "птица", "Tiere"));
        db.insert(noun("zug", "поезд", "Reisen"));
        db.insert(VocabWord::new("laufen", "бегать", "Tiere", WordKind::Verb(Default::default())));

        let hund = db.get("hund").unwrap();
        let siblings: Vec<&str> = db.siblings(hund).map(VocabWord::word).collect();
        assert_eq!(siblings, ["vogel"]);
    }
}
