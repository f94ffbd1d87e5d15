//! The word game engine

use super::exercise::{self, Exercise, ExerciseKind, VerbForm};
use super::{Database, GameSession, ResultsTable};
use crate::core::Vocabulary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Exercise kinds to draw from; each exercise picks one uniformly
    pub kinds: Vec<ExerciseKind>,
    /// Seed for reproducible sessions; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            kinds: ExerciseKind::iter().collect(),
            seed: None,
        }
    }
}

/// Word game session backed by an in-memory vocabulary
pub struct WordsGame {
    db: Database,
    results: ResultsTable,
    exercise: Option<Exercise>,
    graded: bool,
    kinds: Vec<ExerciseKind>,
    rng: StdRng,
}

impl WordsGame {
    #[must_use]
    pub fn create(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            db: Database::new(),
            results: ResultsTable::new(),
            exercise: None,
            graded: false,
            kinds: config.kinds.clone(),
            rng,
        }
    }

    #[must_use]
    pub const fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    #[must_use]
    pub const fn results(&self) -> &ResultsTable {
        &self.results
    }

    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Try the configured kinds in random order until one yields an exercise
    fn generate(&mut self) -> Option<Exercise> {
        let mut kinds = self.kinds.clone();
        kinds.shuffle(&mut self.rng);

        for kind in kinds {
            if let Some(ex) = self.generate_kind(kind) {
                return Some(ex);
            }
            tracing::debug!(%kind, "no word eligible for exercise kind");
        }
        None
    }

    fn generate_kind(&mut self, kind: ExerciseKind) -> Option<Exercise> {
        let Self {
            db, results, rng, ..
        } = self;

        match kind {
            ExerciseKind::SelectDe | ExerciseKind::SelectRu | ExerciseKind::TranslateRuDe => {
                let key = results.select(rng, |w| db.get(w).is_some())?;
                let word = db.get(key)?;
                Some(match kind {
                    ExerciseKind::SelectDe => exercise::select_de(db, word, rng),
                    ExerciseKind::SelectRu => exercise::select_ru(db, word, rng),
                    _ => exercise::translate_to_de(word),
                })
            }
            ExerciseKind::GuessNounArticle => {
                let key = results.select(rng, |w| db.get(w).is_some_and(|w| w.article().is_some()))?;
                exercise::guess_noun_article(db.get(key)?)
            }
            ExerciseKind::VerbForm => {
                let mut forms: Vec<VerbForm> = VerbForm::iter().collect();
                forms.shuffle(rng);
                forms.into_iter().find_map(|form| {
                    let key =
                        results.select(rng, |w| db.get(w).is_some_and(|w| form.expected(w).is_some()))?;
                    exercise::verb_form(db.get(key)?, form)
                })
            }
        }
    }

    /// Record the first grading of the current exercise
    fn record(&mut self, correct: bool) {
        if self.graded {
            return;
        }
        if let Some(ex) = &self.exercise {
            self.results.record(ex.word(), correct);
            self.graded = true;
        }
    }
}

impl GameSession for WordsGame {
    fn load_words(&mut self, vocabulary: Vocabulary) -> usize {
        for word in vocabulary {
            self.results.register(word.word());
            self.db.insert(word);
        }
        self.results.update_weights();

        tracing::info!(words = self.db.len(), "vocabulary loaded");
        self.db.len()
    }

    fn create_exercise(&mut self) -> bool {
        match self.generate() {
            Some(ex) => {
                tracing::debug!(kind = %ex.kind(), word = ex.word(), "exercise created");
                self.exercise = Some(ex);
                self.graded = false;
                true
            }
            None => {
                tracing::warn!(
                    words = self.db.len(),
                    kinds = self.kinds.len(),
                    "cannot create exercise"
                );
                false
            }
        }
    }

    fn task(&self) -> String {
        self.exercise
            .as_ref()
            .map(|ex| ex.task().to_owned())
            .unwrap_or_default()
    }

    fn answers(&self) -> Vec<String> {
        self.exercise
            .as_ref()
            .map(|ex| ex.answers().to_vec())
            .unwrap_or_default()
    }

    fn check_answer(&mut self, index: usize) -> bool {
        let Some(ex) = &self.exercise else {
            return false;
        };
        if ex.is_input() {
            return false;
        }
        let correct = ex.check_answer(index);
        self.record(correct);
        correct
    }

    fn is_exercise_input(&self) -> bool {
        self.exercise.as_ref().is_some_and(Exercise::is_input)
    }

    fn check_answer_input(&mut self, text: &str) -> bool {
        let Some(ex) = &self.exercise else {
            return false;
        };
        if !ex.is_input() {
            return false;
        }
        let correct = ex.check_spelling(text);
        self.record(correct);
        correct
    }

    fn correct_spelling(&self) -> String {
        self.exercise
            .as_ref()
            .map(|ex| ex.correct_spelling().to_owned())
            .unwrap_or_default()
    }

    fn correct_message(&self) -> String {
        self.exercise
            .as_ref()
            .map(|ex| ex.correct_message().to_owned())
            .unwrap_or_default()
    }

    fn incorrect_message(&self) -> String {
        self.exercise
            .as_ref()
            .map(|ex| ex.incorrect_message().to_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NounArticle, VocabWord, WordKind};
    use crate::wordlists::{EmbeddedSource, WordSource};

    fn seeded(kinds: Vec<ExerciseKind>) -> WordsGame {
        WordsGame::create(&GameConfig {
            kinds,
            seed: Some(2024),
        })
    }

    fn nouns() -> Vocabulary {
        [
            ("hund", NounArticle::Der),
            ("katze", NounArticle::Die),
            ("pferd", NounArticle::Das),
        ]
        .into_iter()
        .map(|(w, a)| VocabWord::new(w, "-", "Tiere", WordKind::Noun { article: a }))
        .collect()
    }

    #[test]
    fn default_config_uses_every_kind() {
        assert_eq!(GameConfig::default().kinds.len(), 5);
    }

    #[test]
    fn load_words_counts_distinct_words() {
        let mut game = seeded(vec![ExerciseKind::SelectDe]);
        assert!(game.database().is_empty());
        assert_eq!(game.load_words(nouns()), 3);
        assert_eq!(game.load_words(nouns()), 3);
        assert_eq!(game.database().len(), 3);
        assert_eq!(game.results().len(), 3);
    }

    #[test]
    fn empty_game_has_no_exercise() {
        let mut game = seeded(GameConfig::default().kinds);
        assert!(game.results().is_empty());
        assert!(!game.create_exercise());
        assert!(game.exercise().is_none());
        assert_eq!(game.task(), "");
        assert!(game.answers().is_empty());
        assert!(!game.check_answer(0));
        assert!(!game.is_exercise_input());
        assert!(!game.check_answer_input("hund"));
    }

    #[test]
    fn no_eligible_word_fails() {
        let mut game = seeded(vec![ExerciseKind::VerbForm]);
        game.load_words(nouns());
        assert!(!game.create_exercise());
    }

    #[test]
    fn falls_back_to_an_eligible_kind() {
        let mut game = seeded(vec![ExerciseKind::VerbForm, ExerciseKind::GuessNounArticle]);
        game.load_words(nouns());
        for _ in 0..10 {
            assert!(game.create_exercise());
            assert_eq!(game.exercise().unwrap().kind(), ExerciseKind::GuessNounArticle);
        }
    }

    #[test]
    fn article_round_records_result_once() {
        let mut game = seeded(vec![ExerciseKind::GuessNounArticle]);
        game.load_words(nouns());
        assert!(game.create_exercise());
        assert!(!game.is_exercise_input());
        assert_eq!(game.answers().len(), 4);

        let word = game.exercise().unwrap().word().to_owned();
        let correct = (0..4).find(|&i| game.exercise().unwrap().check_answer(i)).unwrap();
        assert!(game.check_answer(correct));
        assert!(game.check_answer(correct));
        assert!(!game.check_answer_input("der"));

        let stats = game.results().get(&word).unwrap();
        assert_eq!((stats.correct, stats.wrong), (1, 0));
    }

    #[test]
    fn input_round_uses_spelling() {
        let mut game = seeded(vec![ExerciseKind::TranslateRuDe]);
        game.load_words(nouns());
        assert!(game.create_exercise());
        assert!(game.is_exercise_input());
        assert!(game.answers().is_empty());

        let spelling = game.correct_spelling();
        assert!(spelling.starts_with("der ") || spelling.starts_with("die ") || spelling.starts_with("das "));
        assert!(!game.check_answer(0));
        assert!(!game.check_answer_input("falsch"));
        assert_eq!(game.incorrect_message(), format!("Incorrect! The word is {spelling}"));

        let word = game.exercise().unwrap().word().to_owned();
        assert_eq!(game.results().get(&word).unwrap().wrong, 1);
    }

    #[test]
    fn embedded_vocabulary_supports_every_kind() {
        let vocabulary = EmbeddedSource.fetch().unwrap();
        for kind in ExerciseKind::iter() {
            let mut game = seeded(vec![kind]);
            game.load_words(vocabulary.clone());
            for _ in 0..25 {
                assert!(game.create_exercise(), "{kind} failed");
                assert_eq!(game.is_exercise_input(), kind.is_input());
                assert!(game.answers().len() <= exercise::ANSWER_OPTIONS);
                assert!(!game.task().is_empty());
            }
        }
    }

    #[test]
    fn same_seed_same_session() {
        let vocabulary = EmbeddedSource.fetch().unwrap();
        let mut a = seeded(GameConfig::default().kinds);
        let mut b = seeded(GameConfig::default().kinds);
        a.load_words(vocabulary.clone());
        b.load_words(vocabulary);

        for _ in 0..10 {
            assert!(a.create_exercise());
            assert!(b.create_exercise());
            assert_eq!(a.exercise(), b.exercise());
        }
    }
}
