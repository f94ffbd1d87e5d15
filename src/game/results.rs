//! Per-word answer statistics and weighted word selection
//!
//! Every answer is recorded against its word. Words with a low score (few correct,
//! many wrong answers) get a larger selection weight, so they come up more often.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rustc_hash::FxHashMap;

/// Answer statistics of a single word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordResults {
    pub word: String,
    pub correct: usize,
    pub wrong: usize,
}

impl WordResults {
    #[must_use]
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }

    /// A wrong answer costs twice what a correct one earns
    #[must_use]
    pub fn score(&self) -> i64 {
        self.correct as i64 - 2 * self.wrong as i64
    }
}

/// Statistics for every known word
#[derive(Debug, Default)]
pub struct ResultsTable {
    results: Vec<WordResults>,
    index: FxHashMap<String, usize>,
    weights: Vec<f64>,
}

impl ResultsTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a word; known words keep their statistics
    pub fn register(&mut self, word: &str) {
        if !self.index.contains_key(word) {
            self.index.insert(word.to_owned(), self.results.len());
            self.results.push(WordResults::new(word));
        }
    }

    /// Record an answer and refresh the selection weights
    pub fn record(&mut self, word: &str, correct: bool) {
        let Some(&idx) = self.index.get(word) else {
            tracing::warn!(word, "answer recorded for untracked word");
            return;
        };
        self.results[idx].add(correct);
        self.update_weights();
        tracing::debug!(
            word,
            correct,
            score = self.results[idx].score(),
            "answer recorded"
        );
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordResults> {
        self.index.get(word).map(|&idx| &self.results[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Recompute the weight of every word from the current scores
    ///
    /// Weight is `2·max − min − score + 1`, which is at least `max − min + 1 ≥ 1`.
    pub fn update_weights(&mut self) {
        let scores = self.results.iter().map(WordResults::score);
        let (Some(max), Some(min)) = (scores.clone().max(), scores.min()) else {
            self.weights.clear();
            return;
        };

        self.weights = self
            .results
            .iter()
            .map(|r| (2 * max - min - r.score() + 1) as f64)
            .collect();
    }

    #[must_use]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.index
            .get(word)
            .and_then(|&idx| self.weights.get(idx).copied())
    }

    /// Draw a word among those accepted by `eligible`, weighted by need for practice
    ///
    /// Returns `None` if no tracked word is eligible.
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        eligible: impl Fn(&str) -> bool,
    ) -> Option<&str> {
        let (indices, weights): (Vec<usize>, Vec<f64>) = self
            .results
            .iter()
            .zip(&self.weights)
            .enumerate()
            .filter(|(_, (r, _))| eligible(&r.word))
            .map(|(i, (_, &w))| (i, w))
            .unzip();

        let dist = WeightedIndex::<f64>::new(&weights).ok()?;
        Some(&self.results[indices[dist.sample(rng)]].word)
    }

    /// Words sorted from weakest to strongest
    #[must_use]
    pub fn weakest(&self, n: usize) -> Vec<&WordResults> {
        let mut sorted: Vec<&WordResults> = self.results.iter().collect();
        sorted.sort_by_key(|r| r.score());
        sorted.truncate(n);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table(words: &[&str]) -> ResultsTable {
        let mut table = ResultsTable::new();
        for word in words {
            table.register(word);
        }
        table.update_weights();
        table
    }

    #[test]
    fn score_penalises_wrong_answers() {
        let mut r = WordResults::new("hund");
        r.add(true);
        r.add(true);
        r.add(false);
        assert_eq!(r.score(), 0);
        r.add(false);
        assert_eq!(r.score(), -2);
    }

    #[test]
    fn register_is_idempotent() {
        assert!(ResultsTable::new().is_empty());
        let mut table = table(&["hund", "katze"]);
        table.record("hund", true);
        table.register("hund");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("hund").unwrap().correct, 1);
    }

    #[test]
    fn equal_scores_give_equal_weights() {
        let table = table(&["hund", "katze"]);
        assert_eq!(table.weight("hund"), Some(1.0));
        assert_eq!(table.weight("katze"), Some(1.0));
    }

    #[test]
    fn weaker_words_weigh_more() {
        let mut table = table(&["hund", "katze", "maus"]);
        table.record("hund", false); // -2
        table.record("katze", true); // 1
        // max = 1, min = -2
        assert_eq!(table.weight("hund"), Some(7.0));
        assert_eq!(table.weight("maus"), Some(5.0));
        assert_eq!(table.weight("katze"), Some(4.0));
    }

    #[test]
    fn select_respects_eligibility() {
        let table = table(&["hund", "katze", "maus"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = table.select(&mut rng, |w| w.starts_with('k')).unwrap();
            assert_eq!(word, "katze");
        }
    }

    #[test]
    fn select_none_when_nothing_eligible() {
        let table = table(&["hund"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(table.select(&mut rng, |_| false).is_none());
        assert!(ResultsTable::new().select(&mut rng, |_| true).is_none());
    }

    #[test]
    fn select_favours_weak_words() {
        let mut table = table(&["hund", "katze"]);
        for _ in 0..5 {
            table.record("katze", true);
        }
        // hund: 2·5 − 0 − 0 + 1 = 11, katze: 2·5 − 0 − 5 + 1 = 6
        let mut rng = StdRng::seed_from_u64(42);
        let hund = (0..1000)
            .filter(|_| table.select(&mut rng, |_| true) == Some("hund"))
            .count();
        assert!(hund > 550, "hund drawn {hund} times");
    }

    #[test]
    fn weakest_sorted_by_score() {
        let mut table = table(&["hund", "katze", "maus"]);
        table.record("maus", false);
        table.record("hund", true);
        let weakest: Vec<&str> = table.weakest(2).iter().map(|r| r.word.as_str()).collect();
        assert_eq!(weakest, ["maus", "katze"]);
    }
}
