//! Exercise generation
//!
//! An exercise is one question about one word. Choice exercises offer up to
//! `ANSWER_OPTIONS` variants; input exercises expect the answer to be typed.

use super::Database;
use crate::core::{NounArticle, VocabWord, capitalize_noun, check_spelling_perfect, check_spelling_simple};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Maximum number of variants in a choice exercise
pub const ANSWER_OPTIONS: usize = 4;

/// Exercise types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ExerciseKind {
    /// Pick the German word for a translation
    SelectDe,
    /// Type the German word for a translation
    TranslateRuDe,
    /// Pick the translation of a German word
    SelectRu,
    /// Pick the article of a noun
    GuessNounArticle,
    /// Type a conjugated verb form
    VerbForm,
}

impl ExerciseKind {
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::TranslateRuDe | Self::VerbForm)
    }
}

/// Verb form asked for by a verb form exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum VerbForm {
    PresentThird,
    Praeteritum,
    Perfect,
}

impl VerbForm {
    /// Expected answer for `word`, if the word is a verb with this form
    #[must_use]
    pub fn expected(self, word: &VocabWord) -> Option<String> {
        let forms = word.verb_forms()?;
        match self {
            Self::PresentThird => forms.present_third.clone(),
            Self::Praeteritum => forms.praeteritum.clone(),
            Self::Perfect => forms.perfect_full(),
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Self::PresentThird => "Add verb in present tense: Er ... jetzt",
            Self::Praeteritum => "Add verb in Präteritum: Er ... einst",
            Self::Perfect => "Add verb in Perfekt: Er ... ... gestern",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ExerciseData {
    Choice {
        answers: Vec<String>,
        correct_idx: usize,
    },
    Article {
        answers: Vec<String>,
        correct_idx: usize,
        correct_message: String,
    },
    Input {
        correct_spelling: String,
    },
    VerbForm {
        form: VerbForm,
        correct_spelling: String,
    },
}

/// A generated exercise about a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    kind: ExerciseKind,
    word: String,
    task: String,
    incorrect_message: String,
    data: ExerciseData,
}

impl Exercise {
    #[must_use]
    pub const fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Key of the word this exercise is about
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    #[must_use]
    pub fn incorrect_message(&self) -> &str {
        &self.incorrect_message
    }

    #[must_use]
    pub fn correct_message(&self) -> &str {
        match &self.data {
            ExerciseData::Article {
                correct_message, ..
            } => correct_message.as_str(),
            _ => "Correct!",
        }
    }

    #[must_use]
    pub const fn is_input(&self) -> bool {
        self.kind.is_input()
    }

    /// Variants of a choice exercise; empty for input exercises
    #[must_use]
    pub fn answers(&self) -> &[String] {
        match &self.data {
            ExerciseData::Choice { answers, .. } | ExerciseData::Article { answers, .. } => {
                answers.as_slice()
            }
            ExerciseData::Input { .. } | ExerciseData::VerbForm { .. } => &[],
        }
    }

    #[must_use]
    pub fn check_answer(&self, answer: usize) -> bool {
        match &self.data {
            ExerciseData::Choice { correct_idx, .. } | ExerciseData::Article { correct_idx, .. } => {
                *correct_idx == answer
            }
            ExerciseData::Input { .. } | ExerciseData::VerbForm { .. } => false,
        }
    }

    #[must_use]
    pub fn check_spelling(&self, input: &str) -> bool {
        match &self.data {
            ExerciseData::Input { correct_spelling } => check_spelling_simple(input, correct_spelling),
            ExerciseData::VerbForm {
                form: VerbForm::Perfect,
                correct_spelling,
            } => check_spelling_perfect(input, correct_spelling),
            ExerciseData::VerbForm {
                correct_spelling, ..
            } => check_spelling_simple(input, correct_spelling),
            ExerciseData::Choice { .. } | ExerciseData::Article { .. } => false,
        }
    }

    /// The expected answer written out
    #[must_use]
    pub fn correct_spelling(&self) -> &str {
        match &self.data {
            ExerciseData::Input { correct_spelling }
            | ExerciseData::VerbForm {
                correct_spelling, ..
            } => correct_spelling.as_str(),
            ExerciseData::Choice {
                answers,
                correct_idx,
            }
            | ExerciseData::Article {
                answers,
                correct_idx,
                ..
            } => answers.get(*correct_idx).map_or("", String::as_str),
        }
    }
}

/// Pick the German word among same-group words
pub fn select_de<R: Rng + ?Sized>(db: &Database, word: &VocabWord, rng: &mut R) -> Exercise {
    let (options, correct_idx) = word_options(db, word, rng);

    Exercise {
        kind: ExerciseKind::SelectDe,
        word: word.word().to_owned(),
        task: format!(
            "Select translation to Deutsch: {} ({})",
            word.translation(),
            word.part_of_speech()
        ),
        incorrect_message: format!("Incorrect! The word is {}", word.spelling()),
        data: ExerciseData::Choice {
            answers: options.iter().map(|w| w.spelling()).collect(),
            correct_idx,
        },
    }
}

/// Pick the translation among same-group words
pub fn select_ru<R: Rng + ?Sized>(db: &Database, word: &VocabWord, rng: &mut R) -> Exercise {
    let (options, correct_idx) = word_options(db, word, rng);

    Exercise {
        kind: ExerciseKind::SelectRu,
        word: word.word().to_owned(),
        task: format!(
            "Select translation to Russian: {} ({})",
            word.spelling(),
            word.part_of_speech()
        ),
        incorrect_message: format!("Incorrect! The translation is {}", word.translation()),
        data: ExerciseData::Choice {
            answers: options.iter().map(|w| w.translation().to_owned()).collect(),
            correct_idx,
        },
    }
}

/// Type the German word for a translation
#[must_use]
pub fn translate_to_de(word: &VocabWord) -> Exercise {
    let mut task = format!(
        "Translate to German: {} ({})",
        word.translation(),
        word.part_of_speech()
    );
    if !word.help().is_empty() {
        task.push_str(&format!(". Hint: {}", word.help()));
    }

    Exercise {
        kind: ExerciseKind::TranslateRuDe,
        word: word.word().to_owned(),
        task,
        incorrect_message: format!("Incorrect! The word is {}", word.spelling()),
        data: ExerciseData::Input {
            correct_spelling: word.spelling(),
        },
    }
}

/// Pick the article of a noun; `None` for other parts of speech
#[must_use]
pub fn guess_noun_article(word: &VocabWord) -> Option<Exercise> {
    let article = word.article()?;
    let answers: Vec<String> = NounArticle::iter().map(NounArticle::answer_caption).collect();
    let correct_idx = NounArticle::iter().position(|a| a == article)?;

    Some(Exercise {
        kind: ExerciseKind::GuessNounArticle,
        word: word.word().to_owned(),
        task: format!(
            "Select the correct article for the noun: {}",
            capitalize_noun(word.word())
        ),
        incorrect_message: format!(
            "Incorrect! The article is {} - {}",
            word.spelling(),
            word.translation()
        ),
        data: ExerciseData::Article {
            answers,
            correct_idx,
            correct_message: format!("Correct! {} - {}", word.spelling(), word.translation()),
        },
    })
}

/// Type a verb form; `None` if the word lacks that form
#[must_use]
pub fn verb_form(word: &VocabWord, form: VerbForm) -> Option<Exercise> {
    let correct_spelling = form.expected(word)?;

    Some(Exercise {
        kind: ExerciseKind::VerbForm,
        word: word.word().to_owned(),
        task: format!(
            "{} [ {} - {} ]",
            form.prompt(),
            word.word(),
            word.translation()
        ),
        incorrect_message: format!("Incorrect! The form is {correct_spelling}"),
        data: ExerciseData::VerbForm {
            form,
            correct_spelling,
        },
    })
}

/// The word plus up to three distinct siblings, shuffled
///
/// Returns the options and the index of `word` among them.
fn word_options<'a, R: Rng + ?Sized>(
    db: &'a Database,
    word: &'a VocabWord,
    rng: &mut R,
) -> (Vec<&'a VocabWord>, usize) {
    let siblings: Vec<&VocabWord> = db.siblings(word).collect();

    let mut options = vec![word];
    options.extend(siblings.choose_multiple(rng, ANSWER_OPTIONS - 1).copied());
    options.shuffle(rng);

    let correct_idx = options
        .iter()
        .position(|w| w.word() == word.word())
        .unwrap_or_default();
    (options, correct_idx)
}
