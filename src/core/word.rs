//! Vocabulary word representation
//!
//! A `VocabWord` is one row of the word table: the German word, its translation,
//! the thematic group it belongs to and the grammatical data the exercises need.

use super::spelling::capitalize_noun;
use std::fmt;
use strum::{Display, EnumIter};

/// Part of speech of a vocabulary word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum PartOfSpeech {
    #[strum(to_string = "noun")]
    Noun,
    #[strum(to_string = "verb")]
    Verb,
    #[strum(to_string = "adj")]
    Adjective,
    #[strum(to_string = "adv")]
    Adverb,
    #[strum(to_string = "preposition")]
    Preposition,
}

impl PartOfSpeech {
    /// Parse the short code used in word tables (`n`, `v`, `adj`, `adv`, `prep`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code.trim() {
            "n" => Self::Noun,
            "v" => Self::Verb,
            "adj" => Self::Adjective,
            "adv" => Self::Adverb,
            "prep" => Self::Preposition,
            _ => return None,
        })
    }
}

/// Grammatical article of a noun
///
/// Variant order is the order of the answer buttons in article exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum NounArticle {
    Der,
    Das,
    Die,
    Plural,
}

impl NounArticle {
    /// Parse the article code used in word tables (`der`, `das`, `die`, `pl`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code.trim() {
            "der" => Self::Der,
            "das" => Self::Das,
            "die" => Self::Die,
            "pl" => Self::Plural,
            _ => return None,
        })
    }

    /// Caption used on an answer button
    ///
    /// Plural nouns also take `die`, so the button spells out which one is meant.
    #[must_use]
    pub fn answer_caption(self) -> String {
        match self {
            Self::Plural => "die (plural)".to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for NounArticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Der => "der",
            Self::Das => "das",
            Self::Die | Self::Plural => "die",
        };
        write!(f, "{s}")
    }
}

/// Auxiliary verb used to build the Perfekt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PerfectAux {
    #[strum(to_string = "hat")]
    Haben,
    #[strum(to_string = "ist")]
    Sein,
    #[strum(to_string = "hat/ist")]
    Both,
}

impl PerfectAux {
    /// Parse the auxiliary column of a word table (`hat`, `ist`, `hat/ist`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code.trim() {
            "hat" => Self::Haben,
            "ist" => Self::Sein,
            "hat/ist" => Self::Both,
            _ => return None,
        })
    }
}

/// Conjugated forms of a verb, each optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbForms {
    pub praeteritum: Option<String>,
    pub perfect: Option<String>,
    pub perfect_aux: Option<PerfectAux>,
    pub present_third: Option<String>,
}

impl VerbForms {
    /// Full Perfekt form, auxiliary first (`ist gegangen`)
    #[must_use]
    pub fn perfect_full(&self) -> Option<String> {
        Some(format!("{} {}", self.perfect_aux?, self.perfect.as_deref()?))
    }
}

/// Data specific to a part of speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordKind {
    Noun { article: NounArticle },
    Verb(VerbForms),
    Adjective,
    Adverb,
    Preposition,
}

/// A single vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabWord {
    word: String,
    translation: String,
    group: String,
    help: String,
    kind: WordKind,
}

impl VocabWord {
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        group: impl Into<String>,
        kind: WordKind,
    ) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            group: group.into(),
            help: String::new(),
            kind,
        }
    }

    /// Attach a hint shown with translation tasks
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// The bare German word, as keyed in the word table
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[inline]
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &WordKind {
        &self.kind
    }

    #[must_use]
    pub const fn part_of_speech(&self) -> PartOfSpeech {
        match self.kind {
            WordKind::Noun { .. } => PartOfSpeech::Noun,
            WordKind::Verb(_) => PartOfSpeech::Verb,
            WordKind::Adjective => PartOfSpeech::Adjective,
            WordKind::Adverb => PartOfSpeech::Adverb,
            WordKind::Preposition => PartOfSpeech::Preposition,
        }
    }

    #[must_use]
    pub const fn article(&self) -> Option<NounArticle> {
        match self.kind {
            WordKind::Noun { article } => Some(article),
            _ => None,
        }
    }

    #[must_use]
    pub const fn verb_forms(&self) -> Option<&VerbForms> {
        match &self.kind {
            WordKind::Verb(forms) => Some(forms),
            _ => None,
        }
    }

    /// Canonical written form: nouns carry their article and a capital letter
    ///
    /// # Examples
    /// ```
    /// use vocab_quiz::core::{NounArticle, VocabWord, WordKind};
    ///
    /// let hund = VocabWord::new("hund", "собака", "Tiere", WordKind::Noun { article: NounArticle::Der });
    /// assert_eq!(hund.spelling(), "der Hund");
    /// ```
    #[must_use]
    pub fn spelling(&self) -> String {
        match self.kind {
            WordKind::Noun { article } => format!("{article} {}", capitalize_noun(&self.word)),
            _ => self.word.clone(),
        }
    }
}

impl fmt::Display for VocabWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.spelling(), self.part_of_speech())
    }
}
