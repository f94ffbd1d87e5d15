//! Word table parsing
//!
//! A word table is tab-separated text with one word per row:
//!
//! ```text
//! word  pos  translation  group  article  perfect  praeteritum  help  perfect_verb  present_third
//! ```
//!
//! Blank rows and rows starting with `#` are skipped, as is a header row whose first
//! cell is `word`. Only the first four columns are required; the rest may be empty or
//! missing. Rows with an unknown part of speech are skipped.

use super::source::FetchError;
use crate::core::{NounArticle, PartOfSpeech, PerfectAux, VerbForms, VocabWord, Vocabulary, WordKind};
use std::fs;
use std::path::Path;
use thiserror::Error;

const WORD_IDX: usize = 0;
const POS_IDX: usize = 1;
const TRANSLATION_IDX: usize = 2;
const GROUP_IDX: usize = 3;
const ARTICLE_IDX: usize = 4;
const PERFECT_IDX: usize = 5;
const PRAETERITUM_IDX: usize = 6;
const HELP_IDX: usize = 7;
const PERFECT_VERB_IDX: usize = 8;
const PRESENT_THIRD_IDX: usize = 9;

/// Error in a word table row
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: missing {column}")]
    MissingColumn { line: usize, column: &'static str },
    #[error("line {line}: unknown article {value:?}")]
    UnknownArticle { line: usize, value: String },
    #[error("line {line}: unknown perfect auxiliary {value:?}")]
    UnknownPerfectAux { line: usize, value: String },
}

/// Cells of one table row
struct Row<'a> {
    line: usize,
    cells: Vec<&'a str>,
}

impl<'a> Row<'a> {
    fn cell(&self, idx: usize) -> &'a str {
        self.cells.get(idx).copied().unwrap_or_default()
    }

    fn required(&self, idx: usize, column: &'static str) -> Result<&'a str, ParseError> {
        let value = self.cell(idx);
        if value.is_empty() {
            return Err(ParseError::MissingColumn {
                line: self.line,
                column,
            });
        }
        Ok(value)
    }

    fn optional(&self, idx: usize) -> Option<String> {
        let value = self.cell(idx);
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Parse word table rows
///
/// # Errors
///
/// Returns a `ParseError` naming the first malformed row.
///
/// # Examples
/// ```
/// use vocab_quiz::wordlists::loader::parse_rows;
///
/// let vocabulary = parse_rows(["hund\tn\tсобака\tTiere\tder"]).unwrap();
/// assert_eq!(vocabulary.len(), 1);
/// ```
pub fn parse_rows<'a, I>(rows: I) -> Result<Vocabulary, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words = Vec::new();
    let mut seen_data = false;

    for (i, raw) in rows.into_iter().enumerate() {
        let line = i + 1;
        let raw = raw.trim_end_matches(['\r', '\n']);
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }

        let row = Row {
            line,
            cells: raw.split('\t').map(str::trim).collect(),
        };

        if !seen_data && row.cell(WORD_IDX).eq_ignore_ascii_case("word") {
            seen_data = true;
            continue;
        }
        seen_data = true;

        if let Some(word) = parse_row(&row)? {
            words.push(word);
        }
    }

    Ok(Vocabulary::new(words))
}

/// Parse a whole word table held in memory
///
/// # Errors
///
/// Returns a `ParseError` naming the first malformed row.
pub fn parse_table(content: &str) -> Result<Vocabulary, ParseError> {
    parse_rows(content.lines())
}

/// Load a word table from a file
///
/// # Errors
///
/// Returns `FetchError::Io` if the file cannot be read and `FetchError::Parse` if a row
/// is malformed.
///
/// # Examples
/// ```no_run
/// use vocab_quiz::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary, FetchError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_table(&content)?)
}

fn parse_row(row: &Row<'_>) -> Result<Option<VocabWord>, ParseError> {
    let word = row.required(WORD_IDX, "word")?;
    let pos_code = row.required(POS_IDX, "part of speech")?;
    let translation = row.required(TRANSLATION_IDX, "translation")?;
    let group = row.required(GROUP_IDX, "group")?;

    let Some(pos) = PartOfSpeech::from_code(pos_code) else {
        tracing::debug!(line = row.line, pos = pos_code, "skipping word with unknown part of speech");
        return Ok(None);
    };

    let kind = match pos {
        PartOfSpeech::Noun => {
            let value = row.required(ARTICLE_IDX, "article")?;
            let article =
                NounArticle::from_code(value).ok_or_else(|| ParseError::UnknownArticle {
                    line: row.line,
                    value: value.to_string(),
                })?;
            WordKind::Noun { article }
        }
        PartOfSpeech::Verb => {
            let aux_cell = row.cell(PERFECT_VERB_IDX);
            let perfect_aux = if aux_cell.is_empty() {
                None
            } else {
                Some(PerfectAux::from_code(aux_cell).ok_or_else(|| {
                    ParseError::UnknownPerfectAux {
                        line: row.line,
                        value: aux_cell.to_string(),
                    }
                })?)
            };
            WordKind::Verb(VerbForms {
                praeteritum: row.optional(PRAETERITUM_IDX),
                perfect: row.optional(PERFECT_IDX),
                perfect_aux,
                present_third: row.optional(PRESENT_THIRD_IDX),
            })
        }
        PartOfSpeech::Adjective => WordKind::Adjective,
        PartOfSpeech::Adverb => WordKind::Adverb,
        PartOfSpeech::Preposition => WordKind::Preposition,
    };

    Ok(Some(
        VocabWord::new(word, translation, group, kind).with_help(row.cell(HELP_IDX)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
# comment
word\tpos\ttranslation\tgroup\tarticle\tperfect\tpraeteritum\thelp\tperfect_verb\tpresent_third
hund\tn\tсобака\tTiere\tder

gehen\tv\tидти\tAlltag\t\tgegangen\tging\t\tist\tgeht
mit\tprep\tс\tPräpositionen\t\t\t\t+ Dativ
";

    #[test]
    fn parses_all_kinds_of_rows() {
        let vocabulary = parse_table(TABLE).unwrap();
        let words: Vec<&VocabWord> = vocabulary.iter().collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].spelling(), "der Hund");
        assert_eq!(words[0].translation(), "собака");
        assert_eq!(words[1].part_of_speech(), PartOfSpeech::Verb);
        assert_eq!(
            words[1].verb_forms().unwrap().perfect_full().as_deref(),
            Some("ist gegangen")
        );
        assert_eq!(words[2].help(), "+ Dativ");
    }

    #[test]
    fn missing_optional_columns_are_empty() {
        let vocabulary = parse_rows(["machen\tv\tделать\tAlltag"]).unwrap();
        let forms = vocabulary.iter().next().unwrap().verb_forms().unwrap().clone();
        assert_eq!(forms, VerbForms::default());
    }

    #[test]
    fn skips_unknown_part_of_speech() {
        let vocabulary = parse_rows(["und\tconj\tи\tGrammatik", "heute\tadv\tсегодня\tZeit"]).unwrap();
        assert_eq!(vocabulary.len(), 1);
    }

    #[test]
    fn header_only_skipped_before_data() {
        let vocabulary = parse_rows(["heute\tadv\tсегодня\tZeit", "word\tadv\tслово\tZeit"]).unwrap();
        assert_eq!(vocabulary.len(), 2);
    }

    #[test]
    fn missing_translation_reports_line() {
        let err = parse_rows(["# header", "hund\tn\t\tTiere\tder"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingColumn {
                line: 2,
                column: "translation"
            }
        );
        assert_eq!(err.to_string(), "line 2: missing translation");
    }

    #[test]
    fn noun_requires_known_article() {
        let err = parse_rows(["hund\tn\tсобака\tTiere\tden"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownArticle { line: 1, .. }));

        let err = parse_rows(["hund\tn\tсобака\tTiere"]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingColumn {
                column: "article",
                ..
            }
        ));
    }

    #[test]
    fn verb_rejects_unknown_aux() {
        let err = parse_rows(["gehen\tv\tидти\tAlltag\t\tgegangen\tging\t\twird\tgeht"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownPerfectAux {
                line: 1,
                value: "wird".to_string()
            }
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/words.tsv").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.tsv"));
    }
}
