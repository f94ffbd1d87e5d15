//! Runtime configuration
//!
//! Built from command-line arguments in `main` and handed to the library as plain data.

use crate::controller::InputCommit;
use crate::game::{ExerciseKind, GameConfig};
use crate::wordlists::{EmbeddedSource, FileSource, WordSource};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use thiserror::Error;

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown exercise kind '{0}' (expected one of: all, {list})", list = kind_names())]
    UnknownExerciseKind(String),
    #[error("no exercise kinds selected")]
    NoExerciseKinds,
    #[error("unknown input commit action '{0}' (expected 'submit' or 'start')")]
    UnknownCommit(String),
}

fn kind_names() -> String {
    ExerciseKind::iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Where vocabulary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsLocation {
    Embedded,
    File(PathBuf),
}

impl WordsLocation {
    /// `embedded` selects the built-in table; anything else is a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    #[must_use]
    pub fn source(&self) -> Arc<dyn WordSource> {
        match self {
            Self::Embedded => Arc::new(EmbeddedSource),
            Self::File(path) => Arc::new(FileSource::new(path)),
        }
    }
}

/// Where diagnostics are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop all output; used while the TUI owns the terminal
    Discard,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            target: LogTarget::Stderr,
        }
    }
}

/// Complete quiz configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub words: WordsLocation,
    pub game: GameConfig,
    pub commit: InputCommit,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: WordsLocation::Embedded,
            game: GameConfig::default(),
            commit: InputCommit::default(),
            log: LogConfig::default(),
        }
    }
}

/// Parse a comma-separated list of exercise kinds; `all` selects every kind
///
/// # Errors
///
/// Returns `ConfigError` for unknown names or an empty list.
///
/// # Examples
/// ```
/// use vocab_quiz::config::parse_exercise_kinds;
/// use vocab_quiz::game::ExerciseKind;
///
/// let kinds = parse_exercise_kinds("select-de, verb-form").unwrap();
/// assert_eq!(kinds, vec![ExerciseKind::SelectDe, ExerciseKind::VerbForm]);
/// ```
pub fn parse_exercise_kinds(list: &str) -> Result<Vec<ExerciseKind>, ConfigError> {
    let mut kinds = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if name == "all" {
            return Ok(ExerciseKind::iter().collect());
        }
        let kind = ExerciseKind::from_str(name)
            .map_err(|_| ConfigError::UnknownExerciseKind(name.to_string()))?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.is_empty() {
        return Err(ConfigError::NoExerciseKinds);
    }
    Ok(kinds)
}

/// Parse the input commit action (`submit` or `start`)
///
/// # Errors
///
/// Returns `ConfigError::UnknownCommit` for anything else.
pub fn parse_commit(value: &str) -> Result<InputCommit, ConfigError> {
    InputCommit::from_str(value.trim()).map_err(|_| ConfigError::UnknownCommit(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selects_every_kind() {
        assert_eq!(parse_exercise_kinds("all").unwrap().len(), 5);
        assert_eq!(parse_exercise_kinds("select-de,all").unwrap().len(), 5);
    }

    #[test]
    fn duplicate_kinds_collapse() {
        let kinds = parse_exercise_kinds("verb-form,verb-form").unwrap();
        assert_eq!(kinds, vec![ExerciseKind::VerbForm]);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = parse_exercise_kinds("select-de,spelling").unwrap_err();
        assert_eq!(err, ConfigError::UnknownExerciseKind("spelling".into()));
        assert!(err.to_string().contains("guess-noun-article"));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(parse_exercise_kinds(" , "), Err(ConfigError::NoExerciseKinds));
    }

    #[test]
    fn commit_values() {
        assert_eq!(parse_commit("submit"), Ok(InputCommit::Submit));
        assert_eq!(parse_commit(" start "), Ok(InputCommit::Start));
        assert!(parse_commit("next").is_err());
    }

    #[test]
    fn words_location_from_arg() {
        assert_eq!(WordsLocation::from_arg("embedded"), WordsLocation::Embedded);
        assert_eq!(
            WordsLocation::from_arg("lists/a1.tsv"),
            WordsLocation::File(PathBuf::from("lists/a1.tsv"))
        );
        assert_eq!(WordsLocation::from_arg("lists/a1.tsv").source().describe(), "lists/a1.tsv");
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.words, WordsLocation::Embedded);
        assert_eq!(config.commit, InputCommit::Submit);
        assert_eq!(config.log.level, "info");
    }
}
