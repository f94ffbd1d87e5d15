//! Word sources and the background vocabulary fetch
//!
//! Fetching is the one slow step of a quiz session. Front ends run it on a worker
//! thread through `fetch_in_background` and poll the returned channel from the UI loop.

use super::embedded::WORD_ROWS;
use super::loader::{self, ParseError};
use crate::core::Vocabulary;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::thread;
use thiserror::Error;

/// Failure to obtain a vocabulary
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed word table, {0}")]
    Parse(#[from] ParseError),
    #[error("Word source returned no words")]
    Empty,
    #[error("Word fetch stopped unexpectedly")]
    Interrupted,
}

/// A place vocabulary can be fetched from
pub trait WordSource: Send + Sync {
    /// Short description for logs and status lines
    fn describe(&self) -> String;

    /// Fetch and parse the complete vocabulary
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the words cannot be read or parsed, or if the source
    /// holds no words at all.
    fn fetch(&self) -> Result<Vocabulary, FetchError>;
}

/// The vocabulary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn describe(&self) -> String {
        "built-in word table".to_string()
    }

    fn fetch(&self) -> Result<Vocabulary, FetchError> {
        let vocabulary = loader::parse_rows(WORD_ROWS.iter().copied())?;
        non_empty(vocabulary)
    }
}

/// A tab-separated word table on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vocabulary, FetchError> {
        non_empty(loader::load_from_file(&self.path)?)
    }
}

fn non_empty(vocabulary: Vocabulary) -> Result<Vocabulary, FetchError> {
    if vocabulary.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(vocabulary)
}

/// Run `source.fetch()` on a worker thread
///
/// The receiver yields exactly one result. If the worker panics the sender is dropped
/// and `recv` fails; callers map that to `FetchError::Interrupted`.
#[must_use]
pub fn fetch_in_background(
    source: Arc<dyn WordSource>,
) -> mpsc::Receiver<Result<Vocabulary, FetchError>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        tracing::info!(source = %source.describe(), "fetching vocabulary");
        let result = source.fetch();
        match &result {
            Ok(vocabulary) => tracing::info!(words = vocabulary.len(), "vocabulary fetched"),
            Err(err) => tracing::warn!(error = %err, "vocabulary fetch failed"),
        }
        // The UI may have quit in the meantime
        let _ = tx.send(result);
    });

    rx
}
