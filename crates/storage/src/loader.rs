//! Async deck discovery and loading with fallback to the bundled sample set.

use std::path::{Path, PathBuf};

use quiz_core::model::Subject;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::deck_file::{DeckFile, DeckFileError};
use crate::sample;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckLoadError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: DeckFileError,
    },

    #[error("invalid deck {}: {}", .path.display(), .source)]
    Invalid {
        path: PathBuf,
        #[source]
        source: DeckFileError,
    },

    #[error("no deck could be loaded from {}", .0.display())]
    NoDecks(PathBuf),

    #[error("bundled sample decks are invalid: {0}")]
    Sample(#[source] DeckFileError),
}

/// Where the loaded subjects came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOrigin {
    Files,
    Sample,
}

#[derive(Debug, Clone)]
pub struct LoadedDecks {
    pub subjects: Vec<Subject>,
    pub origin: DeckOrigin,
}

/// Reads deck files from a directory.
///
/// With no explicit file list every `*.json` in the directory is loaded, in
/// file-name order.
#[derive(Debug, Clone)]
pub struct DeckLoader {
    dir: PathBuf,
    files: Option<Vec<String>>,
}

impl DeckLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: None,
        }
    }

    /// Restrict loading to the named files inside the directory, in the given order.
    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deck paths that will be attempted.
    ///
    /// # Errors
    ///
    /// Returns `DeckLoadError::Io` if the directory cannot be listed.
    pub async fn discover(&self) -> Result<Vec<PathBuf>, DeckLoadError> {
        if let Some(files) = &self.files {
            return Ok(files.iter().map(|f| self.dir.join(f)).collect());
        }

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|source| DeckLoadError::Io {
                path: self.dir.clone(),
                source,
            })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| DeckLoadError::Io {
                path: self.dir.clone(),
                source,
            })?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Load a single deck file. The subject id is the file stem.
    ///
    /// # Errors
    ///
    /// Returns `DeckLoadError` when the file cannot be read, is not valid
    /// deck JSON, or holds an invalid question.
    pub async fn load_file(path: &Path) -> Result<Subject, DeckLoadError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DeckLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let deck = DeckFile::parse(&raw).map_err(|source| DeckLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        deck.into_subject(&stem)
            .map_err(|source| DeckLoadError::Invalid {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load every discovered deck, skipping the ones that fail.
    ///
    /// # Errors
    ///
    /// Returns `DeckLoadError::NoDecks` when nothing loaded, or `Io` if the
    /// directory cannot be listed.
    pub async fn load(&self) -> Result<Vec<Subject>, DeckLoadError> {
        let paths = self.discover().await?;
        let mut subjects = Vec::with_capacity(paths.len());

        for path in paths {
            match Self::load_file(&path).await {
                Ok(subject) => {
                    debug!(
                        path = %path.display(),
                        subject = subject.name(),
                        questions = subject.question_count(),
                        "deck loaded"
                    );
                    subjects.push(subject);
                }
                Err(err) => warn!(error = %err, "skipping deck"),
            }
        }

        if subjects.is_empty() {
            return Err(DeckLoadError::NoDecks(self.dir.clone()));
        }
        Ok(subjects)
    }

    /// Load decks from disk, or the bundled sample set when none load.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled sample set itself is invalid.
    pub async fn load_or_sample(&self) -> Result<LoadedDecks, DeckLoadError> {
        match self.load().await {
            Ok(subjects) => {
                info!(count = subjects.len(), dir = %self.dir.display(), "decks loaded from files");
                Ok(LoadedDecks {
                    subjects,
                    origin: DeckOrigin::Files,
                })
            }
            Err(err) => {
                warn!(error = %err, "falling back to sample decks");
                let subjects = sample::sample_subjects().map_err(DeckLoadError::Sample)?;
                Ok(LoadedDecks {
                    subjects,
                    origin: DeckOrigin::Sample,
                })
            }
        }
    }
}
