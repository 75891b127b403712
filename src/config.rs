//! Configuration file support.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::question::{QuestionSet, QuestionSetError};
use crate::repository::QuestionRepository;
use crate::store::{FileStore, DEFAULT_STORE_KEY};

/// File read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "quizkit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level quizkit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Directory of the file-backed store.
    pub store_dir: PathBuf,
    /// Store key holding user-added questions.
    pub store_key: String,
    /// Question document replacing the bundled set.
    pub questions: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".quizkit"),
            store_key: DEFAULT_STORE_KEY.to_string(),
            questions: None,
        }
    }
}

impl QuizConfig {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path`, or `quizkit.toml` in the working directory when `path`
    /// is `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw, &path)
    }

    /// The configured bundled set, compiled-in unless overridden.
    pub fn question_set(&self) -> Result<QuestionSet, QuestionSetError> {
        match &self.questions {
            Some(path) => QuestionSet::from_path(path),
            None => QuestionSet::bundled(),
        }
    }

    /// Repository over the file store this configuration describes.
    pub fn repository(&self) -> Result<QuestionRepository<FileStore>, QuestionSetError> {
        let defaults = self.question_set()?;
        Ok(
            QuestionRepository::new(FileStore::new(&self.store_dir), defaults)
                .with_key(self.store_key.clone()),
        )
    }
}
