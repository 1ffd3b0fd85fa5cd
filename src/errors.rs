use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No words found in {}", .0.display())]
    EmptyWordList(PathBuf),

    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("No words loaded")]
    NoWordsLoaded,

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io { .. } => 1,
            AppError::EmptyWordList(_) => 1,
            AppError::NoImages(_) => 1,
            AppError::NoWordsLoaded => 1,
            AppError::EnvError(_) => 2,
            AppError::Terminal(_) => 3,
        }
    }
}
