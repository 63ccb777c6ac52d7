//! Error types for workflow summarization.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing, reading, or parsing workflow files.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The workflow directory itself could not be listed.
    #[error("Failed to list workflow directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A workflow file could not be read.
    #[error("Failed to read workflow file '{file}': {source}")]
    ReadFile {
        file: String,
        #[source]
        source: io::Error,
    },

    /// A workflow file is not a valid workflow document.
    #[error("Failed to parse workflow file '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SummaryError {
    /// Name of the workflow file involved, if the error concerns one file.
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::ReadDir { .. } => None,
            Self::ReadFile { file, .. } | Self::Parse { file, .. } => Some(file),
        }
    }

    /// Message of the underlying cause, without the file context.
    pub fn detail(&self) -> String {
        match self {
            Self::ReadDir { source, .. } | Self::ReadFile { source, .. } => source.to_string(),
            Self::Parse { source, .. } => source.to_string(),
        }
    }
}
