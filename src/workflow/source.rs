//! Workflow Sources
//!
//! Where workflow files come from. The summarizer only needs to list
//! names and read text, so both go through [`WorkflowSource`]; the
//! filesystem is one implementation, an in-memory set is another.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::SummaryError;

/// File name suffixes recognized as workflow documents.
pub const WORKFLOW_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

/// Returns true if `name` ends in a recognized workflow extension.
pub fn is_workflow_file(name: &str) -> bool {
    WORKFLOW_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Lists and reads workflow documents.
pub trait WorkflowSource {
    /// Names of the candidate entries, in no particular order.
    fn list(&self) -> Result<Vec<String>, SummaryError>;

    /// Reads the full text of the entry called `name`.
    fn read(&self, name: &str) -> Result<String, SummaryError>;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;
}

/// Workflow files in a filesystem directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source over the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory being read.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkflowSource for DirectorySource {
    /// Lists regular files only. Entries whose names are not valid UTF-8
    /// are skipped.
    fn list(&self) -> Result<Vec<String>, SummaryError> {
        let read_dir_error = |source| SummaryError::ReadDir {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;

            // Follow symlinks so linked workflow files are included
            let is_file = fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("Skipping file with non-UTF-8 name: {:?}", raw),
            }
        }

        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, SummaryError> {
        fs::read_to_string(self.root.join(name)).map_err(|source| SummaryError::ReadFile {
            file: name.to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}

/// Workflow documents held in memory, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<(String, String)>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any previous one with the same name.
    pub fn with_file(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let text = text.into();
        match self.files.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = text,
            None => self.files.push((name, text)),
        }
        self
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no documents are held.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl WorkflowSource for MemorySource {
    fn list(&self) -> Result<Vec<String>, SummaryError> {
        Ok(self.files.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, name: &str) -> Result<String, SummaryError> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| SummaryError::ReadFile {
                file: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such workflow document"),
            })
    }

    fn describe(&self) -> String {
        format!("<memory: {} documents>", self.files.len())
    }
}
