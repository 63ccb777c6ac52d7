//! Workflow Summarizer
//!
//! Lists workflow documents from a [`WorkflowSource`], parses each one in
//! name order, and concatenates their Markdown blocks.
//!
//! A file that cannot be read or parsed is handled according to the
//! [`ErrorPolicy`]: fail-soft replaces its block with an error line and
//! records a [`FileWarning`]; fail-hard returns the error.

use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use super::render::{render_error, render_workflow};
use crate::error::SummaryError;
use crate::workflow::{
    is_workflow_file, parse_workflow, DirectorySource, WorkflowFile, WorkflowSource,
};

/// How per-file failures are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report the failure inline and keep going
    #[default]
    FailSoft,
    /// Abort on the first failure
    FailHard,
}

/// A file that was left out of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileWarning {
    /// File name as listed
    pub file: String,
    /// Underlying read or parse message
    pub message: String,
}

/// Result of one summarization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Markdown text, one block per workflow file
    pub text: String,
    /// Files that failed under the fail-soft policy
    pub warnings: Vec<FileWarning>,
    /// Number of files rendered successfully
    pub files_summarized: usize,
}

impl Summary {
    /// Returns true if every workflow file was summarized.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Produces Markdown summaries of workflow files.
///
/// # Example
///
/// ```
/// use workflow_digest::summary::Summarizer;
/// use workflow_digest::workflow::MemorySource;
///
/// let source = MemorySource::new().with_file("ci.yml", "name: CI\n");
/// let summary = Summarizer::new().summarize_source(&source).unwrap();
/// assert!(summary.text.starts_with("### 🛠️ ci.yml\n- **Name**: CI\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    policy: ErrorPolicy,
}

impl Summarizer {
    /// Creates a summarizer with the fail-soft policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a summarizer with the given policy.
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self { policy }
    }

    /// Sets the error policy.
    pub fn set_policy(&mut self, policy: ErrorPolicy) {
        self.policy = policy;
    }

    /// Current error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Summarizes the workflow files in a directory.
    pub fn summarize(&self, dir: impl AsRef<Path>) -> Result<Summary, SummaryError> {
        self.summarize_source(&DirectorySource::new(dir.as_ref()))
    }

    /// Summarizes the workflow documents of any source.
    ///
    /// Documents are visited in lexicographic name order so the output does
    /// not depend on listing order.
    pub fn summarize_source<S>(&self, source: &S) -> Result<Summary, SummaryError>
    where
        S: WorkflowSource + ?Sized,
    {
        let mut names: Vec<String> = source
            .list()?
            .into_iter()
            .filter(|name| is_workflow_file(name))
            .collect();
        names.sort();

        info!(
            "Summarizing {} workflow files from {}",
            names.len(),
            source.describe()
        );

        let mut summary = Summary::default();

        for name in &names {
            match load_one(source, name) {
                Ok(workflow) => {
                    summary.text.push_str(&render_workflow(&workflow));
                    summary.files_summarized += 1;
                }
                Err(e) if self.policy == ErrorPolicy::FailSoft => {
                    warn!("{}", e);
                    let message = e.detail();
                    summary.text.push_str(&render_error(name, &message));
                    summary.warnings.push(FileWarning {
                        file: name.clone(),
                        message,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Summarized {} of {} workflow files",
            summary.files_summarized,
            names.len()
        );

        Ok(summary)
    }
}

/// Summarizes a directory with the default fail-soft policy.
pub fn summarize(dir: impl AsRef<Path>) -> Result<Summary, SummaryError> {
    Summarizer::new().summarize(dir)
}

fn load_one<S>(source: &S, name: &str) -> Result<WorkflowFile, SummaryError>
where
    S: WorkflowSource + ?Sized,
{
    let text = source.read(name)?;
    debug!("Read '{}' ({} bytes)", name, text.len());

    parse_workflow(name, &text).map_err(|source| SummaryError::Parse {
        file: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::MemorySource;

    const CI: &str = r#"
name: CI
jobs:
  build:
    steps:
      - name: Checkout
      - run: make
"#;

    #[test]
    fn test_empty_source_gives_empty_text() {
        let summary = Summarizer::new().summarize_source(&MemorySource::new()).unwrap();
        assert_eq!(summary.text, "");
        assert!(summary.is_clean());
        assert_eq!(summary.files_summarized, 0);
    }

    #[test]
    fn test_non_workflow_files_ignored() {
        let source = MemorySource::new()
            .with_file("README.md", "# not yaml: [")
            .with_file("ci.yml", CI);

        let summary = Summarizer::new().summarize_source(&source).unwrap();
        assert!(!summary.text.contains("README"));
        assert_eq!(summary.files_summarized, 1);
    }

    #[test]
    fn test_sorted_regardless_of_listing_order() {
        let source = MemorySource::new()
            .with_file("b.yaml", "name: B\n")
            .with_file("a.yml", "name: A\n");

        let summary = Summarizer::new().summarize_source(&source).unwrap();
        let a = summary.text.find("### 🛠️ a.yml").unwrap();
        let b = summary.text.find("### 🛠️ b.yaml").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_fail_soft_continues_after_bad_file() {
        let source = MemorySource::new()
            .with_file("a.yml", "jobs: [[[")
            .with_file("b.yml", CI);

        let summary = Summarizer::new().summarize_source(&source).unwrap();

        assert!(summary.text.starts_with("- ❌ Error parsing a.yml: "));
        assert!(summary.text.contains("### 🛠️ b.yml\n"));
        assert_eq!(summary.files_summarized, 1);
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].file, "a.yml");
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_fail_hard_aborts() {
        let source = MemorySource::new()
            .with_file("a.yml", "jobs: [[[")
            .with_file("b.yml", CI);

        let result = Summarizer::with_policy(ErrorPolicy::FailHard).summarize_source(&source);
        match result {
            Err(SummaryError::Parse { file, .. }) => assert_eq!(file, "a.yml"),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_hard_succeeds_on_clean_input() {
        let source = MemorySource::new().with_file("ci.yml", CI);
        let summary = Summarizer::with_policy(ErrorPolicy::FailHard)
            .summarize_source(&source)
            .unwrap();
        assert!(summary.is_clean());
        assert_eq!(summary.files_summarized, 1);
    }

    #[test]
    fn test_set_policy() {
        let mut summarizer = Summarizer::new();
        assert_eq!(summarizer.policy(), ErrorPolicy::FailSoft);
        summarizer.set_policy(ErrorPolicy::FailHard);
        assert_eq!(summarizer.policy(), ErrorPolicy::FailHard);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = Summary {
            text: "x".to_string(),
            warnings: vec![FileWarning {
                file: "bad.yml".to_string(),
                message: "oops".to_string(),
            }],
            files_summarized: 0,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["warnings"][0]["file"], "bad.yml");
        assert_eq!(json["files_summarized"], 0);
    }
}
