//! Workflow Parser
//!
//! Turns workflow YAML text into a [`WorkflowFile`]. Schema rules
//! (optional fields, job order, null handling) live in the model; this
//! module handles whole-document cases and file loading.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de;
use serde_yaml::Value;

use super::model::WorkflowFile;
use crate::error::SummaryError;

/// Parses one workflow document.
///
/// An empty document, or one that is only `null`, is a workflow with no
/// name and no jobs. Any other non-mapping document is an error.
///
/// # Example
///
/// ```
/// use workflow_digest::workflow::parse_workflow;
///
/// let workflow = parse_workflow("ci.yml", "name: CI\njobs:\n  test: {}\n").unwrap();
/// assert_eq!(workflow.display_name(), "CI");
/// assert_eq!(workflow.job_ids(), vec!["test"]);
/// ```
pub fn parse_workflow(file_name: &str, text: &str) -> Result<WorkflowFile, serde_yaml::Error> {
    let mut workflow = if text.trim().is_empty() {
        WorkflowFile::default()
    } else {
        let value: Value = serde_yaml::from_str(text)?;
        match value {
            Value::Null => WorkflowFile::default(),
            Value::Mapping(_) => serde_yaml::from_value(value)?,
            _ => {
                return Err(de::Error::custom(
                    "Expected a mapping at the top level of the workflow document",
                ))
            }
        }
    };

    workflow.file_name = file_name.to_string();

    debug!(
        "Parsed '{}': {} jobs, {} steps",
        file_name,
        workflow.jobs.len(),
        workflow.steps().count()
    );

    Ok(workflow)
}

/// Reads and parses a single workflow file.
///
/// The file name recorded on the result is the last path component.
pub fn load_workflow(path: impl AsRef<Path>) -> Result<WorkflowFile, SummaryError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let text = fs::read_to_string(path).map_err(|source| SummaryError::ReadFile {
        file: file_name.clone(),
        source,
    })?;

    debug!("Loaded '{}' ({} bytes)", path.display(), text.len());

    parse_workflow(&file_name, &text).map_err(|source| SummaryError::Parse {
        file: file_name,
        source,
    })
}
