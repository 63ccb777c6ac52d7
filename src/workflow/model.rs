//! Workflow Data Model
//!
//! Typed view of a GitHub Actions workflow document, reduced to the parts
//! a summary needs. Absent fields stay `None`/empty here; placeholders are
//! applied by the `display_name` accessors.
//!
//! # Example YAML Format
//!
//! ```yaml
//! name: CI
//! on: [push]
//! jobs:
//!   build:
//!     runs-on: ubuntu-latest
//!     steps:
//!       - uses: actions/checkout@v4
//!       - name: Run tests
//!         run: cargo test
//! ```

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;

/// Placeholder shown for a workflow without a top-level `name`.
pub const UNNAMED_WORKFLOW: &str = "Unnamed";

/// Placeholder shown for a step without a `name`.
pub const UNNAMED_STEP: &str = "Unnamed Step";

/// A single step inside a job.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// Display name as written in the document
    #[serde(default, deserialize_with = "optional_scalar")]
    pub name: Option<String>,
}

impl Step {
    /// Creates a step with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Creates a step without a display name.
    pub fn unnamed() -> Self {
        Self { name: None }
    }

    /// Returns the step name, or [`UNNAMED_STEP`] when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_STEP)
    }
}

/// A job and its steps in execution order.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Job {
    /// Key of this job under `jobs` (filled in from the mapping key)
    #[serde(skip)]
    pub id: String,

    /// Steps in the order they run
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<Step>,
}

impl Job {
    /// Creates a job with no steps.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
}

/// One parsed workflow file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowFile {
    /// File name the document was read from (not part of the document)
    #[serde(skip)]
    pub file_name: String,

    /// Top-level `name`
    #[serde(default, deserialize_with = "optional_scalar")]
    pub name: Option<String>,

    /// Jobs in document order
    #[serde(default, deserialize_with = "ordered_jobs")]
    pub jobs: Vec<Job>,
}

impl WorkflowFile {
    /// Creates an empty workflow for the given file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            name: None,
            jobs: Vec::new(),
        }
    }

    /// Sets the declared workflow name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Returns the workflow name, or [`UNNAMED_WORKFLOW`] when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_WORKFLOW)
    }

    /// Job ids in document order.
    pub fn job_ids(&self) -> Vec<&str> {
        self.jobs.iter().map(|j| j.id.as_str()).collect()
    }

    /// Every step of every job, jobs in document order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.jobs.iter().flat_map(|j| j.steps.iter())
    }
}

/// Renders a YAML scalar as text. Mapping keys and names may be
/// numbers or booleans in hand-written workflows. Numbers are printed
/// from their parsed value, so `1e3` becomes `1000.0`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserializes an optional scalar into `Option<String>`; null is `None`.
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let val = Value::deserialize(deserializer)?;
    if val.is_null() {
        return Ok(None);
    }
    scalar_to_string(&val)
        .map(Some)
        .ok_or_else(|| de::Error::custom("Expected a string"))
}

/// Deserializes a sequence, treating an explicit null as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes the `jobs` mapping into a list that keeps document order.
fn ordered_jobs<'de, D>(deserializer: D) -> Result<Vec<Job>, D::Error>
where
    D: Deserializer<'de>,
{
    let val = Value::deserialize(deserializer)?;
    let map = match val {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(map) => map,
        _ => return Err(de::Error::custom("Expected a mapping of job ids to jobs")),
    };

    map.into_iter()
        .map(|(key, body)| -> Result<Job, D::Error> {
            let id = scalar_to_string(&key)
                .ok_or_else(|| de::Error::custom("Job id must be a string"))?;

            let mut job: Job = if body.is_null() {
                Job::default()
            } else {
                serde_yaml::from_value(body)
                    .map_err(|e| de::Error::custom(format!("job '{}': {}", id, e)))?
            };
            job.id = id;
            Ok(job)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> WorkflowFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_full_document() {
        let workflow = parse(
            r#"
name: CI
on: [push, pull_request]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Build
        run: cargo build
  lint:
    steps:
      - name: Clippy
"#,
        );

        assert_eq!(workflow.display_name(), "CI");
        assert_eq!(workflow.job_ids(), vec!["build", "lint"]);
        assert_eq!(workflow.jobs[0].steps.len(), 2);
        assert_eq!(workflow.jobs[0].steps[0].name, None);
        assert_eq!(workflow.jobs[0].steps[1].display_name(), "Build");
    }

    #[test]
    fn test_jobs_keep_document_order() {
        let workflow = parse(
            r#"
jobs:
  zeta: {}
  alpha: {}
  mid: {}
"#,
        );
        assert_eq!(workflow.job_ids(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let workflow = parse("on: push\n");
        assert_eq!(workflow.name, None);
        assert_eq!(workflow.display_name(), UNNAMED_WORKFLOW);
        assert!(workflow.jobs.is_empty());
    }

    #[test]
    fn test_null_job_and_null_steps() {
        let workflow = parse(
            r#"
jobs:
  empty:
  nulled:
    steps:
"#,
        );
        assert_eq!(workflow.job_ids(), vec!["empty", "nulled"]);
        assert_eq!(workflow.steps().count(), 0);
    }

    #[test]
    fn test_scalar_names_rendered_as_text() {
        let workflow = parse(
            r#"
name: 2024
jobs:
  1:
    steps:
      - name: true
"#,
        );
        assert_eq!(workflow.display_name(), "2024");
        assert_eq!(workflow.job_ids(), vec!["1"]);
        assert_eq!(workflow.jobs[0].steps[0].display_name(), "true");
    }

    #[test]
    fn test_numeric_names_use_parsed_value() {
        let workflow = parse("name: 1e3\njobs:\n  a:\n    steps:\n      - name: 1e3\n");
        assert_eq!(workflow.display_name(), "1000.0");
        assert_eq!(workflow.jobs[0].steps[0].display_name(), "1000.0");
    }

    #[test]
    fn test_jobs_not_a_mapping_is_error() {
        let result: Result<WorkflowFile, _> = serde_yaml::from_str("jobs: [a, b]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_step_not_a_mapping_is_error() {
        let result: Result<WorkflowFile, _> =
            serde_yaml::from_str("jobs:\n  build:\n    steps:\n      - just a string\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("build"));
    }

    #[test]
    fn test_steps_iterate_across_jobs() {
        let workflow = WorkflowFile::new("ci.yml")
            .with_job(Job::new("a").with_step(Step::named("one")))
            .with_job(
                Job::new("b")
                    .with_step(Step::unnamed())
                    .with_step(Step::named("three")),
            );

        let names: Vec<&str> = workflow.steps().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["one", UNNAMED_STEP, "three"]);
    }

    #[test]
    fn test_builders() {
        let workflow = WorkflowFile::new("release.yaml").with_name("Release");
        assert_eq!(workflow.file_name, "release.yaml");
        assert_eq!(workflow.display_name(), "Release");
    }
}
