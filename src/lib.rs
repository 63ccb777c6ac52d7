//! WorkflowDigest - Workflow Summary Generator
//!
//! Reads GitHub Actions workflow files from a directory and produces a
//! Markdown summary listing each file's name, jobs, and steps. The result
//! is meant to be dropped into a larger project report.
//!
//! # Architecture
//!
//! - [`workflow`]: Typed workflow schema, parsing, and document sources
//! - [`summary`]: Summarizer, error policy, and Markdown rendering
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use workflow_digest::summary::{ErrorPolicy, Summarizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = Summarizer::with_policy(ErrorPolicy::FailSoft)
//!         .summarize(".github/workflows")?;
//!
//!     print!("{}", summary.text);
//!     for warning in &summary.warnings {
//!         eprintln!("skipped {}: {}", warning.file, warning.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod summary;
pub mod workflow;

// Re-export commonly used types
pub use error::SummaryError;
pub use summary::{summarize, ErrorPolicy, Summarizer, Summary};
pub use workflow::{load_workflow, parse_workflow, WorkflowFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "WorkflowDigest";

/// Directory summarized when none is given.
pub const DEFAULT_WORKFLOWS_DIR: &str = ".github/workflows";
