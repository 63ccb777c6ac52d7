//! Workflow Definition Module
//!
//! Data structures and loading for workflow documents.
//!
//! # Structure
//!
//! - [`model`]: Typed schema (WorkflowFile, Job, Step)
//! - [`parser`]: YAML parsing and single-file loading
//! - [`source`]: Listing and reading workflow documents

pub mod model;
pub mod parser;
pub mod source;

pub use model::{Job, Step, WorkflowFile, UNNAMED_STEP, UNNAMED_WORKFLOW};
pub use parser::{load_workflow, parse_workflow};
pub use source::{is_workflow_file, DirectorySource, MemorySource, WorkflowSource};
