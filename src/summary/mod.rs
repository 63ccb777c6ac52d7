//! Workflow Summary Module
//!
//! Builds the Markdown summary of a directory of workflow files.
//!
//! - [`summarizer`]: Listing, ordering, and error policy
//! - [`render`]: Markdown formatting of single workflows

pub mod render;
pub mod summarizer;

pub use render::{render_error, render_workflow};
pub use summarizer::{summarize, ErrorPolicy, FileWarning, Summarizer, Summary};
