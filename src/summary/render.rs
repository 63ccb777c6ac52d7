//! Markdown rendering of workflow summaries.

use crate::workflow::WorkflowFile;

/// Renders one workflow's block, including the trailing blank line.
///
/// ```text
/// ### 🛠️ ci.yml
/// - **Name**: CI
/// - **Jobs**: build, test
/// - **Steps**:
///   - Checkout
///   - Unnamed Step
///
/// ```
pub fn render_workflow(workflow: &WorkflowFile) -> String {
    let mut out = String::new();

    out.push_str(&format!("### 🛠️ {}\n", workflow.file_name));
    out.push_str(&format!("- **Name**: {}\n", workflow.display_name()));
    out.push_str(&format!("- **Jobs**: {}\n", workflow.job_ids().join(", ")));
    out.push_str("- **Steps**:\n");
    for step in workflow.steps() {
        out.push_str(&format!("  - {}\n", step.display_name()));
    }
    out.push('\n');

    out
}

/// Renders the line that stands in for a file that failed to load.
pub fn render_error(file: &str, message: &str) -> String {
    format!("- ❌ Error parsing {}: {}\n\n", file, message)
}
