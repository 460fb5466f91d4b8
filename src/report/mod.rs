pub mod formatter;
pub mod artifact;
pub mod pipeline;

pub use formatter::{format_commit_report, render_artifact, report_heading};
pub use artifact::{artifact_path, write_artifact};
pub use pipeline::ReportPipeline;
