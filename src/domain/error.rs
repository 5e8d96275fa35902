use crate::domain::graph::NodeId;

/// Failures of the pipe graph core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipeError {
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("node {node} is referenced but never declared")]
    MissingNode { node: NodeId },
}

impl PipeError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        PipeError::Format {
            line,
            reason: reason.into(),
        }
    }
}
