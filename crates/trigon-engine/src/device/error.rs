use thiserror::Error;

use super::ShaderStage;

/// Fatal conditions raised while bringing up the window, context and pipeline.
///
/// None of these are retried; the runtime aborts startup on the first one.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to create GL context: {0}")]
    ContextCreationFailed(String),

    #[error("driver refused to create {resource}: {reason}")]
    ResourceAllocationFailed {
        resource: &'static str,
        reason: String,
    },

    #[error("{stage} shader failed to compile:\n{log}")]
    ShaderCompileFailed { stage: ShaderStage, log: String },

    #[error("shader program failed to link:\n{log}")]
    ProgramLinkFailed { log: String },

    #[error("shader program has no active input attribute `{attribute}`")]
    ShaderInterfaceMismatch { attribute: &'static str },
}

impl BootstrapError {
    pub(crate) fn context(err: impl std::fmt::Display) -> Self {
        Self::ContextCreationFailed(err.to_string())
    }
}

/// Presentation (buffer swap) failed mid-loop.
#[derive(Debug, Error)]
#[error("failed to present frame: {0}")]
pub struct PresentError(pub String);
