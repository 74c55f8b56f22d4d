use thiserror::Error;

/// Errors that can occur while deriving code or a trace from a flowchart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("the flowchart has no start block")]
    MissingStart,
}

/// Errors that can occur while importing or exporting a saved document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to parse document JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document is missing the required '{0}' section")]
    MissingSection(&'static str),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported when calling an external text-generation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("text generation failed: {0}")]
    Service(String),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
