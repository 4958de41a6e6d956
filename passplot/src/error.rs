use std::fmt;

/// Failure of a render or ingestion call. Calls that fail emit nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// Input the renderer cannot draw, such as an empty skyplot track.
    InvalidInput(String),
    /// Payload that could not be ingested.
    Payload { code: &'static str, message: String },
}

impl RenderError {
    /// Stable machine-readable code, surfaced to JS as `error.code`.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidInput(_) => "invalid_input",
            RenderError::Payload { code, .. } => code,
        }
    }

    pub(crate) fn payload(code: &'static str, message: impl Into<String>) -> RenderError {
        RenderError::Payload { code, message: message.into() }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RenderError::Payload { code, message } => write!(f, "{}: {}", code, message),
        }
    }
}

impl std::error::Error for RenderError {}

pub type Result<T> = std::result::Result<T, RenderError>;
