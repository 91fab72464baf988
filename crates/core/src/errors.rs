use std::path::PathBuf;

use thiserror::Error;

/// Raised when text classified as JSON does not parse.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid JSON input: {message}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self {
        Self { line: value.line(), column: value.column(), message: value.to_string() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("could not read input file `{path}`: {reason}")]
    ReadFile { path: PathBuf, reason: String },
    #[error("input is not valid UTF-8 text")]
    NotUtf8,
    #[error("input is empty")]
    Empty,
    #[error("input is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("`{name}` looks like a PDF document; PDF text extraction is not supported")]
    UnsupportedDocument { name: String },
    #[error("unknown sample `{0}`")]
    UnknownSample(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("schema failure: {0}")]
    Schema(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_error",
            Self::Input(InputError::UnsupportedDocument { .. }) => "unsupported_document",
            Self::Input(_) => "input_error",
            Self::Schema(_) => "schema_error",
            Self::Configuration(_) => "config_validation",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("unsupported input: {message}")]
    Unsupported { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The input could not be processed. Check its format and try again."
            }
            Self::Unsupported { .. } => "This kind of input is not supported yet.",
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::Unsupported { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::Unsupported { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        let message = value.to_string();
        match value {
            ApplicationError::Input(InputError::UnsupportedDocument { .. }) => {
                Self::Unsupported { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Parse(_) | ApplicationError::Input(_) | ApplicationError::Schema(_) => {
                Self::BadRequest { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Configuration(_) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}
