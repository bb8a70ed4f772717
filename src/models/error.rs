use std::fmt;
use std::io;
use thiserror::Error;

/// Validation failure attributed to one named configuration field
#[derive(Error, Debug)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[source]
    pub source: Option<io::Error>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            field: field.into(),
            message: message.to_string(),
            source: None,
        }
    }

    /// Field error caused by an underlying I/O failure
    pub fn io(field: impl Into<String>, message: impl fmt::Display, source: io::Error) -> Self {
        Self {
            field: field.into(),
            message: format!("{}: {}", message, source),
            source: Some(source),
        }
    }
}
