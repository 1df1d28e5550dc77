use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid label number: {0}")]
    InvalidLabelNumber(String),

    #[error("Unknown control type: {0}")]
    UnknownControlType(String),

    #[error("Settings could not be saved: {0}")]
    SettingsPersistence(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
