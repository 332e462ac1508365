use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unexpected level '{0}'; must be major, minor or patch")]
    InvalidBumpLevel(String),

    #[error("invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CoreError>;
