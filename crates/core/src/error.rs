use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid scan policy: ignore entry {name:?} {reason}")]
    InvalidScanPolicy { name: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CoreError>;
