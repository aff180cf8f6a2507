//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Accounts themselves cannot fail; these come from the surfaces around
/// them (wire decoding, reading input, parsing user-supplied numbers).
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid decimal: {0}")]
    Decimal(String),
}

impl Error {
    /// Create a decimal parse error
    pub fn decimal(msg: impl Into<String>) -> Self {
        Self::Decimal(msg.into())
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(e: rust_decimal::Error) -> Self {
        Self::Decimal(e.to_string())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
