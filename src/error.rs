// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// One or more form fields are missing or malformed. Carries every
    /// offending field name, not just the first.
    Validation(Vec<String>),
    Copy(CopyError),
    /// The OS mail handler could not be launched.
    Mail(String),
}

/// Specific error types for clipboard-copy failures.
/// Used to decide which fallback strategy, if any, still applies.
#[derive(Debug, Clone)]
pub enum CopyError {
    /// No clipboard handle could be obtained on this platform.
    Unavailable(String),

    /// A handle existed but the write itself was rejected.
    WriteFailed(String),
}

impl CopyError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CopyError::Unavailable(_) => "error-copy-unavailable",
            CopyError::WriteFailed(_) => "error-copy-write-failed",
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            CopyError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Validation(fields) => {
                write!(f, "Validation Error: missing or malformed: {}", fields.join(", "))
            }
            Error::Copy(e) => write!(f, "Copy Error: {}", e),
            Error::Mail(e) => write!(f, "Mail Error: {}", e),
        }
    }
}

impl From<CopyError> for Error {
    fn from(err: CopyError) -> Self {
        Error::Copy(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
