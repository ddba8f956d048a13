// ---------------------------------------------------------------------------
// ScriptBankError: typed errors for script bank access
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while resolving or reading a script bank.
#[derive(Debug)]
pub enum ScriptBankError {
    /// The bank itself cannot be used: missing pointer file, empty pointer,
    /// unreadable count file.
    Unavailable(String),
    /// The count file exists but does not hold a decimal number.
    InvalidCount(String),
    /// A script below the advertised count is missing or unreadable.
    MissingScript {
        index: usize,
        source: std::io::Error,
    },
}

impl fmt::Display for ScriptBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptBankError::Unavailable(reason) => {
                write!(f, "script bank unavailable: {reason}")
            }
            ScriptBankError::InvalidCount(reason) => {
                write!(f, "script count unreadable: {reason}")
            }
            ScriptBankError::MissingScript { index, source } => {
                write!(f, "script {index} missing: {source}")
            }
        }
    }
}

impl std::error::Error for ScriptBankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptBankError::MissingScript { source, .. } => Some(source),
            _ => None,
        }
    }
}
