// Error types for sysprobe

use thiserror::Error;

/// Result type alias using anyhow::Error
pub type Result<T> = anyhow::Result<T>;

/// Sysprobe-specific error types
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("empty listing command")]
    EmptyCommand,

    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' exited with {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: String,
        stderr: String,
    },

    #[error("malformed unit record: '{0}'")]
    MalformedRecord(String),

    #[error("this check must run as root")]
    NotRoot,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
