//! Error types for the uploader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration document is missing, unreadable or malformed.
    #[error("configuration unavailable ({document}): {cause}")]
    ConfigUnavailable { document: String, cause: String },

    /// The server could not be reached or refused the credentials.
    #[error("failed to connect to server {host}: {cause}")]
    Connection { host: String, cause: String },

    /// Error reported by the remote transport.
    #[error("remote error: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(document: impl Into<String>, cause: impl ToString) -> Self {
        Error::ConfigUnavailable {
            document: document.into(),
            cause: cause.to_string(),
        }
    }
}

impl From<suppaftp::FtpError> for Error {
    fn from(e: suppaftp::FtpError) -> Self {
        Error::Remote(e.to_string())
    }
}

impl From<ssh2::Error> for Error {
    fn from(e: ssh2::Error) -> Self {
        Error::Remote(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
