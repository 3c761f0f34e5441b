use std::path::PathBuf;
use thiserror::Error;

/// Main error type for changesize
#[derive(Error, Debug)]
pub enum ChangeSizeError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Usage { message: String },
}

impl ChangeSizeError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

/// Result type alias using ChangeSizeError
pub type ChangeSizeResult<T> = Result<T, ChangeSizeError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> ChangeSizeError {
    let path = path.into();
    move |err| ChangeSizeError::io_error(err, Some(path))
}
