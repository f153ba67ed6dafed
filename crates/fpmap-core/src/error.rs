// crates/fpmap-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FpmError>;

#[derive(Debug, Error)]
pub enum FpmError {
    #[error("file '{0}' not found")]
    FileNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a valid file of the expected format")]
    InvalidFormat(String),

    #[error("truncated read from '{0}'")]
    TruncatedRead(String),

    #[error("MLV file does not have all needed info blocks")]
    MissingBlocks,

    #[error("unsupported camera '{0}'")]
    UnsupportedCamera(String),

    #[error("unsupported video mode '{0}'")]
    UnsupportedMode(String),

    #[error("'{0}' map can not be converted: could not acquire sufficient information from header, file name or command line")]
    MapUnresolvable(String),

    #[error("'{0}' is not a valid focus map file extension")]
    InvalidExtension(String),
}

impl FpmError {
    /// Classify an open/read failure for `path`: missing files get their own
    /// variant, a short read becomes `TruncatedRead`, anything else stays io.
    pub fn from_io(path: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => FpmError::FileNotFound(path.to_string()),
            std::io::ErrorKind::UnexpectedEof => FpmError::TruncatedRead(path.to_string()),
            _ => FpmError::Io(e),
        }
    }
}
