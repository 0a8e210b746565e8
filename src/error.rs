use thiserror::Error;

#[derive(Error, Debug)]
pub enum SarfError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),
    #[error("Malformed root (expected 3 letters): {0}")]
    MalformedRoot(String),
}

pub type Result<T> = std::result::Result<T, SarfError>;

// Helper conversions
impl From<std::io::Error> for SarfError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
