mod hex;

pub use hex::HexFileSource;

use thiserror::Error;

/// One raw frame read from an input, tagged with its 1-based source line.
#[derive(Debug, Clone)]
pub struct FrameEvent {
    pub line: u64,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hex dump parse error (line {line}): {message}")]
    Hex { line: u64, message: String },
}

impl From<hex::error::HexSourceError> for SourceError {
    fn from(value: hex::error::HexSourceError) -> Self {
        match value {
            hex::error::HexSourceError::Io(err) => SourceError::Io(err),
            hex::error::HexSourceError::Hex { line, message } => {
                SourceError::Hex { line, message }
            }
        }
    }
}
