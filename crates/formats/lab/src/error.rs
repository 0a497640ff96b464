use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid magic: expected {expected:?}, found {found:?}")]
    InvalidMagic { expected: [u8; 4], found: [u8; 4] },

    #[error("unexpected end of archive at offset {offset:#x} (need {need} bytes, have {have})")]
    TruncatedInput {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("entry {index} name offset {offset:#x} is outside the string table")]
    InvalidNameOffset { index: usize, offset: usize },

    #[error("could not open file {name}")]
    SourceUnavailable {
        name: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
