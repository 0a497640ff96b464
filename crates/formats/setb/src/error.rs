use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    TruncatedInput {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("unterminated string at offset {offset:#x}")]
    UnterminatedString { offset: usize },

    #[error("invalid {field} at offset {offset:#x}: {value}")]
    InvalidCount {
        offset: usize,
        field: &'static str,
        value: i32,
    },

    #[error("sector {sector:?} has unknown type tag {tag:#x}")]
    UnknownSectorType { sector: String, tag: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
