use thiserror::Error;

#[derive(Error, Debug)]
pub enum XrfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Projection index {index} out of range (total: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Element index {index} out of range (total: {total})")]
    ElementOutOfRange { index: usize, total: usize },

    #[error("{what} has length {got}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("No dataset loaded")]
    EmptyDataset,

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("No background captured")]
    NoBackground,

    #[error("Invalid alignment file: {0}")]
    InvalidAlignmentFile(String),

    #[error("npy read error: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    #[error("npy write error: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),
}

pub type Result<T> = std::result::Result<T, XrfError>;
