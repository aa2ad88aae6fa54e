// src/error.rs
use bytemuck::PodCastError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Integer overflow at index {index} (value {value})")]
    Overflow { index: usize, value: i32 },

    #[error("Cannot view buffer as 32-bit words: {0:?}")]
    Cast(PodCastError),

    #[error("Length mismatch: {len} bytes is not a multiple of the {width}-byte word width")]
    LengthMismatch { len: usize, width: usize },

    #[error("Array is not contiguous")]
    NotContiguous,
}

impl From<PodCastError> for TransformError {
    fn from(err: PodCastError) -> Self {
        TransformError::Cast(err)
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
