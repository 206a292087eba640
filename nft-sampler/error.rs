#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    #[error("invalid image dimensions: {width}x{height} (must be > 0)")]
    InvalidImageSize { width: usize, height: usize },
    #[error("image data length mismatch: expected {expected_len}, got {actual_len}")]
    InvalidImageData { expected_len: usize, actual_len: usize },
    #[error("invalid grid divisions: {0} (must be >= 1)")]
    InvalidDivisions(usize),
    #[error("invalid threshold: {0} (must be finite)")]
    InvalidThreshold(f32),
    #[error("invalid contrast factor: {0} (must be finite and > 0)")]
    InvalidContrast(f32),
}

pub type SamplerResult<T> = Result<T, SamplerError>;
