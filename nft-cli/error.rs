use nft_sampler::SamplerError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to serialize TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("{} not found!", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read back {}: {source}", .path.display())]
    ReadBack {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize marker document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

pub type MarkerResult<T> = Result<T, MarkerError>;
