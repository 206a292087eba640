use crate::error::{ConfigError, ConfigResult};
use nft_sampler::SamplerConfig;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "paint1.jpg";
pub const DEFAULT_OUTPUT_PREFIX: &str = "markers/paint1";
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Everything the marker builder needs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub input: PathBuf,
    /// Artifacts are written to `<output_prefix>.{jpg,fset,fset3,iset}`
    pub output_prefix: PathBuf,
    /// Longest side of the processed image
    pub max_dimension: u32,
    pub jpeg_quality: u8,
    /// Indent the JSON documents
    pub pretty_json: bool,
    /// Contrast factor applied after resizing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f32>,
    /// Optional image with the sampled features drawn on top
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
    pub sampler: SamplerConfig,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_prefix: PathBuf::from(DEFAULT_OUTPUT_PREFIX),
            max_dimension: DEFAULT_MAX_DIMENSION,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            pretty_json: false,
            contrast: None,
            preview: None,
            sampler: SamplerConfig::default(),
        }
    }
}

impl MarkerConfig {
    /// Default settings for the given input and output prefix
    pub fn new(input: impl Into<PathBuf>, output_prefix: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_prefix: output_prefix.into(),
            ..Self::default()
        }
    }

    /// `<output_prefix>.<ext>`, keeping any dots already in the prefix
    pub fn artifact_path(&self, ext: &str) -> PathBuf {
        let mut s: OsString = self.output_prefix.as_os_str().to_owned();
        s.push(".");
        s.push(ext);
        PathBuf::from(s)
    }

    pub fn summary(&self) -> String {
        format!(
            "MarkerConfig: {} -> {}, max_dimension={}, quality={}, contrast={:?}, {}",
            self.input.display(),
            self.output_prefix.display(),
            self.max_dimension,
            self.jpeg_quality,
            self.contrast,
            self.sampler.summary()
        )
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid("max_dimension must be > 0".to_string()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if let Some(c) = self.contrast {
            if !c.is_finite() || c <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "contrast must be finite and > 0, got {}",
                    c
                )));
            }
        }
        if self.output_prefix.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output_prefix must not be empty".to_string()));
        }
        self.sampler.validate()?;
        Ok(())
    }

    /// Load from a `.toml` or `.json` file, picked by extension
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::load_toml(path),
            Some("json") => Self::load_json(path),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Save configuration to JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        write_config(path.as_ref(), &self.to_json()?)
    }

    /// Load configuration from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::from_json(&read_config(path.as_ref())?)
    }

    /// Save configuration to TOML file
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        write_config(path.as_ref(), &self.to_toml()?)
    }

    /// Load configuration from TOML file
    pub fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        Self::from_toml(&read_config(path.as_ref())?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

fn read_config(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_config(path: &Path, contents: &str) -> ConfigResult<()> {
    std::fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
