//! Build NFT marker files (`.jpg`, `.fset`, `.fset3`, `.iset`) from a single image.

pub mod config;
pub mod documents;
pub mod error;
pub mod marker;
pub mod preview;

pub use config::{MarkerConfig, DEFAULT_INPUT, DEFAULT_OUTPUT_PREFIX};
pub use documents::{FeatureSet3dDocument, FeatureSetDocument, ImageEntry, ImageSetDocument};
pub use error::{ConfigError, MarkerError, MarkerResult};
pub use marker::{create_marker, MarkerBuilder, MarkerBundle};

pub use nft_core::{self, FeaturePoint, Keypoint, LumaImage};
pub use nft_sampler::{self, SamplerConfig, SamplerKind};
