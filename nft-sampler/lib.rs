//! Grid feature samplers for NFT marker generation.
//!
//! None of the samplers here is a real keypoint detector: each walks a
//! regular grid over a luminance map and keeps the points that pass a
//! cheap test. They sit behind [`FeatureSampler`] so a proper detector can
//! be swapped in later.

pub mod builder;
pub mod config;
pub mod configured_sampler;
pub mod directional_grid;
pub mod error;
pub mod gradient_grid;
pub mod grid;
pub mod preprocessing;
pub mod sampler;
pub mod threshold_grid;
pub mod types;

pub use builder::SamplerBuilder;
pub use config::SamplerConfig;
pub use configured_sampler::ConfiguredSampler;
pub use directional_grid::DirectionalGridSampler;
pub use error::{SamplerError, SamplerResult};
pub use gradient_grid::GradientGridSampler;
pub use grid::SamplingGrid;
pub use preprocessing::ImagePreprocessing;
pub use sampler::FeatureSampler;
pub use threshold_grid::ThresholdGridSampler;
pub use types::SamplerKind;
