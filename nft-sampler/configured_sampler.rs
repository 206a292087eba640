use nft_core::{FeaturePoint, Keypoint, LumaImage};
use crate::config::SamplerConfig;
use crate::error::SamplerResult;
use crate::sampler::FeatureSampler;

/// A feature sampler built from a `SamplerBuilder`.
///
/// Holds the concrete sampler behind the `FeatureSampler` trait together
/// with the configuration it was built from.
pub struct ConfiguredSampler {
    pub(crate) sampler: Box<dyn FeatureSampler>,
    pub(crate) config: SamplerConfig,
}

impl ConfiguredSampler {
    /// Sample features in row-major grid order
    pub fn sample(&self, img: &LumaImage) -> SamplerResult<Vec<FeaturePoint>> {
        self.sampler.sample(img)
    }

    /// Detect keypoints without attaching descriptors
    pub fn detect(&self, img: &LumaImage) -> SamplerResult<Vec<Keypoint>> {
        self.sampler.detect(img)
    }

    pub fn name(&self) -> &'static str {
        self.sampler.name()
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn config_summary(&self) -> String {
        self.config.summary()
    }
}

impl std::fmt::Debug for ConfiguredSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredSampler")
            .field("sampler", &self.sampler.name())
            .field("config", &self.config)
            .finish()
    }
}
