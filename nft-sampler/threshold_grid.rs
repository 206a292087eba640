use nft_core::{Descriptor, Keypoint, LumaImage};
use nft_descriptor::{DescriptorGenerator, ZeroDescriptor};
use crate::error::SamplerResult;
use crate::grid::SamplingGrid;
use crate::sampler::{validate_divisions, validate_image, validate_threshold, FeatureSampler};

/// Keeps every grid point brighter than a luminance threshold.
///
/// Keypoints have unit scale, zero orientation and all-zero descriptors.
#[derive(Debug, Clone)]
pub struct ThresholdGridSampler {
    divisions: usize,
    threshold: f32,
}

impl ThresholdGridSampler {
    pub fn new(divisions: usize, threshold: f32) -> SamplerResult<Self> {
        validate_divisions(divisions)?;
        validate_threshold(threshold)?;
        Ok(Self { divisions, threshold })
    }

    pub fn divisions(&self) -> usize {
        self.divisions
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for ThresholdGridSampler {
    fn default() -> Self {
        Self {
            divisions: 10,
            threshold: 128.0,
        }
    }
}

impl FeatureSampler for ThresholdGridSampler {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn detect(&self, img: &LumaImage) -> SamplerResult<Vec<Keypoint>> {
        validate_image(img)?;
        let grid = SamplingGrid::new(img.width, img.height, self.divisions)?;
        log::debug!(
            "threshold grid: {}x{}, step=({}, {}), {} points",
            img.width,
            img.height,
            grid.step_x,
            grid.step_y,
            grid.len()
        );

        Ok(grid
            .points()
            .filter(|&(x, y)| img.get(x, y) > self.threshold)
            .map(|(x, y)| Keypoint::at(x, y))
            .collect())
    }

    fn describe(&self, img: &LumaImage, kps: &[Keypoint]) -> Vec<Descriptor> {
        ZeroDescriptor.generate_descriptors(img, kps)
    }
}
