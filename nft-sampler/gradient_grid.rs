use nft_core::{Descriptor, Keypoint, LumaImage};
use nft_descriptor::{DescriptorGenerator, RingDescriptor};
use crate::error::SamplerResult;
use crate::grid::SamplingGrid;
use crate::sampler::{validate_divisions, validate_image, validate_threshold, FeatureSampler};

/// Keeps grid points whose forward-difference gradient is strong.
///
/// At each grid point the absolute differences to the right and bottom
/// neighbours give `(gx, gy)`; the point is kept when `|(gx, gy)|` exceeds
/// the threshold. Orientation is `atan2(gy, gx)`, descriptors come from
/// [`RingDescriptor::coarse`].
#[derive(Debug, Clone)]
pub struct GradientGridSampler {
    divisions: usize,
    threshold: f32,
    descriptor: RingDescriptor,
}

impl GradientGridSampler {
    pub fn new(divisions: usize, threshold: f32) -> SamplerResult<Self> {
        validate_divisions(divisions)?;
        validate_threshold(threshold)?;
        Ok(Self {
            divisions,
            threshold,
            descriptor: RingDescriptor::coarse(),
        })
    }

    /// Forward-difference gradient at `(x, y)`, `None` on the last row/column
    fn gradient(img: &LumaImage, x: usize, y: usize) -> Option<(f32, f32)> {
        let center = img.get(x, y);
        let right = img.get_checked(x as i64 + 1, y as i64)?;
        let bottom = img.get_checked(x as i64, y as i64 + 1)?;
        Some(((right - center).abs(), (bottom - center).abs()))
    }
}

impl Default for GradientGridSampler {
    fn default() -> Self {
        Self {
            divisions: 20,
            threshold: 30.0,
            descriptor: RingDescriptor::coarse(),
        }
    }
}

impl FeatureSampler for GradientGridSampler {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn detect(&self, img: &LumaImage) -> SamplerResult<Vec<Keypoint>> {
        validate_image(img)?;
        let grid = SamplingGrid::new(img.width, img.height, self.divisions)?;

        Ok(grid
            .points()
            .filter_map(|(x, y)| {
                let (gx, gy) = Self::gradient(img, x, y)?;
                let magnitude = (gx * gx + gy * gy).sqrt();
                (magnitude > self.threshold).then(|| Keypoint {
                    x: x as f32,
                    y: y as f32,
                    scale: 1.0,
                    orientation: gy.atan2(gx),
                })
            })
            .collect())
    }

    fn describe(&self, img: &LumaImage, kps: &[Keypoint]) -> Vec<Descriptor> {
        self.descriptor.generate_descriptors(img, kps)
    }
}
