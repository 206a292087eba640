use nft_core::{Descriptor, Keypoint, LumaImage};
use nft_descriptor::{DescriptorGenerator, RingDescriptor};
use crate::error::SamplerResult;
use crate::grid::SamplingGrid;
use crate::sampler::{validate_divisions, validate_image, validate_threshold, FeatureSampler};
use std::f32::consts::FRAC_PI_4;

/// Neighbour offsets at distance 2, starting east and turning in 45° steps
const DIRECTIONS: [(i64, i64); 8] = [
    (2, 0), (1, 1), (0, 2), (-1, 1),
    (-2, 0), (-1, -1), (0, -2), (1, -1),
];

/// Keeps grid points with a strong contrast in any of eight directions.
///
/// Orientation is the index of the strongest direction times π/4, and the
/// scale grows with contrast as `1 + max / 255`. Descriptors come from
/// [`RingDescriptor::fine`].
#[derive(Debug, Clone)]
pub struct DirectionalGridSampler {
    divisions: usize,
    threshold: f32,
    descriptor: RingDescriptor,
}

impl DirectionalGridSampler {
    pub fn new(divisions: usize, threshold: f32) -> SamplerResult<Self> {
        validate_divisions(divisions)?;
        validate_threshold(threshold)?;
        Ok(Self {
            divisions,
            threshold,
            descriptor: RingDescriptor::fine(),
        })
    }

    /// Strongest absolute difference and its direction index; ties keep the first
    fn strongest_direction(img: &LumaImage, x: usize, y: usize) -> (usize, f32) {
        let center = img.get(x, y);
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| {
                img.get_checked(x as i64 + dx, y as i64 + dy)
                    .map_or(0.0, |v| (v - center).abs())
            })
            .enumerate()
            .fold((0, f32::MIN), |best, (i, g)| if g > best.1 { (i, g) } else { best })
    }
}

impl Default for DirectionalGridSampler {
    fn default() -> Self {
        Self {
            divisions: 30,
            threshold: 25.0,
            descriptor: RingDescriptor::fine(),
        }
    }
}

impl FeatureSampler for DirectionalGridSampler {
    fn name(&self) -> &'static str {
        "directional"
    }

    fn detect(&self, img: &LumaImage) -> SamplerResult<Vec<Keypoint>> {
        validate_image(img)?;
        let grid = SamplingGrid::new(img.width, img.height, self.divisions)?;

        Ok(grid
            .points()
            .filter_map(|(x, y)| {
                let (dir, max) = Self::strongest_direction(img, x, y);
                (max > self.threshold).then(|| Keypoint {
                    x: x as f32,
                    y: y as f32,
                    scale: 1.0 + max / 255.0,
                    orientation: dir as f32 * FRAC_PI_4,
                })
            })
            .collect())
    }

    fn describe(&self, img: &LumaImage, kps: &[Keypoint]) -> Vec<Descriptor> {
        self.descriptor.generate_descriptors(img, kps)
    }
}
