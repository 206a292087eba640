#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in every feature descriptor
pub const DESCRIPTOR_LEN: usize = 128;

/// ITU-R BT.601 luma weights for R, G, B
pub const LUMA_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Fixed-length descriptor (always `DESCRIPTOR_LEN` entries)
pub type Descriptor = Vec<u8>;

/// All-zero descriptor used by placeholder samplers
pub fn zero_descriptor() -> Descriptor {
    vec![0; DESCRIPTOR_LEN]
}

/// Row-major single-channel luminance map
#[derive(Debug, Clone, PartialEq)]
pub struct LumaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl LumaImage {
    /// Wrap raw luminance samples, returning `None` when the length does not match
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Uniform map, handy for tests and benches
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Bounds-checked lookup with signed coordinates
    #[inline]
    pub fn get_checked(&self, x: i64, y: i64) -> Option<f32> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Sampled location before a descriptor is attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub orientation: f32, // radians
}

impl Keypoint {
    /// Grid keypoint with unit scale and zero orientation
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x: x as f32,
            y: y as f32,
            scale: 1.0,
            orientation: 0.0,
        }
    }
}

/// Feature record as written into the `.fset` document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeaturePoint {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub orientation: f32,
    pub descriptor: Descriptor,
}

impl FeaturePoint {
    pub fn new(kp: Keypoint, descriptor: Descriptor) -> Self {
        Self {
            x: kp.x,
            y: kp.y,
            scale: kp.scale,
            orientation: kp.orientation,
            descriptor,
        }
    }

    pub fn keypoint(&self) -> Keypoint {
        Keypoint {
            x: self.x,
            y: self.y,
            scale: self.scale,
            orientation: self.orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(LumaImage::from_raw(4, 4, vec![0.0; 15]).is_none());
        assert!(LumaImage::from_raw(4, 4, vec![0.0; 16]).is_some());
    }

    #[test]
    fn test_get_checked_bounds() {
        let mut img = LumaImage::filled(3, 2, 10.0);
        img.data[5] = 99.0;
        assert_eq!(img.get_checked(2, 1), Some(99.0));
        assert_eq!(img.get_checked(-1, 0), None);
        assert_eq!(img.get_checked(3, 0), None);
        assert_eq!(img.get_checked(0, 2), None);
    }

    #[test]
    fn test_feature_point_from_grid_keypoint() {
        let fp = FeaturePoint::new(Keypoint::at(102, 51), zero_descriptor());
        assert_eq!(fp.x, 102.0);
        assert_eq!(fp.y, 51.0);
        assert_eq!(fp.scale, 1.0);
        assert_eq!(fp.orientation, 0.0);
        assert_eq!(fp.descriptor.len(), DESCRIPTOR_LEN);
        assert!(fp.descriptor.iter().all(|&v| v == 0));
        assert_eq!(fp.keypoint(), Keypoint::at(102, 51));
    }
}
