use nft_core::{zero_descriptor, Descriptor, Keypoint, LumaImage, DESCRIPTOR_LEN};
use std::f32::consts::TAU;

/// Produces one descriptor per keypoint
pub trait DescriptorGenerator {
    fn describe(&self, img: &LumaImage, kp: &Keypoint) -> Descriptor;

    fn generate_descriptors(&self, img: &LumaImage, kps: &[Keypoint]) -> Vec<Descriptor> {
        kps.iter().map(|kp| self.describe(img, kp)).collect()
    }
}

/// Emits the all-zero descriptor regardless of image content
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDescriptor;

impl DescriptorGenerator for ZeroDescriptor {
    fn describe(&self, _img: &LumaImage, _kp: &Keypoint) -> Descriptor {
        zero_descriptor()
    }
}

/// Ring radius for sample `i`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingRadius {
    Fixed(f32),
    /// `base + (i % period)`
    Cycling { base: f32, period: usize },
}

impl RingRadius {
    fn at(&self, i: usize) -> f32 {
        match *self {
            RingRadius::Fixed(r) => r,
            RingRadius::Cycling { base, period } => base + (i % period.max(1)) as f32,
        }
    }
}

/// How sample positions and quantized values snap to integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snap {
    Floor,
    /// Halves round towards +inf
    Round,
}

impl Snap {
    #[inline]
    fn apply(self, v: f32) -> f32 {
        match self {
            Snap::Floor => v.floor(),
            Snap::Round => (v + 0.5).floor(),
        }
    }
}

/// Samples `DESCRIPTOR_LEN` luminance values on a ring around the keypoint.
///
/// Sample `i` sits at angle `2πi / DESCRIPTOR_LEN`. Each value is
/// `snap(luma / divisor)`; positions outside the image contribute 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDescriptor {
    pub radius: RingRadius,
    pub divisor: f32,
    pub snap: Snap,
}

impl RingDescriptor {
    /// Radius 5, 16 quantization levels, floor snapping
    pub fn coarse() -> Self {
        Self {
            radius: RingRadius::Fixed(5.0),
            divisor: 16.0,
            snap: Snap::Floor,
        }
    }

    /// Radius cycling through 1..=8, 32 quantization levels, rounded
    pub fn fine() -> Self {
        Self {
            radius: RingRadius::Cycling { base: 1.0, period: 8 },
            divisor: 8.0,
            snap: Snap::Round,
        }
    }
}

impl DescriptorGenerator for RingDescriptor {
    fn describe(&self, img: &LumaImage, kp: &Keypoint) -> Descriptor {
        (0..DESCRIPTOR_LEN)
            .map(|i| {
                let angle = i as f32 / DESCRIPTOR_LEN as f32 * TAU;
                let r = self.radius.at(i);
                let (s, c) = angle.sin_cos();
                let sx = self.snap.apply(kp.x + c * r) as i64;
                let sy = self.snap.apply(kp.y + s * r) as i64;
                match img.get_checked(sx, sy) {
                    Some(luma) => self.snap.apply(luma / self.divisor).clamp(0.0, 255.0) as u8,
                    None => 0,
                }
            })
            .collect()
    }
}
