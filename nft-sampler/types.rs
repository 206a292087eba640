#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which grid sampler the builder produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SamplerKind {
    /// Luminance threshold on a coarse grid, zero descriptors
    #[default]
    Threshold,
    /// Forward-difference gradient magnitude, coarse ring descriptors
    Gradient,
    /// Eight-direction gradient, fine ring descriptors
    Directional,
}

impl SamplerKind {
    pub fn name(self) -> &'static str {
        match self {
            SamplerKind::Threshold => "threshold",
            SamplerKind::Gradient => "gradient",
            SamplerKind::Directional => "directional",
        }
    }

    /// Grid divisions each sampler was tuned for
    pub fn default_divisions(self) -> usize {
        match self {
            SamplerKind::Threshold => 10,
            SamplerKind::Gradient => 20,
            SamplerKind::Directional => 30,
        }
    }

    /// Luminance threshold (threshold sampler) or gradient threshold (others)
    pub fn default_threshold(self) -> f32 {
        match self {
            SamplerKind::Threshold => 128.0,
            SamplerKind::Gradient => 30.0,
            SamplerKind::Directional => 25.0,
        }
    }
}

impl std::fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
