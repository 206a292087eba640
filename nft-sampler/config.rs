use crate::error::SamplerResult;
use crate::sampler::{validate_divisions, validate_threshold};
use crate::types::SamplerKind;
use crate::builder::SamplerBuilder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampler selection and grid parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    pub kind: SamplerKind,
    /// Grid step is `dimension / grid_divisions` (at least 1 px)
    pub grid_divisions: usize,
    /// Luminance threshold for `threshold`, gradient threshold otherwise
    pub threshold: f32,
}

impl SamplerConfig {
    /// Defaults for the given sampler kind
    pub fn for_kind(kind: SamplerKind) -> Self {
        Self {
            kind,
            grid_divisions: kind.default_divisions(),
            threshold: kind.default_threshold(),
        }
    }

    pub fn threshold_preset() -> Self {
        Self::for_kind(SamplerKind::Threshold)
    }

    pub fn gradient_preset() -> Self {
        Self::for_kind(SamplerKind::Gradient)
    }

    pub fn directional_preset() -> Self {
        Self::for_kind(SamplerKind::Directional)
    }

    /// Convert to SamplerBuilder for further customization
    pub fn to_builder(self) -> SamplerBuilder {
        SamplerBuilder::from_config(self)
    }

    pub fn summary(&self) -> String {
        format!(
            "SamplerConfig: kind={}, divisions={}, threshold={}",
            self.kind, self.grid_divisions, self.threshold
        )
    }

    pub fn validate(&self) -> SamplerResult<()> {
        validate_divisions(self.grid_divisions)?;
        validate_threshold(self.threshold)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::threshold_preset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplerError;

    #[test]
    fn test_default_matches_threshold_preset() {
        let cfg = SamplerConfig::default();
        assert_eq!(cfg.kind, SamplerKind::Threshold);
        assert_eq!(cfg.grid_divisions, 10);
        assert_eq!(cfg.threshold, 128.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(SamplerConfig::gradient_preset().grid_divisions, 20);
        assert_eq!(SamplerConfig::directional_preset().threshold, 25.0);
    }

    #[test]
    fn test_validate() {
        let mut cfg = SamplerConfig::default();
        cfg.grid_divisions = 0;
        assert_eq!(cfg.validate(), Err(SamplerError::InvalidDivisions(0)));
        cfg.grid_divisions = 10;
        cfg.threshold = f32::NAN;
        assert!(matches!(cfg.validate(), Err(SamplerError::InvalidThreshold(_))));
    }

    #[test]
    fn test_summary_mentions_kind() {
        assert!(SamplerConfig::gradient_preset().summary().contains("kind=gradient"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip_with_partial_fields() {
        let cfg: SamplerConfig = serde_json::from_str(r#"{"kind":"directional"}"#).unwrap();
        assert_eq!(cfg.kind, SamplerKind::Directional);
        // missing fields fall back to the threshold defaults
        assert_eq!(cfg.grid_divisions, 10);
    }
}
