use crate::config::SamplerConfig;
use crate::configured_sampler::ConfiguredSampler;
use crate::directional_grid::DirectionalGridSampler;
use crate::error::SamplerResult;
use crate::gradient_grid::GradientGridSampler;
use crate::sampler::FeatureSampler;
use crate::threshold_grid::ThresholdGridSampler;
use crate::types::SamplerKind;

/// Builder for creating a `ConfiguredSampler`
#[derive(Debug, Clone)]
pub struct SamplerBuilder {
    kind: SamplerKind,
    grid_divisions: usize,
    threshold: f32,
}

impl SamplerBuilder {
    /// Create a new builder with the threshold sampler defaults
    pub fn new() -> Self {
        Self::from_config(SamplerConfig::default())
    }

    /// Switch sampler kind, keeping the current grid and threshold
    pub fn kind(mut self, kind: SamplerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the number of grid divisions per axis
    pub fn grid_divisions(mut self, divisions: usize) -> Self {
        self.grid_divisions = divisions;
        self
    }

    /// Set the luminance or gradient threshold
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Threshold sampler with its tuned grid and threshold
    pub fn preset_threshold(self) -> Self {
        self.preset(SamplerKind::Threshold)
    }

    /// Gradient sampler with its tuned grid and threshold
    pub fn preset_gradient(self) -> Self {
        self.preset(SamplerKind::Gradient)
    }

    /// Directional sampler with its tuned grid and threshold
    pub fn preset_directional(self) -> Self {
        self.preset(SamplerKind::Directional)
    }

    fn preset(self, kind: SamplerKind) -> Self {
        Self::from_config(SamplerConfig::for_kind(kind))
    }

    /// Build the `ConfiguredSampler`
    pub fn build(self) -> SamplerResult<ConfiguredSampler> {
        let config = self.clone().to_config();
        config.validate()?;
        let sampler: Box<dyn FeatureSampler> = match config.kind {
            SamplerKind::Threshold => Box::new(ThresholdGridSampler::new(
                config.grid_divisions,
                config.threshold,
            )?),
            SamplerKind::Gradient => Box::new(GradientGridSampler::new(
                config.grid_divisions,
                config.threshold,
            )?),
            SamplerKind::Directional => Box::new(DirectionalGridSampler::new(
                config.grid_divisions,
                config.threshold,
            )?),
        };
        Ok(ConfiguredSampler { sampler, config })
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `SamplerConfig`
    pub fn from_config(config: SamplerConfig) -> Self {
        Self {
            kind: config.kind,
            grid_divisions: config.grid_divisions,
            threshold: config.threshold,
        }
    }

    /// Convert the builder into a `SamplerConfig`
    pub fn to_config(self) -> SamplerConfig {
        SamplerConfig {
            kind: self.kind,
            grid_divisions: self.grid_divisions,
            threshold: self.threshold,
        }
    }
}

impl Default for SamplerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplerError;

    #[test]
    fn test_default_build() {
        let sampler = SamplerBuilder::new().build().unwrap();
        assert_eq!(sampler.name(), "threshold");
        assert_eq!(sampler.config(), &SamplerConfig::default());
    }

    #[test]
    fn test_presets_select_kind() {
        let s = SamplerBuilder::new().preset_gradient().build().unwrap();
        assert_eq!(s.name(), "gradient");
        assert_eq!(s.config().grid_divisions, 20);

        let s = SamplerBuilder::new().preset_directional().build().unwrap();
        assert_eq!(s.name(), "directional");
        assert_eq!(s.config().threshold, 25.0);
    }

    #[test]
    fn test_overrides_after_preset() {
        let cfg = SamplerBuilder::new()
            .preset_gradient()
            .grid_divisions(8)
            .threshold(12.0)
            .to_config();
        assert_eq!(cfg.kind, SamplerKind::Gradient);
        assert_eq!(cfg.grid_divisions, 8);
        assert_eq!(cfg.threshold, 12.0);
    }

    #[test]
    fn test_invalid_build() {
        let err = SamplerBuilder::new().grid_divisions(0).build().err();
        assert_eq!(err, Some(SamplerError::InvalidDivisions(0)));
    }

    #[test]
    fn test_config_roundtrip() {
        let cfg = SamplerConfig::directional_preset();
        assert_eq!(cfg.clone().to_builder().to_config(), cfg);
        assert!(SamplerBuilder::new().summary().contains("divisions=10"));
    }
}
