use nft_core::{Descriptor, FeaturePoint, Keypoint, LumaImage};
use crate::error::{SamplerError, SamplerResult};

/// Pluggable source of marker features.
///
/// Implementations pick grid locations in `detect` and attach descriptors in
/// `describe`; `sample` runs both and keeps detection order.
pub trait FeatureSampler {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn detect(&self, img: &LumaImage) -> SamplerResult<Vec<Keypoint>>;

    fn describe(&self, img: &LumaImage, kps: &[Keypoint]) -> Vec<Descriptor>;

    fn sample(&self, img: &LumaImage) -> SamplerResult<Vec<FeaturePoint>> {
        let kps = self.detect(img)?;
        let descs = self.describe(img, &kps);
        log::debug!("{} sampler kept {} features", self.name(), kps.len());
        Ok(kps
            .into_iter()
            .zip(descs)
            .map(|(kp, d)| FeaturePoint::new(kp, d))
            .collect())
    }
}

/// Checks that the luminance buffer matches its declared size
pub(crate) fn validate_image(img: &LumaImage) -> SamplerResult<()> {
    if img.width == 0 || img.height == 0 {
        return Err(SamplerError::InvalidImageSize {
            width: img.width,
            height: img.height,
        });
    }
    let expected_len = img.width * img.height;
    if img.data.len() != expected_len {
        return Err(SamplerError::InvalidImageData {
            expected_len,
            actual_len: img.data.len(),
        });
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f32) -> SamplerResult<()> {
    if !threshold.is_finite() {
        return Err(SamplerError::InvalidThreshold(threshold));
    }
    Ok(())
}

pub(crate) fn validate_divisions(divisions: usize) -> SamplerResult<()> {
    if divisions == 0 {
        return Err(SamplerError::InvalidDivisions(divisions));
    }
    Ok(())
}
