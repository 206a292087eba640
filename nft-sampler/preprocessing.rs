use crate::error::{SamplerError, SamplerResult};
use nft_core::{LumaImage, LUMA_WEIGHTS};

/// Pixel-level preprocessing on interleaved RGB8 buffers
pub struct ImagePreprocessing;

impl ImagePreprocessing {
    /// Weighted-sum luminance of a row-major RGB8 buffer
    pub fn luminance(rgb: &[u8], width: usize, height: usize) -> SamplerResult<LumaImage> {
        if width == 0 || height == 0 {
            return Err(SamplerError::InvalidImageSize { width, height });
        }
        let expected_len = width * height * 3;
        if rgb.len() != expected_len {
            return Err(SamplerError::InvalidImageData {
                expected_len,
                actual_len: rgb.len(),
            });
        }

        let [wr, wg, wb] = LUMA_WEIGHTS;
        let data = rgb
            .chunks_exact(3)
            .map(|px| wr * px[0] as f32 + wg * px[1] as f32 + wb * px[2] as f32)
            .collect();

        Ok(LumaImage { width, height, data })
    }

    /// Linear contrast stretch around mid-grey: `(c - 128) * factor + 128`, clamped
    pub fn apply_contrast(rgb: &mut [u8], factor: f32) -> SamplerResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(SamplerError::InvalidContrast(factor));
        }
        for c in rgb.iter_mut() {
            *c = ((*c as f32 - 128.0) * factor + 128.0).clamp(0.0, 255.0) as u8;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let luma = ImagePreprocessing::luminance(&rgb, 2, 2).unwrap();
        assert!((luma.get(0, 0) - 0.2989 * 255.0).abs() < 1e-3);
        assert!((luma.get(1, 0) - 0.5870 * 255.0).abs() < 1e-3);
        assert!((luma.get(0, 1) - 0.1140 * 255.0).abs() < 1e-3);
        // white sits just under 255 but well above the default threshold
        assert!(luma.get(1, 1) > 254.9 && luma.get(1, 1) <= 255.0);
    }

    #[test]
    fn test_luminance_rejects_bad_buffers() {
        assert!(matches!(
            ImagePreprocessing::luminance(&[0; 12], 0, 4),
            Err(SamplerError::InvalidImageSize { .. })
        ));
        assert_eq!(
            ImagePreprocessing::luminance(&[0; 11], 2, 2),
            Err(SamplerError::InvalidImageData { expected_len: 12, actual_len: 11 })
        );
    }

    #[test]
    fn test_contrast_identity_and_stretch() {
        let original = vec![0u8, 64, 128, 200, 255];

        let mut px = original.clone();
        ImagePreprocessing::apply_contrast(&mut px, 1.0).unwrap();
        assert_eq!(px, original);

        let mut px = original.clone();
        ImagePreprocessing::apply_contrast(&mut px, 1.5).unwrap();
        assert_eq!(px, vec![0, 32, 128, 236, 255]);
    }

    #[test]
    fn test_contrast_rejects_bad_factor() {
        let mut px = vec![10u8; 3];
        assert!(ImagePreprocessing::apply_contrast(&mut px, 0.0).is_err());
        assert!(ImagePreprocessing::apply_contrast(&mut px, f32::NAN).is_err());
    }
}
