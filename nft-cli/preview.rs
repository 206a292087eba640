use crate::error::{MarkerError, MarkerResult};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;
use nft_core::FeaturePoint;
use std::path::Path;

const MARK_RADIUS: i32 = 3;
const MARK_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Copy of `img` with a red circle on every feature
pub fn render_preview(img: &RgbImage, features: &[FeaturePoint]) -> RgbImage {
    let mut canvas = img.clone();
    for f in features {
        draw_hollow_circle_mut(&mut canvas, (f.x as i32, f.y as i32), MARK_RADIUS, MARK_COLOR);
    }
    canvas
}

/// Render and save the preview; the format follows the file extension
pub fn save_preview(path: &Path, img: &RgbImage, features: &[FeaturePoint]) -> MarkerResult<()> {
    render_preview(img, features)
        .save(path)
        .map_err(|source| MarkerError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nft_core::{zero_descriptor, Keypoint};

    #[test]
    fn test_preview_marks_features_only() {
        let img = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
        let features = vec![FeaturePoint::new(Keypoint::at(20, 20), zero_descriptor())];
        let out = render_preview(&img, &features);
        assert_eq!(out.dimensions(), (40, 40));
        // circle passes through (20 + r, 20), center stays untouched
        assert_eq!(out.get_pixel(23, 20), &MARK_COLOR);
        assert_eq!(out.get_pixel(20, 20), &Rgb([0, 0, 0]));
        // source image is not modified
        assert_eq!(img.get_pixel(23, 20), &Rgb([0, 0, 0]));
    }
}
