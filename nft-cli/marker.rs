use crate::config::MarkerConfig;
use crate::documents::{write_document, FeatureSet3dDocument, FeatureSetDocument, ImageSetDocument};
use crate::error::{MarkerError, MarkerResult};
use crate::preview::save_preview;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use nft_core::FeaturePoint;
use nft_sampler::{ConfiguredSampler, ImagePreprocessing};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Files produced by one marker build
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBundle {
    pub image: PathBuf,
    pub fset: PathBuf,
    pub fset3: PathBuf,
    pub iset: PathBuf,
    pub preview: Option<PathBuf>,
    /// Processed image dimensions shared by every document
    pub width: u32,
    pub height: u32,
    pub feature_count: usize,
}

impl MarkerBundle {
    /// The four marker artifacts in report order
    pub fn paths(&self) -> [&Path; 4] {
        [
            self.fset.as_path(),
            self.fset3.as_path(),
            self.iset.as_path(),
            self.image.as_path(),
        ]
    }
}

/// Turns one image into a set of NFT marker files
#[derive(Debug)]
pub struct MarkerBuilder {
    config: MarkerConfig,
    sampler: ConfiguredSampler,
}

impl MarkerBuilder {
    /// Validate the configuration and prepare its sampler
    pub fn new(config: MarkerConfig) -> MarkerResult<Self> {
        config.validate()?;
        let sampler = config.sampler.clone().to_builder().build()?;
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &MarkerConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Outputs are written one after another with no rollback, so a failure
    /// part way through can leave some of them on disk.
    pub fn build(&self) -> MarkerResult<MarkerBundle> {
        let cfg = &self.config;
        if !cfg.input.is_file() {
            return Err(MarkerError::InputNotFound(cfg.input.clone()));
        }
        log::info!("{}", cfg.summary());

        let img = load_rgb(&cfg.input)?;
        let mut img = fit_within(img, cfg.max_dimension);
        if let Some(factor) = cfg.contrast {
            ImagePreprocessing::apply_contrast(&mut img, factor)?;
        }
        let (width, height) = img.dimensions();

        ensure_parent_dir(&cfg.output_prefix)?;
        let image_path = cfg.artifact_path("jpg");
        save_jpeg(&img, &image_path, cfg.jpeg_quality)?;

        let luma = ImagePreprocessing::luminance(img.as_raw(), width as usize, height as usize)?;
        let features = self.sampler.sample(&luma)?;
        log::info!(
            "{} sampler: {} features on {}x{}",
            self.sampler.name(),
            features.len(),
            width,
            height
        );
        let feature_count = features.len();

        let preview = match &cfg.preview {
            Some(path) => {
                ensure_parent_dir(path)?;
                save_preview(path, &img, &features)?;
                Some(path.clone())
            }
            None => None,
        };

        let fset = cfg.artifact_path("fset");
        write_document(
            &fset,
            &FeatureSetDocument::new(width, height, features),
            cfg.pretty_json,
        )?;

        let fset3 = cfg.artifact_path("fset3");
        write_document(&fset3, &FeatureSet3dDocument::empty(width, height), cfg.pretty_json)?;

        let bytes = std::fs::read(&image_path).map_err(|source| MarkerError::ReadBack {
            path: image_path.clone(),
            source,
        })?;
        let iset = cfg.artifact_path("iset");
        write_document(
            &iset,
            &ImageSetDocument::from_jpeg_bytes(width, height, &bytes),
            cfg.pretty_json,
        )?;

        Ok(MarkerBundle {
            image: image_path,
            fset,
            fset3,
            iset,
            preview,
            width,
            height,
            feature_count,
        })
    }

    /// Sample features from an already processed image without touching disk
    pub fn sample(&self, img: &RgbImage) -> MarkerResult<Vec<FeaturePoint>> {
        let (w, h) = img.dimensions();
        let luma = ImagePreprocessing::luminance(img.as_raw(), w as usize, h as usize)?;
        Ok(self.sampler.sample(&luma)?)
    }
}

/// Build the marker files for `input` under `output_prefix` with default settings
pub fn create_marker(
    input: impl Into<PathBuf>,
    output_prefix: impl Into<PathBuf>,
) -> MarkerResult<MarkerBundle> {
    MarkerBuilder::new(MarkerConfig::new(input, output_prefix))?.build()
}

/// Decode an image file and normalize it to 8-bit RGB
pub fn load_rgb(path: &Path) -> MarkerResult<RgbImage> {
    let decode_err = |source: ImageError| MarkerError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    log::debug!(
        "decoded {}: {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    })
}

/// Target size when the longest side exceeds `max_dimension`.
///
/// The longest side becomes exactly `max_dimension`; the other side is
/// scaled by the same ratio and truncated, never below 1.
pub fn target_dimensions(width: u32, height: u32, max_dimension: u32) -> Option<(u32, u32)> {
    let longest = width.max(height);
    if longest <= max_dimension {
        return None;
    }
    let scale = |side: u32| -> u32 {
        ((side as u64 * max_dimension as u64) / longest as u64).max(1) as u32
    };
    Some((scale(width), scale(height)))
}

/// Downscale with a Lanczos filter so neither side exceeds `max_dimension`
pub fn fit_within(img: RgbImage, max_dimension: u32) -> RgbImage {
    let (w, h) = img.dimensions();
    match target_dimensions(w, h, max_dimension) {
        Some((nw, nh)) => {
            log::debug!("resizing {}x{} -> {}x{}", w, h, nw, nh);
            image::imageops::resize(&img, nw, nh, FilterType::Lanczos3)
        }
        None => img,
    }
}

/// Encode `img` as JPEG at `path`
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> MarkerResult<()> {
    let write_err = |source: std::io::Error| MarkerError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(|source| MarkerError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_err)?;
    log::debug!("wrote {} (quality {})", path.display(), quality);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> MarkerResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| MarkerError::Write {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_target_dimensions_small_images_untouched() {
        assert_eq!(target_dimensions(1024, 1024, 1024), None);
        assert_eq!(target_dimensions(640, 480, 1024), None);
    }

    #[test]
    fn test_target_dimensions_landscape_and_portrait() {
        assert_eq!(target_dimensions(2000, 1000, 1024), Some((1024, 512)));
        assert_eq!(target_dimensions(1000, 2000, 1024), Some((512, 1024)));
        // 2000 * 1024 / 3000 = 682.67
        assert_eq!(target_dimensions(3000, 2000, 1024), Some((1024, 682)));
    }

    #[test]
    fn test_target_dimensions_never_zero() {
        assert_eq!(target_dimensions(5000, 2, 1024), Some((1024, 1)));
    }

    #[test]
    fn test_fit_within_resizes() {
        let img = RgbImage::from_pixel(1100, 550, Rgb([255, 255, 255]));
        let out = fit_within(img, 1024);
        assert_eq!(out.dimensions(), (1024, 512));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let mut cfg = MarkerConfig::default();
        cfg.jpeg_quality = 0;
        assert!(matches!(MarkerBuilder::new(cfg), Err(MarkerError::Config(_))));
    }

    #[test]
    fn test_sample_in_memory() {
        let builder = MarkerBuilder::new(MarkerConfig::default()).unwrap();
        let img = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        let features = builder.sample(&img).unwrap();
        // steps of 10 over 10..90 on both axes
        assert_eq!(features.len(), 64);
    }
}
