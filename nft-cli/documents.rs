//! Serialized marker documents (`.fset`, `.fset3`, `.iset`).

use crate::error::{MarkerError, MarkerResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use nft_core::FeaturePoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DPI: [u32; 2] = [72, 72];
pub const IMAGE_FORMAT: &str = "jpeg";

/// 2D feature set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSetDocument {
    pub width: u32,
    pub height: u32,
    pub dpi: [u32; 2],
    pub features: Vec<FeaturePoint>,
}

impl FeatureSetDocument {
    pub fn new(width: u32, height: u32, features: Vec<FeaturePoint>) -> Self {
        Self {
            width,
            height,
            dpi: DEFAULT_DPI,
            features,
        }
    }
}

/// 3D feature set; the list is always empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet3dDocument {
    pub width: u32,
    pub height: u32,
    pub features3d: Vec<serde_json::Value>,
}

impl FeatureSet3dDocument {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            features3d: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub width: u32,
    pub height: u32,
    /// Base64 (standard alphabet, padded) of the encoded image file
    pub data: String,
    pub format: String,
}

/// Image container embedding the processed JPEG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSetDocument {
    pub images: Vec<ImageEntry>,
}

impl ImageSetDocument {
    pub fn from_jpeg_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        Self {
            images: vec![ImageEntry {
                width,
                height,
                data: STANDARD.encode(bytes),
                format: IMAGE_FORMAT.to_string(),
            }],
        }
    }

    /// Decode the first image's payload
    pub fn decode_first(&self) -> Option<Vec<u8>> {
        let entry = self.images.first()?;
        STANDARD.decode(&entry.data).ok()
    }
}

/// Serialize `doc` as JSON and write it to `path`
pub fn write_document<T: Serialize>(path: &Path, doc: &T, pretty: bool) -> MarkerResult<()> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(doc)?
    } else {
        serde_json::to_vec(doc)?
    };
    std::fs::write(path, bytes).map_err(|source| MarkerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nft_core::{zero_descriptor, Keypoint};

    #[test]
    fn test_fset_field_names() {
        let doc = FeatureSetDocument::new(
            20,
            10,
            vec![FeaturePoint::new(Keypoint::at(2, 1), zero_descriptor())],
        );
        let v = serde_json::to_value(&doc).unwrap();
        assert_eq!(v["width"], 20);
        assert_eq!(v["height"], 10);
        assert_eq!(v["dpi"], serde_json::json!([72, 72]));
        let f = &v["features"][0];
        assert_eq!(f["x"], 2.0);
        assert_eq!(f["y"], 1.0);
        assert_eq!(f["scale"], 1.0);
        assert_eq!(f["orientation"], 0.0);
        assert_eq!(f["descriptor"].as_array().unwrap().len(), 128);
    }

    #[test]
    fn test_fset3_is_empty() {
        let v = serde_json::to_value(FeatureSet3dDocument::empty(4, 3)).unwrap();
        assert_eq!(v, serde_json::json!({"width": 4, "height": 3, "features3d": []}));
    }

    #[test]
    fn test_iset_encodes_bytes() {
        let doc = ImageSetDocument::from_jpeg_bytes(1, 1, b"\xff\xd8hello");
        assert_eq!(doc.images.len(), 1);
        assert_eq!(doc.images[0].format, "jpeg");
        assert_eq!(doc.images[0].data, "/9hoZWxsbw==");
        assert_eq!(doc.decode_first().unwrap(), b"\xff\xd8hello");
    }
}
