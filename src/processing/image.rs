use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{GenericImageView, ImageFormat};
use sha2::{Digest, Sha256};

use crate::utils::{CardError, RecognitionError};

/// Basic facts about an uploaded card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode the buffer far enough to know it is an image the OCR engine can read.
    pub fn inspect(image_data: &[u8]) -> Result<ImageInfo, RecognitionError> {
        if image_data.is_empty() {
            return Err(RecognitionError::EmptyImage);
        }

        let format = image::guess_format(image_data)
            .map_err(|e| RecognitionError::Decode(format!("Unknown image format: {}", e)))?;
        let img = image::load_from_memory_with_format(image_data, format)
            .map_err(|e| RecognitionError::Decode(format!("Failed to decode image: {}", e)))?;
        let (width, height) = img.dimensions();

        Ok(ImageInfo {
            format,
            width,
            height,
        })
    }

    /// SHA-256 of the raw bytes, used to refer to an image in logs.
    pub fn digest(image_data: &[u8]) -> String {
        format!("{:x}", Sha256::digest(image_data))
    }

    /// Decode a base64 image payload. Accepts bare base64 or a
    /// `data:image/...;base64,` URL as produced by the cropping UI.
    pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>, CardError> {
        let encoded = match payload.trim().split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            Some(_) => {
                return Err(CardError::InvalidPayload(
                    "malformed data URL prefix".to_string(),
                ))
            }
            None => payload,
        };

        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD
            .decode(compact)
            .map_err(|e| CardError::InvalidPayload(e.to_string()))
    }
}
