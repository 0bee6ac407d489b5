use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};
use tempfile::NamedTempFile;
use tesseract::{PageSegMode, Tesseract};

use super::ImageProcessor;
use crate::utils::RecognitionError;

/// Turns an image buffer into whatever text the OCR engine can read off it.
///
/// Unreadable-but-valid images yield empty or noisy text, not an error.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for Box<T> {
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError> {
        (**self).recognize(image)
    }
}

/// Subset of tesseract's page segmentation modes that make sense for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSegmentation {
    #[default]
    Auto,
    SingleBlock,
    SparseText,
}

impl From<PageSegmentation> for PageSegMode {
    fn from(mode: PageSegmentation) -> Self {
        match mode {
            PageSegmentation::Auto => PageSegMode::PsmAuto,
            PageSegmentation::SingleBlock => PageSegMode::PsmSingleBlock,
            PageSegmentation::SparseText => PageSegMode::PsmSparseText,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Tesseract language code(s), e.g. `eng` or `eng+hin`.
    pub language: String,
    /// Directory holding the `.traineddata` files. Tesseract falls back to
    /// `TESSDATA_PREFIX` when unset.
    pub tessdata_dir: Option<PathBuf>,
    pub page_segmentation: PageSegmentation,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            language: "eng".to_string(),
            tessdata_dir: None,
            page_segmentation: PageSegmentation::Auto,
        }
    }
}

/// Recognizer backed by a local tesseract installation.
pub struct TesseractRecognizer {
    config: RecognizerConfig,
}

impl TesseractRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        TesseractRecognizer { config }
    }

    fn datapath(&self) -> Result<Option<&str>, RecognitionError> {
        match &self.config.tessdata_dir {
            Some(dir) => dir.to_str().map(Some).ok_or_else(|| {
                RecognitionError::Engine(format!(
                    "tessdata path is not valid UTF-8: {}",
                    dir.display()
                ))
            }),
            None => Ok(None),
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let image_info = ImageProcessor::inspect(image)?;
        info!(
            "Recognizing {:?} image {}x{} (sha256 {})",
            image_info.format,
            image_info.width,
            image_info.height,
            ImageProcessor::digest(image)
        );

        // Tesseract reads images from disk
        let mut temp_file = NamedTempFile::new()?;
        temp_file.write_all(image)?;
        temp_file.flush()?;

        let image_path_str = temp_file.path().to_str().ok_or_else(|| {
            RecognitionError::Engine("Failed to convert temp file path to string".to_string())
        })?;

        let mut tess = Tesseract::new(self.datapath()?, Some(self.config.language.as_str()))
            .map_err(|e| RecognitionError::Engine(format!("Tesseract init error: {}", e)))?;

        tess.set_page_seg_mode(self.config.page_segmentation.into());

        let mut tess = tess
            .set_image(image_path_str)
            .map_err(|e| RecognitionError::Engine(format!("Tesseract set image error: {}", e)))?;

        let text = tess
            .get_text()
            .map_err(|e| RecognitionError::Engine(format!("Tesseract error: {}", e)))?;

        debug!("Recognized {} characters", text.chars().count());
        Ok(text)
    }
}
