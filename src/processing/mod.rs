pub mod extraction;
pub mod extractors;
pub mod field_correction;
pub mod image;
pub mod ocr;

pub use extraction::{extract, extract_fields, extract_recognized, extract_with_policy};
pub use extractors::FieldExtractor;
pub use field_correction::FieldCorrection;
pub use self::image::{ImageInfo, ImageProcessor};
pub use ocr::{PageSegmentation, RecognizerConfig, TesseractRecognizer, TextRecognizer};
