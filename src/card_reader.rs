use std::panic;
use std::thread;

use log::info;

use crate::models::*;
use crate::processing::*;
use crate::utils::CardError;

/// Reads both sides of a card: OCR through the given recognizer, then field
/// extraction and validation.
pub struct CardReader<R> {
    recognizer: R,
    policy: ValidationPolicy,
}

impl<R: TextRecognizer> CardReader<R> {
    pub fn new(recognizer: R) -> Self {
        CardReader {
            recognizer,
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    // Main entry point: image bytes in, validated record out
    pub fn read(&self, front_image: &[u8], back_image: &[u8]) -> Result<ExtractedRecord, CardError> {
        // Step 1: OCR both sides
        let raw = self.recognize(front_image, back_image)?;

        // Step 2: Extract and validate fields
        let record = extract_recognized(&raw, self.policy)?;

        info!("Card fields extracted successfully");
        Ok(record)
    }

    /// Recognize the front and back images concurrently.
    pub fn recognize(
        &self,
        front_image: &[u8],
        back_image: &[u8],
    ) -> Result<RawRecognitionResult, CardError> {
        if front_image.is_empty() {
            return Err(CardError::MissingImage(Side::Front));
        }
        if back_image.is_empty() {
            return Err(CardError::MissingImage(Side::Back));
        }

        let (front_text, back_text) = thread::scope(|scope| {
            let back = scope.spawn(|| self.recognize_side(Side::Back, back_image));
            let front = self.recognize_side(Side::Front, front_image);
            let back = back.join().unwrap_or_else(|payload| panic::resume_unwind(payload));
            (front, back)
        });

        Ok(RawRecognitionResult::new(front_text?, back_text?))
    }

    fn recognize_side(&self, side: Side, image: &[u8]) -> Result<String, CardError> {
        info!("Recognizing {} side ({} bytes)", side, image.len());
        Ok(self.recognizer.recognize(image)?)
    }
}
