use thiserror::Error;

use crate::models::{FieldName, Side};

/// Failure of the text recognition adapter.
///
/// Noisy or empty OCR output is not an error; only inputs the engine
/// cannot process at all end up here.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("image buffer is empty")]
    EmptyImage,

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("OCR engine error: {0}")]
    Engine(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One or more required fields could not be derived from the recognized text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Incomplete data detected ({}). Please provide proper source images.",
    join_labels(.missing)
)]
pub struct ValidationFailure {
    missing: Vec<FieldName>,
}

impl ValidationFailure {
    pub fn new(missing: Vec<FieldName>) -> Self {
        ValidationFailure { missing }
    }

    /// Missing fields, in the fixed required-field order.
    pub fn missing(&self) -> &[FieldName] {
        &self.missing
    }

    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(|field| field.label()).collect()
    }
}

fn join_labels(missing: &[FieldName]) -> String {
    missing
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("Both front and back images are required ({0} side is missing)")]
    MissingImage(Side),

    #[error("invalid base64 image payload: {0}")]
    InvalidPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardError {
    /// Missing fields when this is a validation failure.
    pub fn missing_fields(&self) -> Option<&[FieldName]> {
        match self {
            CardError::Validation(failure) => Some(failure.missing()),
            _ => None,
        }
    }
}
