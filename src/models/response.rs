use serde::{Deserialize, Serialize};

use super::ExtractedRecord;
use crate::utils::CardError;

pub const SUCCESS_MESSAGE: &str = "OCR data extracted successfully";

/// Envelope handed back to whoever requested a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ExtractedRecord>,
}

impl ScanResponse {
    pub fn success(record: ExtractedRecord) -> Self {
        ScanResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(record),
        }
    }

    pub fn failure(error: &CardError) -> Self {
        ScanResponse {
            success: false,
            message: error.to_string(),
            data: None,
        }
    }
}

impl From<Result<ExtractedRecord, CardError>> for ScanResponse {
    fn from(result: Result<ExtractedRecord, CardError>) -> Self {
        match result {
            Ok(record) => ScanResponse::success(record),
            Err(err) => ScanResponse::failure(&err),
        }
    }
}
