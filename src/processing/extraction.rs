use log::debug;

use super::FieldExtractor;
use crate::models::{ExtractedRecord, FieldName, RawRecognitionResult, Side, ValidationPolicy};
use crate::utils::ValidationFailure;
use crate::validation::CompletenessValidator;

/// Run every field extractor over the card text without validating.
///
/// The identifier number, date of birth and gender are searched in the
/// combined text, the name only on the front and the address only on the back.
pub fn extract_fields(raw: &RawRecognitionResult) -> ExtractedRecord {
    let raw_text = raw.combined();

    let record = ExtractedRecord {
        identifier_number: FieldExtractor::identifier_number(&raw_text),
        date_of_birth: FieldExtractor::date_of_birth(&raw_text),
        gender: FieldExtractor::gender(&raw_text),
        name: FieldExtractor::name(raw.text(Side::Front)),
        address: FieldExtractor::address(raw.text(Side::Back)),
        raw_text,
    };

    for field in FieldName::ALL {
        debug!(
            "{}: {}",
            field,
            if record.has_field(field) { "found" } else { "not found" }
        );
    }

    record
}

/// Extract a record, failing unless every field was found.
pub fn extract(front_text: &str, back_text: &str) -> Result<ExtractedRecord, ValidationFailure> {
    extract_with_policy(front_text, back_text, ValidationPolicy::AllFields)
}

pub fn extract_with_policy(
    front_text: &str,
    back_text: &str,
    policy: ValidationPolicy,
) -> Result<ExtractedRecord, ValidationFailure> {
    extract_recognized(&RawRecognitionResult::new(front_text, back_text), policy)
}

/// Extract and validate text already held in a recognition result.
pub fn extract_recognized(
    raw: &RawRecognitionResult,
    policy: ValidationPolicy,
) -> Result<ExtractedRecord, ValidationFailure> {
    let record = extract_fields(raw);
    CompletenessValidator::validate(&record, policy)?;
    Ok(record)
}
