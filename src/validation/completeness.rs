use log::debug;

use crate::models::{ExtractedRecord, FieldName, ValidationPolicy};
use crate::utils::ValidationFailure;

pub struct CompletenessValidator;

impl CompletenessValidator {
    /// Required fields the record does not carry, in reporting order.
    pub fn missing_fields(record: &ExtractedRecord, policy: ValidationPolicy) -> Vec<FieldName> {
        policy
            .required_fields()
            .iter()
            .copied()
            .filter(|field| !record.has_field(*field))
            .collect()
    }

    /// Fails with every missing field, not just the first one found.
    pub fn validate(
        record: &ExtractedRecord,
        policy: ValidationPolicy,
    ) -> Result<(), ValidationFailure> {
        let missing = Self::missing_fields(record, policy);

        if missing.is_empty() {
            Ok(())
        } else {
            debug!("record incomplete under {:?} policy: {:?}", policy, missing);
            Err(ValidationFailure::new(missing))
        }
    }
}
