use serde::{Deserialize, Serialize};

use super::FieldName;

/// Which fields must be present for an extraction to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Every field is required and every missing one is reported.
    #[default]
    AllFields,
    /// Only the Aadhaar number is required.
    IdentifierOnly,
}

impl ValidationPolicy {
    pub fn required_fields(&self) -> &'static [FieldName] {
        match self {
            ValidationPolicy::AllFields => &FieldName::ALL,
            ValidationPolicy::IdentifierOnly => &[FieldName::IdentifierNumber],
        }
    }
}
