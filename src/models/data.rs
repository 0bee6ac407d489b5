use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which face of the card an image or text blob came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Front => write!(f, "front"),
            Side::Back => write!(f, "back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Required fields of an extracted record, declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FieldName {
    IdentifierNumber,
    Name,
    DateOfBirth,
    Gender,
    Address,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::IdentifierNumber,
        FieldName::Name,
        FieldName::DateOfBirth,
        FieldName::Gender,
        FieldName::Address,
    ];

    /// Human readable label used in failure messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::IdentifierNumber => "Aadhaar Number",
            FieldName::Name => "Name",
            FieldName::DateOfBirth => "Date of Birth",
            FieldName::Gender => "Gender",
            FieldName::Address => "Address",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text recognized from both sides of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecognitionResult {
    pub front_text: String,
    pub back_text: String,
}

impl RawRecognitionResult {
    pub fn new(front_text: impl Into<String>, back_text: impl Into<String>) -> Self {
        RawRecognitionResult {
            front_text: front_text.into(),
            back_text: back_text.into(),
        }
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front_text,
            Side::Back => &self.back_text,
        }
    }

    /// Front and back text joined by a newline.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.front_text, self.back_text)
    }
}

/// Structured fields read off an Aadhaar card.
///
/// Serialized with the field names the upload API has always returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "aadhaarNumber")]
    pub identifier_number: Option<String>,
    #[serde(rename = "dob")]
    pub date_of_birth: Option<String>,
    pub gender: Option<Gender>,
    pub name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

impl ExtractedRecord {
    /// An empty record carrying only the combined text.
    pub fn from_raw_text(raw_text: String) -> Self {
        ExtractedRecord {
            identifier_number: None,
            date_of_birth: None,
            gender: None,
            name: None,
            address: None,
            raw_text,
        }
    }

    pub fn has_field(&self, field: FieldName) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().map_or(false, |v| !v.is_empty())
        }

        match field {
            FieldName::IdentifierNumber => present(&self.identifier_number),
            FieldName::Name => present(&self.name),
            FieldName::DateOfBirth => present(&self.date_of_birth),
            FieldName::Gender => self.gender.is_some(),
            FieldName::Address => present(&self.address),
        }
    }

    pub fn is_complete(&self) -> bool {
        FieldName::ALL.iter().all(|field| self.has_field(*field))
    }

    /// Date of birth as a calendar date. The extracted text is a literal
    /// `DD/MM/YYYY` match, so this is `None` for values like `99/99/9999`.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let dob = self.date_of_birth.as_deref()?;
        NaiveDate::parse_from_str(dob, "%d/%m/%Y").ok()
    }
}
