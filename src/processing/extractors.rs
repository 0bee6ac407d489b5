// Field-specific extraction over recognized card text
use lazy_static::lazy_static;
use regex::Regex;

use super::FieldCorrection;
use crate::models::Gender;

lazy_static! {
    // Twelve digits in groups of four, each separator a single optional
    // whitespace, not glued to other digits (a PIN code on the previous line)
    pub static ref IDENTIFIER_PATTERN: Regex =
        Regex::new(r"(?:^|[^0-9])([0-9]{4})\s?([0-9]{4})\s?([0-9]{4})(?:[^0-9]|$)").unwrap();

    // Same groups without the digit guards, for numbers OCR glued to other digits
    static ref LOOSE_IDENTIFIER_PATTERN: Regex =
        Regex::new(r"([0-9]{4})\s?([0-9]{4})\s?([0-9]{4})").unwrap();

    // DD/MM/YYYY, no calendar validation
    pub static ref DOB_PATTERN: Regex = Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").unwrap();

    // Everything after the "Address" label up to the Aadhaar number or the
    // UIDAI contact footer, whichever comes first
    static ref ADDRESS_SPAN: Regex = Regex::new(
        r"(?is)Address[:\s]*(.+?)(?:[^0-9][0-9]{4}\s?[0-9]{4}\s?[0-9]{4}(?:[^0-9]|$)|help@uidai\.gov\.in|www\.uidai\.gov\.in)"
    ).unwrap();

    static ref LOOSE_ADDRESS_SPAN: Regex = Regex::new(
        r"(?is)Address[:\s]*(.+?)(?:[0-9]{4}\s?[0-9]{4}\s?[0-9]{4}|help@uidai\.gov\.in|www\.uidai\.gov\.in)"
    ).unwrap();
}

/// Pure extractors, one per card field.
pub struct FieldExtractor;

impl FieldExtractor {
    /// First Aadhaar number in the text, normalized to `XXXX XXXX XXXX`.
    ///
    /// A number standing apart from other digits wins; otherwise the leftmost
    /// twelve-digit run is taken even when it touches further digits.
    pub fn identifier_number(text: &str) -> Option<String> {
        IDENTIFIER_PATTERN
            .captures(text)
            .or_else(|| LOOSE_IDENTIFIER_PATTERN.captures(text))
            .map(|caps| format!("{} {} {}", &caps[1], &caps[2], &caps[3]))
    }

    pub fn date_of_birth(text: &str) -> Option<String> {
        DOB_PATTERN.find(text).map(|m| m.as_str().to_string())
    }

    /// "female" is checked first: it contains "male", so the opposite order
    /// would read every female card as male.
    pub fn gender(text: &str) -> Option<Gender> {
        let lowered = text.to_lowercase();

        if lowered.contains("female") {
            Some(Gender::Female)
        } else if lowered.contains("male") {
            Some(Gender::Male)
        } else {
            None
        }
    }

    /// The name is printed on the line right above the date of birth on the
    /// front of the card.
    pub fn name(front_text: &str) -> Option<String> {
        let lines: Vec<&str> = front_text
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 2)
            .collect();

        let dob_index = lines.iter().position(|line| DOB_PATTERN.is_match(line))?;
        if dob_index == 0 {
            return None;
        }

        let name = FieldCorrection::clean_name(lines[dob_index - 1]);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Raw address span from the back of the card, before cleanup.
    pub fn address_span(back_text: &str) -> Option<&str> {
        ADDRESS_SPAN
            .captures(back_text)
            .or_else(|| LOOSE_ADDRESS_SPAN.captures(back_text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn address(back_text: &str) -> Option<String> {
        let address = FieldCorrection::clean_address(Self::address_span(back_text)?);
        if address.is_empty() {
            None
        } else {
            Some(address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_number_normalizes_spacing() {
        assert_eq!(
            FieldExtractor::identifier_number("Your Aadhaar No.: 1234 5678 9012 VID"),
            Some("1234 5678 9012".to_string())
        );
        assert_eq!(
            FieldExtractor::identifier_number("1234\n5678\t9012"),
            Some("1234 5678 9012".to_string())
        );
        assert_eq!(
            FieldExtractor::identifier_number("id 123456789012"),
            Some("1234 5678 9012".to_string())
        );
    }

    #[test]
    fn test_identifier_number_absent() {
        assert_eq!(FieldExtractor::identifier_number("1234 5678 901"), None);
        assert_eq!(FieldExtractor::identifier_number("1234  5678 9012"), None);
        assert_eq!(FieldExtractor::identifier_number("no digits at all"), None);
    }

    #[test]
    fn test_identifier_number_ignores_pin_code_digits() {
        let text = "Pune 411001\n1234 5678 9012";
        assert_eq!(
            FieldExtractor::identifier_number(text),
            Some("1234 5678 9012".to_string())
        );
    }

    #[test]
    fn test_identifier_number_glued_to_other_digits() {
        assert_eq!(
            FieldExtractor::identifier_number("ID51234 5678 9012"),
            Some("1234 5678 9012".to_string())
        );
        assert_eq!(
            FieldExtractor::identifier_number("No:01234 5678 9012"),
            Some("1234 5678 9012".to_string())
        );
        // PIN and number run together: the leftmost twelve digits win
        assert_eq!(
            FieldExtractor::identifier_number("Pune 4110011234 5678 9012"),
            Some("1001 1234 5678".to_string())
        );
    }

    #[test]
    fn test_date_of_birth_first_match_wins() {
        assert_eq!(
            FieldExtractor::date_of_birth("DOB: 01/01/1990 Issued 02/02/2020"),
            Some("01/01/1990".to_string())
        );
        assert_eq!(
            FieldExtractor::date_of_birth("99/99/9999"),
            Some("99/99/9999".to_string())
        );
        assert_eq!(FieldExtractor::date_of_birth("Year of Birth: 1990"), None);
    }

    #[test]
    fn test_gender_female_is_not_read_as_male() {
        assert_eq!(FieldExtractor::gender("Gender: Female"), Some(Gender::Female));
        assert_eq!(FieldExtractor::gender("FEMALE"), Some(Gender::Female));
        assert_eq!(FieldExtractor::gender("Male"), Some(Gender::Male));
        assert_eq!(FieldExtractor::gender("/ MALE"), Some(Gender::Male));
        assert_eq!(FieldExtractor::gender("Sex: ?"), None);
    }

    #[test]
    fn test_name_is_line_before_dob() {
        let front = "Government of India\nJohn Smith\nDOB: 01/01/1990\nMale";
        assert_eq!(FieldExtractor::name(front), Some("John Smith".to_string()));
    }

    #[test]
    fn test_name_skips_short_lines() {
        let front = "Government of India\n  RAHUL KUMAR  \n=\nab\n 15/08/1985 \n";
        assert_eq!(FieldExtractor::name(front), Some("Rahul Kumar".to_string()));
    }

    #[test]
    fn test_name_unset_when_dob_first_or_absent() {
        assert_eq!(FieldExtractor::name("01/01/1990\nJohn Smith"), None);
        assert_eq!(FieldExtractor::name("John Smith\nMale"), None);
        assert_eq!(FieldExtractor::name("1234 5678\n01/01/1990"), None);
    }

    #[test]
    fn test_address_stops_at_contact_footer() {
        let back = "Address: 12 MG Road Near Park 560001\nhelp@uidai.gov.in";
        assert_eq!(
            FieldExtractor::address(back),
            Some("12 MG Road Near Park 560001".to_string())
        );
    }

    #[test]
    fn test_address_stops_at_identifier_number() {
        let back = "ADDRESS\nW/O Suresh,\nFlat 2, Lake View\nChennai 600001\n\n1234 5678 9012";
        assert_eq!(
            FieldExtractor::address(back),
            Some("W/O Suresh, Flat 2, Lake View, Chennai 600001".to_string())
        );
    }

    #[test]
    fn test_address_keeps_pin_before_identifier_number() {
        let back = "Address: 12 MG Road Near Park 560001\n1234 5678 9012";
        assert_eq!(
            FieldExtractor::address(back),
            Some("12 MG Road Near Park 560001".to_string())
        );
    }

    #[test]
    fn test_address_stops_at_number_glued_to_other_digits() {
        let back = "Address: 12 MG Road Pune 411001 ID51234 5678 9012";
        assert_eq!(
            FieldExtractor::address(back),
            Some("12 MG Road Pune 411001".to_string())
        );
        assert!(FieldExtractor::address("Address: 12 MG Road Pune 4110011234 5678 9012").is_some());
    }

    #[test]
    fn test_address_requires_label_and_terminator() {
        assert_eq!(FieldExtractor::address("12 MG Road 560001\nhelp@uidai.gov.in"), None);
        assert_eq!(FieldExtractor::address("Address: 12 MG Road 560001"), None);
    }

    #[test]
    fn test_address_span_is_minimal() {
        let back = "Address: first www.uidai.gov.in Address: second help@uidai.gov.in";
        assert_eq!(FieldExtractor::address_span(back), Some("first "));
    }
}
