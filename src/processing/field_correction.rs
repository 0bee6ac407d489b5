use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_NAME_CHARS: Regex = Regex::new(r"[^a-zA-Z\s.]").unwrap();
    // "JohnSmith" -> "John Smith"
    static ref LOWER_THEN_CAPITALIZED: Regex = Regex::new(r"([a-z])([A-Z][a-z])").unwrap();
    // "JOHNSmith" -> "JOHN Smith"
    static ref UPPER_RUN_THEN_CAPITALIZED: Regex = Regex::new(r"([A-Z]{2,})([A-Z][a-z])").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s{2,}").unwrap();

    static ref ADDRESS_JUNK: Regex = Regex::new(r"[|=«»;:]").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();
    static ref EMPTY_COMMA: Regex = Regex::new(r",\s*,").unwrap();
    static ref SPACE_BEFORE_COMMA: Regex = Regex::new(r"\s+,").unwrap();
    static ref POSTAL_CODE: Regex = Regex::new(r"\b[0-9]{6}\b").unwrap();

    // Misreads tesseract produces on the back of the card
    static ref NEAR_MISREAD: Regex = Regex::new(r"(?i)\bne(?:\s?[0-9])?\b").unwrap();
    static ref TP_MISREAD: Regex = Regex::new(r"(?i)\bT\s?P\s?").unwrap();
    static ref GARBAGE_PHRASE: Regex = Regex::new(r"(?i)\ba Gin gates\b").unwrap();
}

/// Cleanup rules for the free-text fields (name and address) of a card.
pub struct FieldCorrection;

impl FieldCorrection {
    /// Clean an OCR'd name line and convert it to title case.
    ///
    /// Rules run in a fixed order: drop anything that is not an ASCII letter,
    /// whitespace or a dot, split run-together words, collapse stuttered
    /// characters, collapse whitespace, then title-case.
    pub fn clean_name(raw: &str) -> String {
        let cleaned = NON_NAME_CHARS.replace_all(raw, "");
        let cleaned = LOWER_THEN_CAPITALIZED.replace_all(&cleaned, "${1} ${2}");
        let cleaned = UPPER_RUN_THEN_CAPITALIZED.replace_all(&cleaned, "${1} ${2}");
        let cleaned = Self::collapse_stutter(&cleaned);
        let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");

        Self::title_case(cleaned.trim())
    }

    /// Replace every run of three or more identical characters with a single one.
    /// Runs of two are legitimate ("Anna", "Lee") and are kept.
    pub fn collapse_stutter(text: &str) -> String {
        let mut collapsed = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }
            let keep = if run >= 3 { 1 } else { run };
            collapsed.extend(std::iter::repeat(c).take(keep));
        }

        collapsed
    }

    /// Lowercase everything, then uppercase the first letter of each word.
    /// A word starts after any non-word character, so initials like
    /// "j.k." become "J.K.".
    pub fn title_case(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut at_word_start = true;

        for c in text.to_lowercase().chars() {
            if at_word_start && c.is_alphanumeric() {
                result.extend(c.to_uppercase());
            } else {
                result.push(c);
            }
            at_word_start = !(c.is_alphanumeric() || c == '_');
        }

        result
    }

    /// Turn the captured address span into a single line ending at the PIN code.
    pub fn clean_address(span: &str) -> String {
        let cleaned = ADDRESS_JUNK.replace_all(span, " ");
        let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
        let cleaned = NEWLINES.replace_all(&cleaned, ", ");
        let cleaned = EMPTY_COMMA.replace_all(&cleaned, ",");
        let cleaned = SPACE_BEFORE_COMMA.replace_all(&cleaned, ",");

        let truncated = Self::truncate_after_postal_code(cleaned.trim());
        Self::correct_address_misreads(truncated)
    }

    /// Cut the text right after the first standalone six digit PIN code.
    pub fn truncate_after_postal_code(text: &str) -> &str {
        match POSTAL_CODE.find(text) {
            Some(pin) => text[..pin.end()].trim(),
            None => text,
        }
    }

    pub fn correct_address_misreads(text: &str) -> String {
        let corrected = NEAR_MISREAD.replace_all(text, "Near");
        let corrected = TP_MISREAD.replace_all(&corrected, "TP ");
        let corrected = GARBAGE_PHRASE.replace_all(&corrected, "");
        let corrected = WHITESPACE_RUN.replace_all(&corrected, " ");

        corrected.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_keeps_clean_input() {
        assert_eq!(FieldCorrection::clean_name("John Smith"), "John Smith");
    }

    #[test]
    fn test_clean_name_splits_run_together_words() {
        assert_eq!(FieldCorrection::clean_name("JohnSmith"), "John Smith");
        assert_eq!(FieldCorrection::clean_name("JOHNSmith"), "John Smith");
    }

    #[test]
    fn test_clean_name_strips_ocr_noise() {
        assert_eq!(FieldCorrection::clean_name("| Raaahul  Kumar_ 7"), "Rahul Kumar");
        assert_eq!(FieldCorrection::clean_name("PRIYA   SHARMA"), "Priya Sharma");
        assert_eq!(FieldCorrection::clean_name("@#1"), "");
    }

    #[test]
    fn test_collapse_stutter_keeps_double_letters() {
        assert_eq!(FieldCorrection::collapse_stutter("Annna Leee"), "Ana Le");
        assert_eq!(FieldCorrection::collapse_stutter("Anna Lee"), "Anna Lee");
    }

    #[test]
    fn test_title_case_handles_initials() {
        assert_eq!(FieldCorrection::title_case("j.k. ROWLING"), "J.K. Rowling");
        assert_eq!(FieldCorrection::title_case("mary ann"), "Mary Ann");
    }

    #[test]
    fn test_clean_address_joins_lines() {
        let span = "S/O Ramesh, 12 MG Road\nBengaluru; Karnataka - 560001\nextra junk";
        assert_eq!(
            FieldCorrection::clean_address(span),
            "S/O Ramesh, 12 MG Road, Bengaluru Karnataka - 560001"
        );
    }

    #[test]
    fn test_clean_address_drops_everything_after_pin() {
        let cleaned = FieldCorrection::clean_address("House 4 | Sector 9 = Pune 411001 | 1947 VID");
        assert_eq!(cleaned, "House 4 Sector 9 Pune 411001");
        assert!(cleaned.ends_with("411001"));
    }

    #[test]
    fn test_clean_address_collapses_empty_segments() {
        assert_eq!(
            FieldCorrection::clean_address("Line one\n\n, Line two ,\nCity"),
            "Line one, Line two, City"
        );
    }

    #[test]
    fn test_truncate_ignores_longer_digit_runs() {
        assert_eq!(
            FieldCorrection::truncate_after_postal_code("Plot 1234567 Delhi 110001 India"),
            "Plot 1234567 Delhi 110001"
        );
        assert_eq!(FieldCorrection::truncate_after_postal_code("No pin here"), "No pin here");
    }

    #[test]
    fn test_address_misread_corrections() {
        assert_eq!(
            FieldCorrection::correct_address_misreads("House 5 ne Temple"),
            "House 5 Near Temple"
        );
        assert_eq!(
            FieldCorrection::correct_address_misreads("ne2 Bus Stand"),
            "Near Bus Stand"
        );
        assert_eq!(
            FieldCorrection::correct_address_misreads("T P Nagar Road"),
            "TP Nagar Road"
        );
        assert_eq!(
            FieldCorrection::correct_address_misreads("Main Street a Gin gates Salem"),
            "Main Street Salem"
        );
    }

    #[test]
    fn test_misread_corrections_leave_real_words_alone() {
        assert_eq!(
            FieldCorrection::correct_address_misreads("Near New Market"),
            "Near New Market"
        );
    }
}
