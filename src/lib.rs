pub mod card_reader;
pub mod models;
pub mod processing;
pub mod utils;
pub mod validation;

pub use card_reader::CardReader;
pub use processing::{extract, extract_fields, extract_recognized, extract_with_policy};
