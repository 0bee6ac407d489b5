pub mod error;

pub use error::{CardError, RecognitionError, ValidationFailure};
