pub mod completeness;

pub use completeness::CompletenessValidator;
