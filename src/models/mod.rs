pub mod data;
pub mod response;
pub mod rules;

pub use data::*;
pub use response::ScanResponse;
pub use rules::ValidationPolicy;
