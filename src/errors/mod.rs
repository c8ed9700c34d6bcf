pub mod types;
pub mod classification;

pub use types::TestlensError;
pub use classification::ErrorClassification;
