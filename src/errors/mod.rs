pub mod types;
pub mod classification;

pub use types::VelofixError;
pub use classification::ErrorClassification;
