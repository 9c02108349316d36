pub mod classification;
pub mod identity;

pub use classification::ClassificationResult;
pub use identity::Identity;
