pub mod engine;
pub mod token;


pub use engine::{classify, concat_string, ClassifyError};
pub use token::{is_alphabetic, is_numeric, TokenKind};
