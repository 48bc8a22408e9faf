pub mod keywords;
pub mod token;
pub mod tokenization_result;
pub mod tokenize;

pub use token::{Token, TokenType};
pub use tokenization_result::{mismatch_report, TokenizationResult};
pub use tokenize::tokenize;
