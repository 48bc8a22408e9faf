pub mod error;
pub mod golden;
pub mod syntax;

pub use error::RtokError;
pub use golden::{check_fixture, discover, Fixture, FixtureFilter};
pub use syntax::{tokenize, Token, TokenType, TokenizationResult};
