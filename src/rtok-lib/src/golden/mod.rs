pub mod discover;
pub mod fixture;
pub mod harness;

pub use discover::{discover, FixtureFilter, FILTER_ENV_VAR};
pub use fixture::{Fixture, EXPECTED_EXTENSION, SOURCE_EXTENSION};
pub use harness::{check_fixture, check_result};
