pub mod fixture;
pub mod shared;
pub mod tokenize;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Tokenize(tokenize::TokenizeArgs),
    Fixture(fixture::FixtureCommand),
}
