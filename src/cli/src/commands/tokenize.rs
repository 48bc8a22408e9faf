use crate::commands::shared::OutputArgs;
use crate::commands::validators;
use crate::core::formatter::{get_formatter, OutputFormat};
use crate::core::logger::Logger;
use crate::debug_log;
use clap::Args;
use rtok_lib::{tokenize, Fixture, Token};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct TokenView {
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: String,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unterminated: bool,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            token_type: token.token_type.to_string(),
            value: token.value.clone(),
            start: token.span.start,
            end: token.span.end,
            unterminated: token.unterminated,
        }
    }
}

#[derive(Debug, Args)]
#[command(about = "Tokenize a Rust source file")]
pub struct TokenizeArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to the .rs file",
        value_parser = validators::validate_file
    )]
    pub source: String,

    #[arg(
        long = "baseline",
        help = "Print the tokens in baseline (.tokens) form",
        conflicts_with = "output"
    )]
    pub baseline: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &TokenizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = Fixture::from_path(Path::new(&args.source));
    let source = fixture.read_source()?;
    let result = tokenize(&source);
    debug_log!(
        "Tokenized {} bytes of {} into {} tokens",
        source.len(),
        args.source,
        result.tokens.len()
    );

    let garbage = result.garbage_tokens();
    if !garbage.is_empty() {
        Logger::warn(&format!(
            "{} garbage or unterminated token(s) in {}",
            garbage.len(),
            args.source
        ));
    }

    if args.baseline {
        print!("{}", result.serialize());
        return Ok(());
    }

    match args.output.output {
        OutputFormat::Text => {
            for token in &result.tokens {
                println!("{token}");
            }
        }
        OutputFormat::Json => {
            let views: Vec<TokenView> = result.tokens.iter().map(TokenView::from).collect();
            print!(
                "{}",
                get_formatter(&args.output.output).format_list(&views, "", "")
            );
        }
    }

    Ok(())
}
