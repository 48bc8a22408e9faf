use clap::{CommandFactory, Parser};

mod commands;
mod core;

use commands::fixture::FixtureSubcommand;
use commands::Commands;
use core::exit_code::ExitCode;
use core::logger::Logger;

#[derive(Parser)]
#[command(name = "rtok")]
#[command(
    about = "A Rust source tokenizer with golden-file token checks. Defaults to 'tokenize' if no subcommand is provided."
)]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[command(name = "rtok")]
struct DefaultArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,
    #[command(flatten)]
    tokenize_args: commands::tokenize::TokenizeArgs,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let is_subcommand =
        args.len() > 1 && (args[1] == "tokenize" || args[1] == "fixture" || args[1] == "help");

    if is_subcommand {
        let args = Args::parse();
        Logger::init(args.debug);
        return match args.command {
            Some(Commands::Tokenize(tokenize_args)) => {
                commands::tokenize::execute(&tokenize_args)
            }
            Some(Commands::Fixture(fixture_command)) => match fixture_command.command {
                FixtureSubcommand::List(list_args) => commands::fixture::execute_list(&list_args),
                FixtureSubcommand::Check(check_args) => {
                    commands::fixture::execute_check(&check_args).await
                }
            },
            None => Ok(()),
        };
    }

    if args.len() == 1 {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    match Args::try_parse() {
        Err(e)
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            e.print()?;
            Ok(())
        }
        _ => {
            let default_args = DefaultArgs::parse();
            Logger::init(default_args.debug);
            commands::tokenize::execute(&default_args.tokenize_args)
        }
    }
}
