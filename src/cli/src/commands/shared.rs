use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct RootArgs {
    #[arg(
        short = 's',
        long = "source",
        default_value = ".",
        help = "Directory containing the .rs fixtures",
        value_parser = validators::validate_path_exists
    )]
    pub source: String,
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "NAME[,NAME...]",
        help = "Only use the named fixtures",
        value_parser = validators::validate_filter
    )]
    pub filter: Option<String>,
}
