use crate::commands::shared::{FilterArgs, OutputArgs, RootArgs};
use crate::core::error::CliError;
use crate::core::exit_code::ExitCode;
use crate::core::formatter::{get_formatter, OutputFormat};
use crate::core::paths::display_path;
use crate::debug_log;
use clap::{Args, Subcommand};
use rtok_lib::golden::{check_fixture, discover, Fixture, FixtureFilter};
use rtok_lib::RtokError;
use serde::Serialize;
use std::path::Path;
use tokio::task::JoinSet;

#[derive(Serialize)]
pub struct FixtureView {
    pub name: String,
    pub source: String,
    pub baseline: bool,
}

#[derive(Serialize)]
pub struct CheckView {
    pub name: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct CheckSummaryView {
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CheckView>,
}

#[derive(Debug, Args)]
#[command(about = "Manage golden token fixtures")]
pub struct FixtureCommand {
    #[command(subcommand)]
    pub command: FixtureSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum FixtureSubcommand {
    #[command(about = "List fixtures and whether they have a baseline")]
    List(ListArgs),
    #[command(about = "Tokenize fixtures and compare them with their baselines")]
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub root: RootArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub root: RootArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn discover_fixtures(root: &RootArgs, filter: &FilterArgs) -> Result<Vec<Fixture>, RtokError> {
    let filter = filter
        .filter
        .as_deref()
        .map(FixtureFilter::parse)
        .unwrap_or_else(FixtureFilter::from_env);
    let fixtures = discover(Path::new(&root.source), &filter)?;
    debug_log!(
        "Discovered {} fixture(s) under {}",
        fixtures.len(),
        root.source
    );
    Ok(fixtures)
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = discover_fixtures(&args.root, &args.filter)?;
    let views: Vec<FixtureView> = fixtures
        .iter()
        .map(|fixture| FixtureView {
            name: fixture.name.clone(),
            source: display_path(&fixture.source_path),
            baseline: fixture.exists(),
        })
        .collect();

    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&views, "", "No fixtures found")
    );
    Ok(())
}

/// Fixtures are independent, so each one is checked on its own blocking
/// task. A task only ever writes its own baseline file.
pub async fn execute_check(args: &CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = discover_fixtures(&args.root, &args.filter)?;
    let total = fixtures.len();

    let mut tasks = JoinSet::new();
    for (index, fixture) in fixtures.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let outcome = check_fixture(&fixture);
            (index, fixture, outcome)
        });
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }
    outcomes.sort_by_key(|(index, _, _)| *index);

    let mut failure_codes = Vec::new();
    let mut results = Vec::with_capacity(total);
    for (_, fixture, outcome) in &outcomes {
        match outcome {
            Ok(()) => {
                debug_log!("{} passed", fixture.name);
                results.push(CheckView {
                    name: fixture.name.clone(),
                    status: "ok",
                    message: None,
                });
            }
            Err(err) => {
                failure_codes.push(ExitCode::from(err));
                results.push(CheckView {
                    name: fixture.name.clone(),
                    status: "FAILED",
                    message: Some(err.to_string()),
                });
            }
        }
    }

    let failed = failure_codes.len();
    let summary = CheckSummaryView {
        passed: total - failed,
        failed,
        results,
    };

    match args.output.output {
        OutputFormat::Text => print!("{}", render_check_text(&summary)),
        OutputFormat::Json => println!("{}", get_formatter(&args.output.output).format(&summary)),
    }

    if failed > 0 {
        return Err(Box::new(CliError::ChecksFailed {
            failed,
            total,
            code: ExitCode::combine(failure_codes),
        }));
    }
    Ok(())
}

/// libtest-style report: one status line per fixture, then failure details.
fn render_check_text(summary: &CheckSummaryView) -> String {
    let mut out = String::new();
    for result in &summary.results {
        out.push_str(&format!("fixture {} ... {}\n", result.name, result.status));
    }

    let failures: Vec<&CheckView> = summary
        .results
        .iter()
        .filter(|r| r.message.is_some())
        .collect();
    if !failures.is_empty() {
        out.push_str("\nfailures:\n");
        for failure in failures {
            out.push_str(&format!(
                "\n---- {} ----\n{}\n",
                failure.name,
                failure.message.as_deref().unwrap_or_default()
            ));
        }
    }

    let status = if summary.failed == 0 { "ok" } else { "FAILED" };
    out.push_str(&format!(
        "\nfixture result: {status}. {} passed; {} failed\n",
        summary.passed, summary.failed
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_check_text() {
        let summary = CheckSummaryView {
            passed: 1,
            failed: 1,
            results: vec![
                CheckView {
                    name: "hello".into(),
                    status: "ok",
                    message: None,
                },
                CheckView {
                    name: "broken".into(),
                    status: "FAILED",
                    message: Some("Found garbage tokens in broken".into()),
                },
            ],
        };
        let text = render_check_text(&summary);
        assert!(text.starts_with("fixture hello ... ok\nfixture broken ... FAILED\n"));
        assert!(text.contains("---- broken ----\nFound garbage tokens in broken\n"));
        assert!(text.ends_with("fixture result: FAILED. 1 passed; 1 failed\n"));
    }

    #[test]
    fn test_render_check_text_all_passed() {
        let summary = CheckSummaryView {
            passed: 0,
            failed: 0,
            results: Vec::new(),
        };
        assert_eq!(
            render_check_text(&summary),
            "\nfixture result: ok. 0 passed; 0 failed\n"
        );
    }
}
