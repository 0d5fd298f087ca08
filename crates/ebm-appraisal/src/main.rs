//! Evidence appraisal CLI - entry point.
//!
//! Thin adapter over the engine: reads citation and answer-sheet JSON
//! files, runs classification/scoring/assembly, and writes markdown or
//! JSON output.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ebm_appraisal::engine::{appraise_all, assemble};
use ebm_appraisal::error::{CliError, CliResult};
use ebm_appraisal::formatters;
use ebm_appraisal::models::{AnswerSheet, Citation, ResponseFormat};

#[derive(Parser, Debug)]
#[command(name = "ebm-appraisal")]
#[command(about = "Evidence-pyramid classification and JBI critical appraisal")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify citations onto the evidence pyramid and sort by level
    Classify {
        /// JSON file with citation records
        #[arg(long)]
        articles: PathBuf,

        /// Write the classified entries as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Keep only levels in an inclusive range, e.g. "1-2"
        #[arg(long)]
        filter_level: Option<String>,

        /// Maximum number of entries to keep
        #[arg(long, default_value_t = 100)]
        max: usize,

        /// Print the pyramid summary to stdout
        #[arg(long)]
        summary: bool,

        /// Print the evidence table to stdout
        #[arg(long)]
        table: bool,
    },

    /// Classify and score citations against the JBI checklists
    Appraise {
        /// JSON file with citation records
        #[arg(long)]
        articles: PathBuf,

        /// JSON answer sheet with per-citation criterion answers
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Derive answers from title/abstract keywords when no sheet
        /// entry exists for a citation
        #[arg(long)]
        auto: bool,

        /// Write the appraised entries as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the quality summary table to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Run the full pipeline and render a report
    Report {
        /// JSON file with citation records
        #[arg(long)]
        articles: PathBuf,

        /// JSON answer sheet with per-citation criterion answers
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Derive answers from title/abstract keywords when no sheet
        /// entry exists for a citation
        #[arg(long)]
        auto: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: ResponseFormat,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

fn load_citations(path: &Path) -> CliResult<Vec<Citation>> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    serde_json::from_str(&raw).map_err(|e| CliError::parse(path, e))
}

fn load_sheet(path: Option<&Path>) -> CliResult<AnswerSheet> {
    let Some(path) = path else { return Ok(Vec::new()) };
    let raw = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    serde_json::from_str(&raw).map_err(|e| CliError::parse(path, e))
}

/// Parse a "MIN-MAX" level range with both bounds in 1-6.
fn parse_level_range(input: &str) -> CliResult<(u8, u8)> {
    let invalid = || CliError::InvalidLevelRange { input: input.to_string() };

    let (min, max) = input.split_once('-').ok_or_else(invalid)?;
    let min: u8 = min.trim().parse().map_err(|_| invalid())?;
    let max: u8 = max.trim().parse().map_err(|_| invalid())?;
    if !(1..=6).contains(&min) || !(1..=6).contains(&max) || min > max {
        return Err(invalid());
    }
    Ok((min, max))
}

fn write_or_print(content: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            fs::write(path, content).map_err(|e| CliError::write(path, e))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Classify { articles, output, filter_level, max, summary, table } => {
            let citations = load_citations(&articles)?;
            tracing::info!(count = citations.len(), "classifying citations");

            // Assemble once for the ordering, then filter/truncate and
            // reassemble so the level counts match what is kept.
            let mut entries = assemble(appraise_all(citations, &[], false)).entries;

            if let Some(range) = filter_level.as_deref() {
                let (min, max_rank) = parse_level_range(range)?;
                entries.retain(|e| (min..=max_rank).contains(&e.level().rank()));
            }
            entries.truncate(max);
            let report = assemble(entries);

            if let Some(path) = output.as_deref() {
                let json = serde_json::to_string_pretty(&report.entries)
                    .map_err(|e| CliError::parse(path, e))?;
                write_or_print(&json, Some(path))?;
            }
            if summary {
                println!("{}", formatters::format_summary(&report));
            }
            if table {
                println!("{}", formatters::format_evidence_table(&report, false));
            }
            Ok(())
        }

        Command::Appraise { articles, answers, auto, output, summary } => {
            let citations = load_citations(&articles)?;
            let sheet = load_sheet(answers.as_deref())?;
            tracing::info!(
                count = citations.len(),
                sheet_entries = sheet.len(),
                auto,
                "appraising citations"
            );

            let report = assemble(appraise_all(citations, &sheet, auto));

            if let Some(path) = output.as_deref() {
                let json = serde_json::to_string_pretty(&report.entries)
                    .map_err(|e| CliError::parse(path, e))?;
                write_or_print(&json, Some(path))?;
            }
            if summary {
                println!("{}", formatters::format_appraisal_table(&report));
            }
            Ok(())
        }

        Command::Report { articles, answers, auto, format, output } => {
            let citations = load_citations(&articles)?;
            let sheet = load_sheet(answers.as_deref())?;
            tracing::info!(count = citations.len(), ?format, "building report");

            let report = assemble(appraise_all(citations, &sheet, auto));

            let rendered = if format.is_markdown() {
                formatters::format_report(&report)
            } else {
                serde_json::to_string_pretty(&formatters::report_json(&report))
                    .map_err(|e| CliError::parse("<report>", e))?
            };
            write_or_print(&rendered, output.as_deref())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting ebm-appraisal");

    run(cli)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_range() {
        assert_eq!(parse_level_range("1-2").unwrap(), (1, 2));
        assert_eq!(parse_level_range("3-3").unwrap(), (3, 3));
        assert!(parse_level_range("2-1").is_err());
        assert!(parse_level_range("0-2").is_err());
        assert!(parse_level_range("1-7").is_err());
        assert!(parse_level_range("one-two").is_err());
        assert!(parse_level_range("12").is_err());
    }

    #[test]
    fn test_cli_parses_report_command() {
        let cli = Cli::try_parse_from([
            "ebm-appraisal",
            "report",
            "--articles",
            "articles.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Report { format: ResponseFormat::Json, .. }
        ));
    }
}
