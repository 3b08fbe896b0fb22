//! Employer Resolver CLI
//!
//! Reads a tab-delimited file of `<name>\t<last known employer>` lines,
//! searches a profile source for each person, and writes one report block
//! per record: NOT_FOUND, POSITIVE, NEGATIVE, WEAK, or MULTIPLE.
//!
//! ## Sources
//!
//! - `fixture`: answers from a JSON file (`--fixture`)
//! - `http`: people-search API configured via `PROFILE_SOURCE_*` env vars

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use profile_source::{FixtureProfileSource, HttpProfileSource};
use resolver_core::{
    emit_run_started, init_tracing, AtAnchor, ExtractionMode, ProfileSource, ResolutionDriver,
    ResolverConfig, RunSummary,
};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "employer-resolver")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check last-known employers against a people-search profile source", long_about = None)]
struct Cli {
    /// Tab-delimited input file (<name>\t<employer>)
    #[arg(short, long, env = "RESOLVER_INPUT")]
    input: PathBuf,

    /// Report output file
    #[arg(short, long, env = "RESOLVER_OUTPUT")]
    output: PathBuf,

    /// Where candidate profiles come from
    #[arg(long, value_enum, default_value_t = SourceKind::Fixture)]
    source: SourceKind,

    /// JSON fixture file for `--source fixture`
    #[arg(long, env = "RESOLVER_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Edit distance below which a headline employer counts as a match
    #[arg(long)]
    threshold: Option<usize>,

    /// Trim whitespace around the headline employer before comparing
    #[arg(long)]
    trim_extracted: bool,

    /// Take the employer from the first " at " in a headline instead of the last
    #[arg(long)]
    first_at: bool,

    /// Also write the run summary as JSON to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Fixture,
    Http,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    let outcome = match ResolverConfig::from_env() {
        Ok(base) => run(&cli, base).await,
        Err(e) => Err(anyhow::Error::new(e).context("Invalid resolver configuration")),
    };

    exit_code(outcome)
}

/// Log a failed run once, with its context chain, and map it to the exit status.
fn exit_code(outcome: Result<RunSummary>) -> ExitCode {
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, base: ResolverConfig) -> Result<RunSummary> {
    let config = apply_overrides(cli, base);
    let source = build_source(cli)?;

    emit_run_started(
        &cli.input.display().to_string(),
        &cli.output.display().to_string(),
    );
    info!(
        "Starting employer resolver with input file: {} and output file: {}",
        cli.input.display(),
        cli.output.display()
    );

    let input = File::open(&cli.input)
        .with_context(|| format!("Failed to open input file {:?}", cli.input))?;
    let output = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file {:?}", cli.output))?;
    let mut output = BufWriter::new(output);

    let driver = ResolutionDriver::new(source, config);
    let summary = driver
        .run(BufReader::new(input), &mut output)
        .await
        .context("Resolution run aborted")?;

    info!(
        "Resolved {} of {} records ({} positive, {} negative, {} weak, {} multiple, {} not found)",
        summary.reported(),
        summary.records,
        summary.positive,
        summary.negative,
        summary.weak,
        summary.multiple,
        summary.not_found
    );

    if let Some(path) = &cli.summary_json {
        write_summary(path, &summary)?;
    }

    Ok(summary)
}

/// Command-line flags win over the environment-derived `base`.
fn apply_overrides(cli: &Cli, base: ResolverConfig) -> ResolverConfig {
    let mut config = base;
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }
    if cli.trim_extracted {
        config = config.with_extraction(ExtractionMode::Trimmed);
    }
    if cli.first_at {
        config = config.with_at_anchor(AtAnchor::First);
    }
    config
}

fn build_source(cli: &Cli) -> Result<Arc<dyn ProfileSource>> {
    match cli.source {
        SourceKind::Fixture => {
            let Some(path) = &cli.fixture else {
                bail!("--fixture is required with --source fixture");
            };
            let source = FixtureProfileSource::from_path(path)
                .with_context(|| format!("Failed to load fixture {:?}", path))?;
            Ok(Arc::new(source))
        }
        SourceKind::Http => {
            let source =
                HttpProfileSource::from_env().context("Failed to configure HTTP profile source")?;
            Ok(Arc::new(source))
        }
    }
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let content = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolver_core::SEPARATOR;
    use tempfile::tempdir;
    use tracing_test::traced_test;

    const FIXTURE: &str = r#"[
        {
            "firstName": "Paul",
            "lastName": "Codding",
            "candidates": [
                {"id": "p1", "profileUrl": "https://profiles.example/p1",
                 "firstName": "Paul", "lastName": "Codding",
                 "headline": "Solutions Engineer at Hortonworks"}
            ]
        }
    ]"#;

    fn cli_for(dir: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "employer-resolver".to_string(),
            "--input".to_string(),
            dir.join("input.tsv").display().to_string(),
            "--output".to_string(),
            dir.join("report.txt").display().to_string(),
            "--fixture".to_string(),
            dir.join("fixture.json").display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_requires_input_and_output() {
        assert!(Cli::try_parse_from(["employer-resolver"]).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let dir = tempdir().unwrap();
        let cli = cli_for(
            dir.path(),
            &[
                "--source",
                "http",
                "--threshold",
                "3",
                "--trim-extracted",
                "--first-at",
                "-v",
            ],
        );
        assert_eq!(cli.source, SourceKind::Http);
        assert_eq!(cli.threshold, Some(3));
        assert!(cli.trim_extracted);
        assert!(cli.first_at);
        assert!(cli.verbose);

        let config = apply_overrides(&cli, ResolverConfig::default());
        assert_eq!(config.edit_distance_threshold, 3);
        assert_eq!(config.extraction, ExtractionMode::Trimmed);
        assert_eq!(config.at_anchor, AtAnchor::First);
    }

    #[test]
    fn test_flags_absent_keep_base_config() {
        let dir = tempdir().unwrap();
        let cli = cli_for(dir.path(), &[]);
        let base = ResolverConfig::default()
            .with_threshold(7)
            .with_extraction(ExtractionMode::Trimmed);

        assert_eq!(apply_overrides(&cli, base.clone()), base);
    }

    #[tokio::test]
    async fn test_run_writes_report_and_summary() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("fixture.json"), FIXTURE).unwrap();
        std::fs::write(
            dir.path().join("input.tsv"),
            "Paul Codding\tHortonworks\nMadonna\nJane Doe\tAcme\n",
        )
        .unwrap();
        let summary_path = dir.path().join("summary.json");

        let cli = cli_for(
            dir.path(),
            &["--summary-json", summary_path.to_str().unwrap()],
        );
        let summary = run(&cli, ResolverConfig::default()).await.unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.skipped_names, 1);

        let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("POSITIVE match on current employer:Hortonworks"));
        assert_eq!(lines[2], SEPARATOR);
        // Madonna cannot be split into first/last and leaves a bare separator.
        assert_eq!(lines[3], SEPARATOR);
        assert_eq!(lines[4], "Could not find name: Jane Doe");
        assert_eq!(lines[5], SEPARATOR);

        let written: RunSummary =
            serde_json::from_str(&std::fs::read_to_string(summary_path).unwrap()).unwrap();
        assert_eq!(written, summary);
    }

    #[tokio::test]
    async fn test_missing_fixture_flag_is_an_error() {
        let dir = tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "employer-resolver",
            "--input",
            "in.tsv",
            "--output",
            dir.path().join("out.txt").to_str().unwrap(),
        ])
        .unwrap();
        let err = run(&cli, ResolverConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("--fixture"));
    }

    #[traced_test]
    #[test]
    fn test_failure_is_logged_once_and_exits_nonzero() {
        let err = anyhow::anyhow!("quota exhausted").context("Resolution run aborted");
        assert_eq!(exit_code(Err(err)), ExitCode::FAILURE);
        assert_eq!(exit_code(Ok(RunSummary::default())), ExitCode::SUCCESS);

        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("Resolution run aborted: quota exhausted"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one error line, found {n}")),
            }
        });
    }

    #[tokio::test]
    async fn test_missing_input_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("fixture.json"), "[]").unwrap();
        let cli = cli_for(dir.path(), &[]);
        let err = run(&cli, ResolverConfig::default()).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open input file"));
    }
}
