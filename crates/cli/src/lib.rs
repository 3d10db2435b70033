//! CLI for the IREE benchmark dashboard uploader.
//!
//! Meant to run from CI after the benchmark pipeline:
//!
//! ```text
//! export IREE_DASHBOARD_URL=...
//! export IREE_DASHBOARD_API_TOKEN=...
//! upload-benchmarks /path/to/benchmark/results.json [more.json ...]
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use iree_dashboard_adapters::{DashboardConfig, GitAdapter, HttpDashboardAdapter};
use iree_dashboard_benchmarks::io;
use iree_dashboard_core::{DashboardSync, PostOptions, SyncReport};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upload benchmark results to the IREE benchmark dashboard.
#[derive(Parser, Debug)]
#[command(name = "upload-benchmarks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON file containing benchmark results.
    #[arg(
        value_name = "BENCHMARK_JSON_FILE",
        required = true,
        num_args = 1..,
        value_parser = existing_file
    )]
    pub benchmark_files: Vec<PathBuf>,

    /// Print the payloads instead of posting to the dashboard.
    #[arg(long)]
    pub dry_run: bool,

    /// Print internal information during execution.
    #[arg(long)]
    pub verbose: bool,

    /// Git checkout used to resolve the benchmarked commit.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo_dir: PathBuf,
}

fn existing_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("{} is not an existing file", path.display()))
    }
}

fn init_tracing(verbose: bool) {
    let directives = if verbose {
        "warn,iree_dashboard_core=debug,iree_dashboard_adapters=debug,iree_dashboard_cli=debug"
    } else {
        "warn,iree_dashboard_core=info,iree_dashboard_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Upload the results named on the command line.
pub fn execute(cli: &Cli) -> anyhow::Result<SyncReport> {
    let results =
        io::read_and_merge(&cli.benchmark_files).context("Failed to load benchmark results")?;
    info!(
        files = cli.benchmark_files.len(),
        benchmarks = results.benchmarks.len(),
        commit = %results.commit,
        "loaded benchmark results"
    );

    // A dry run never sends, so it never needs dashboard credentials.
    let config = if cli.dry_run {
        DashboardConfig::default()
    } else {
        DashboardConfig::from_env()
    };
    let transport = HttpDashboardAdapter::new(config)?;
    let git = GitAdapter::new(&cli.repo_dir);
    let options = PostOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    let report = DashboardSync::new(&git, &transport, options)
        .run(&results)
        .with_context(|| format!("Failed to upload results for commit {}", results.commit))?;
    Ok(report)
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if any step of the upload fails.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.dry_run {
        // Best effort: a missing .env file is normal in CI.
        let _ = dotenvy::dotenv();
    }

    let report = execute(&cli)?;
    println!(
        "{} {} series for build {} ({})",
        if cli.dry_run { "Composed" } else { "Uploaded" },
        report.series.len(),
        report.build_id,
        report.commit_hash
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::ffi::OsStr;

    #[test]
    fn test_requires_at_least_one_file() {
        let err = Cli::try_parse_from(["upload-benchmarks", "--dry-run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rejects_missing_file_eagerly() {
        let err =
            Cli::try_parse_from(["upload-benchmarks", "/nonexistent/results.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parses_flags_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        std::fs::write(&first, "{}").unwrap();
        std::fs::write(&second, "{}").unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("upload-benchmarks"),
            first.as_os_str(),
            second.as_os_str(),
            OsStr::new("--dry-run"),
            OsStr::new("--verbose"),
        ])
        .unwrap();
        assert_eq!(cli.benchmark_files, vec![first, second]);
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.repo_dir, PathBuf::from("."));
    }

    #[test]
    fn test_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Cli::try_parse_from([OsStr::new("upload-benchmarks"), dir.path().as_os_str()])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
