use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use metacheck::{MetacheckConfig, MetadataChecker};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "metacheck")]
#[command(version, about = "verify consistent version/etc strings in a project", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    path: PathBuf,

    /// configuration file (defaults to <path>/metacheck.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// verify identity, changelog entry and pinned dependencies agree
    CheckVersion,

    /// show the metadata the checks read
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let checker = build_checker(&cli.path, cli.config.as_deref())?;

    match cli.command {
        Commands::CheckVersion => handle_check_version(&checker, &cli.format)?,
        Commands::Show => handle_show(&checker, &cli.format)?,
    }

    Ok(())
}

fn build_checker(root: &Path, config_path: Option<&Path>) -> Result<MetadataChecker> {
    let config = match config_path {
        Some(path) => MetacheckConfig::load_from_file(path),
        None => MetacheckConfig::load_from_root(root),
    }
    .context("failed to load configuration")?;

    tracing::debug!(root = %root.display(), "configuration loaded");
    Ok(MetadataChecker::from_config(root, &config))
}

fn handle_check_version(checker: &MetadataChecker, format: &OutputFormat) -> Result<()> {
    let outcome = checker.run();

    if let OutputFormat::Json = format {
        let output = match &outcome {
            Ok(()) => serde_json::json!({
                "passed": true,
                "version": checker.expected().version,
            }),
            Err(e) => serde_json::json!({
                "passed": false,
                "version": checker.expected().version,
                "check": e.check(),
                "message": e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    // the error message is the single-line diagnostic, exit status is non-zero
    outcome.map_err(anyhow::Error::from)
}

fn handle_show(checker: &MetadataChecker, format: &OutputFormat) -> Result<()> {
    let report = checker.report();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if !report.expected.name.is_empty() {
                println!("project: {} {}", report.expected.name, report.expected.version);
                println!();
            }
            report.display_identity();
            report.display_changelog();
            report.display_pinned();
        }
    }

    Ok(())
}
