use anyhow::{Context, Result};
use changesync::{ChangesyncConfig, CheckMode, GitOps, Reconciler, Report};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "changesync")]
#[command(version, about = "regenerate and validate a changelog from git history", long_about = None)]
struct Cli {
    /// check only the last commit (for shallow clones)
    #[arg(long)]
    shallow: bool,

    /// exit with code 1 on validation failure
    #[arg(long)]
    check: bool,

    /// path inside the repository (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// configuration file (defaults to changesync.toml in the repository root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
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

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) if report.is_failure() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<changesync::Error>() {
                Some(err) if err.is_history_error() => {
                    eprintln!("error running git command: {:#}", e)
                }
                _ => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let git = GitOps::open(&cli.path).context("failed to open git repository")?;
    let root = git.root().to_path_buf();

    let config = match &cli.config {
        Some(path) => {
            ChangesyncConfig::load_from_file(path).context("failed to load configuration")?
        }
        None => ChangesyncConfig::load_or_default(&root),
    };

    let mode = CheckMode::from_flags(cli.shallow, cli.check);
    let report = Reconciler::new(git, root, config).run(mode)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => report.display(),
    }

    Ok(report)
}
