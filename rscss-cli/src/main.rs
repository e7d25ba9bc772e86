//! RSCSS linter CLI
//!
//! Checks CSS and SCSS files against the RSCSS class naming conventions.
//!
//! Exit status: 0 when every file is clean, 1 when any diagnostic was
//! reported, 2 on a fatal error (unreadable file, bad configuration,
//! unparsable stylesheet).

mod report;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rscss_common::warning::clear_warnings;
use rscss_css::Syntax;
use rscss_lint::{Config, Linter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use report::{FileReport, OutputFormat};

/// RSCSS linter - component, element, variant and helper class names
#[derive(Parser, Debug)]
#[command(name = "rscss")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Lint with the recommended rules
    rscss src/styles/*.scss

    # Lint with a JSON configuration
    rscss --config rscss.json app.css

    # Machine-readable output
    rscss --format json app.css

    # Show the effective configuration
    rscss --print-config
"#)]
struct Cli {
    /// Stylesheets to check
    #[arg(value_name = "FILE", required_unless_present = "print_config")]
    files: Vec<PathBuf>,

    /// JSON configuration file (default: the recommended rules)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Source dialect: css or scss (default: from each file's extension)
    #[arg(long, value_name = "SYNTAX")]
    syntax: Option<Syntax>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// More logging on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            let color = !cli.no_color && io::stderr().is_terminal();
            eprintln!("{} {err:#}", report::error_label(color));
            ExitCode::from(2)
        }
    }
}

/// Lint every file. Returns `true` when no diagnostic was reported.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(true);
    }

    let linter = Linter::from_config(&config).context("invalid configuration")?;
    clear_warnings();

    let mut reports = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let syntax = cli.syntax.unwrap_or_else(|| Syntax::from_path(path));
        debug!(path = %path.display(), %syntax, "linting file");

        let diagnostics = linter
            .lint_source(&source, syntax)
            .with_context(|| format!("failed to lint {}", path.display()))?;
        reports.push(FileReport::new(path, diagnostics));
    }

    let color = !cli.no_color && io::stdout().is_terminal();
    match cli.format {
        OutputFormat::Text => report::print_text(&reports, color),
        OutputFormat::Json => report::print_json(&reports)?,
    }

    Ok(reports.iter().all(|report| report.diagnostics.is_empty()))
}

/// Read the configuration file, or fall back to the recommended rules.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::recommended());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

/// Install the stderr log subscriber.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
