mod debug;
mod generate;

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use sheetstrings::{Error, Platform, sources::source_for};
use sheetstrings_cli::{Config, RuntimeArgs};
use tracing_subscriber::EnvFilter;

use crate::{debug::run_debug_command, generate::run_generate_command};

/// Generate Localizable.strings or strings.xml files from a translation spreadsheet.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or http(s) URL of the tab-separated sheet export
    source: String,

    /// `android` for strings.xml; anything else generates iOS files
    platform: Option<String>,

    /// Directory the generated files are written under [default: output]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Language whose keys feed LocalizableConstants.swift [default: first column]
    #[arg(long)]
    reference_language: Option<String>,

    /// Escape cell text for the target format instead of inserting it verbatim
    #[arg(long)]
    escape: bool,

    /// Rows are separated by LF instead of the CRLF of spreadsheet exports
    #[arg(long)]
    lf: bool,

    /// Render everything and list the paths, but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Print the parsed sheet as JSON instead of generating files
    #[arg(long)]
    debug: bool,

    /// Configuration file [default: ./sheetstrings.toml when present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn runtime_args(&self) -> RuntimeArgs {
        RuntimeArgs {
            // The positional platform is lenient: anything but `android` is iOS.
            platform: self
                .platform
                .as_deref()
                .map(|p| p.parse::<Platform>().unwrap_or_default()),
            output_dir: self.output_dir.clone(),
            reference_language: self.reference_language.clone(),
            escape: self.escape.then_some(true),
            row_delimiter: self.lf.then(|| "\n".to_string()),
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let cwd = std::env::current_dir()?;
    let settings = Config::discover(args.config.as_deref(), &cwd)?.merge(args.runtime_args())?;
    let pipeline = settings.pipeline();
    let source = source_for(&args.source);

    if args.debug {
        run_debug_command(&*source, &pipeline)
    } else {
        run_generate_command(&*source, &pipeline, args.dry_run)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn spinner() -> ProgressBar {
    let progress_bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {wide_msg}") {
        progress_bar.set_style(style);
    }
    progress_bar
}
