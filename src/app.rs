//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves configuration (flags, then `.env` / environment)
//! - runs ingest + selection
//! - prints the result and writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, GenerateArgs, SelectArgs};
use crate::data::{SynthOptions, default_sizes, generate_series};
use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Environment variable enabling parallel scoring (`1`, `true`, `yes`, `on`).
pub const ENV_PARALLEL: &str = "BIGO_PARALLEL";
/// Environment variable with the minimum sample count.
pub const ENV_MIN_SAMPLES: &str = "BIGO_MIN_SAMPLES";

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    // `bigo` and `bigo -i FILE` behave like `bigo select ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Select(args) => handle_select(args, OutputMode::NameOnly),
        Command::Rank(args) => handle_select(args, OutputMode::Rankings),
        Command::Models => {
            print!("{}", crate::report::format_catalog());
            Ok(())
        }
        Command::Generate(args) => handle_generate(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    NameOnly,
    Rankings,
}

fn handle_select(args: SelectArgs, mode: OutputMode) -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = fit_config_from_args(&args, |key| std::env::var(key).ok())?;
    let run = pipeline::run_select(args.input.as_deref(), &config)?;

    match mode {
        OutputMode::NameOnly => println!("{}", run.selection.best.name()),
        OutputMode::Rankings => print!(
            "{}",
            crate::report::format_rankings(&run.selection, run.ingest.stats.as_ref())
        ),
    }

    if let Some(path) = &args.export {
        crate::io::export::write_scores_json(path, &run.selection, run.ingest.samples.len())?;
    }

    Ok(())
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let sizes = args.sizes.clone().unwrap_or_else(|| default_sizes(args.model));
    let opts = SynthOptions {
        scale: args.scale,
        noise: args.noise,
        seed: args.seed,
    };
    let samples = generate_series(args.model, &sizes, &opts)?;
    tracing::info!("{}", crate::report::format_generated_note(args.model, samples.len()));
    print!("{}", crate::report::format_series(&samples));
    Ok(())
}

/// Build the run configuration from flags, falling back to environment values.
///
/// `env` is the variable lookup (injected so tests do not touch the process
/// environment).
pub fn fit_config_from_args(
    args: &SelectArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<FitConfig, AppError> {
    let parallel = args.parallel || env_flag(ENV_PARALLEL, env(ENV_PARALLEL))?;

    let min_samples = match args.min_samples {
        Some(k) => k,
        None => match env(ENV_MIN_SAMPLES) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::config(format!("Invalid {ENV_MIN_SAMPLES}='{raw}' (expected a positive integer)."))
            })?,
            None => FitConfig::default().min_samples,
        },
    };
    if min_samples == 0 {
        return Err(AppError::config("Minimum sample count must be >= 1."));
    }

    Ok(FitConfig {
        parallel,
        min_samples,
    })
}

fn env_flag(key: &str, value: Option<String>) -> Result<bool, AppError> {
    let Some(raw) = value else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(AppError::config(format!("Invalid {key}='{raw}' (expected true/false)."))),
    }
}

/// Logs go to stderr so stdout carries only the selected name.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Rewrite argv so `bigo` defaults to `bigo select`.
///
/// Rules:
/// - `bigo`                      -> `bigo select`
/// - `bigo -i FILE ...`          -> `bigo select -i FILE ...`
/// - `bigo --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("select".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "select" | "rank" | "models" | "generate");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "select".to_string());
        return argv;
    }

    argv
}
