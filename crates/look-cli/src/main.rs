//! look - compile color-adjustment looks into 64³ .cube LUTs

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "look")]
#[command(author, version, about = "Compile color-adjustment looks into .cube LUTs")]
#[command(long_about = "
Turns a JSON or YAML document of slider adjustments into a 64x64x64 .cube
3D LUT usable by any grading or editing tool.

Examples:
  look compile warm.json                    # writes warm.cube
  look compile warm.yaml -o out.cube -t Warm
  look validate *.json                      # list unsupported fields
  look sample warm.json --rgb 0.5 0.4 0.3   # direct vs LUT result
  look batch 'looks/*.json' -o luts/
  look stages                               # print stage order
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an adjustment document into a .cube LUT
    #[command(visible_alias = "c")]
    Compile(CompileArgs),

    /// Check adjustment documents for unsupported fields
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),

    /// Compile every document matching a glob pattern
    Batch(BatchArgs),

    /// Transform one color directly and through the compiled LUT
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Print the pipeline stage order
    Stages,
}

/// Arguments for the `compile` command.
#[derive(Args)]
struct CompileArgs {
    /// Adjustment document (.json, .yaml, .yml)
    input: PathBuf,

    /// Output .cube path ("-" for stdout; default: input with .cube extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// LUT title (default: input file stem)
    #[arg(short, long)]
    title: Option<String>,

    /// Compile even if the document has unsupported fields
    #[arg(long)]
    allow_unsupported: bool,

    /// Evaluate the grid on a single thread
    #[arg(long)]
    sequential: bool,
}

/// Arguments for the `validate` command.
#[derive(Args)]
struct ValidateArgs {
    /// Adjustment document(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Arguments for the `batch` command.
#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Compile documents with unsupported fields instead of failing them
    #[arg(long)]
    allow_unsupported: bool,
}

/// Arguments for the `sample` command.
#[derive(Args)]
struct SampleArgs {
    /// Adjustment document
    input: PathBuf,

    /// Input color as three floats
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = [0.5, 0.5, 0.5])]
    rgb: Vec<f64>,

    /// Print the unclamped value after every active stage
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Compile(args) => commands::compile::run(args, cli.verbose),
        Commands::Validate(args) => commands::validate::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Stages => commands::stages::run(cli.verbose),
    }
}

/// Installs the stderr subscriber and, if requested, a file mirror.
///
/// `RUST_LOG` wins over `-v`. The returned guard flushes the file writer on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("Failed to install logger")?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install logger")?;
    Ok(Some(guard))
}
