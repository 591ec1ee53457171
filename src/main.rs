// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod caption_normalizer;
mod chunker;
mod errors;
mod file_utils;
mod knowledge_export;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process downloaded caption files into transcripts and chunks (default command)
    Process(ProcessArgs),

    /// Generate shell completions for vttknow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// Input directory containing .vtt caption files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: PathBuf,

    /// Output directory for documents and JSONL exports
    #[arg(short, long, default_value = "downloads")]
    output_dir: PathBuf,

    /// Target maximum chunk length in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long)]
    overlap: Option<usize>,

    /// Line width for transcript reflow
    #[arg(long)]
    wrap_width: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// vttknow - Caption streams to knowledge
///
/// Turns directories of downloaded WebVTT caption files into clean
/// transcripts, per-video text documents and JSONL chunk exports for
/// retrieval pipelines.
#[derive(Parser, Debug)]
#[command(name = "vttknow")]
#[command(version = "0.1.0")]
#[command(about = "Caption stream cleaning and chunking tool")]
#[command(long_about = "vttknow cleans auto-generated caption streams and splits the resulting \
transcripts into overlapping chunks for retrieval and embedding pipelines.

EXAMPLES:
    vttknow downloads/temp_channel          # Process with default config
    vttknow -o knowledge downloads/raw      # Write exports to ./knowledge
    vttknow --chunk-size 800 --overlap 80 downloads/raw
    vttknow --log-level debug downloads/raw
    vttknow completions bash > vttknow.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, built-in
    defaults are used (chunk size 1000, overlap 100, wrap width 100).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input directory containing .vtt caption files
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Output directory for documents and JSONL exports
    #[arg(short, long, default_value = "downloads")]
    output_dir: PathBuf,

    /// Target maximum chunk length in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long)]
    overlap: Option<usize>,

    /// Line width for transcript reflow
    #[arg(long)]
    wrap_width: Option<usize>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The global filter can be raised after the config is loaded
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vttknow", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Process(args)) => run_process(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_dir = cli.input_dir.ok_or_else(|| {
                anyhow!("INPUT_DIR is required when no subcommand is specified")
            })?;

            let process_args = ProcessArgs {
                input_dir,
                output_dir: cli.output_dir,
                chunk_size: cli.chunk_size,
                overlap: cli.overlap,
                wrap_width: cli.wrap_width,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_process(process_args)
        }
    }
}

/// Run the processing pipeline with CLI overrides applied on top of the
/// configuration file.
fn run_process(args: ProcessArgs) -> Result<()> {
    let mut config = if file_utils::FileManager::file_exists(&args.config_path) {
        Config::from_file(&args.config_path)?
    } else {
        Config::default()
    };

    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(overlap) = args.overlap {
        config.overlap = overlap;
    }
    if let Some(wrap_width) = args.wrap_width {
        config.wrap_width = wrap_width;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level.into();
    }
    config.validate()?;

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let report = controller.run(&args.input_dir, &args.output_dir)?;

    info!(
        "Processed {} transcripts ({} skipped)",
        report.processed, report.skipped
    );
    Ok(())
}
