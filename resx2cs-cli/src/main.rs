use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use resx2cs::{FileConverter, Logger};
use resx2cs_cli::{Config, ConsoleLogger};
use tracing_subscriber::EnvFilter;

/// Converts `.resx` files in a directory tree into `.Designer.cs` files.
#[derive(Parser, Debug)]
#[command(name = "resx2cs", author, version, about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Directory to search for `.resx` files. Defaults to the current directory
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Directory receiving all generated files
    #[arg(short, long, value_name = "DIRECTORY")]
    out_dir: Option<PathBuf>,

    /// Namespace of the generated classes instead of the project-derived one
    #[arg(short, long)]
    namespace: Option<String>,

    /// Generate `internal` classes instead of `public` ones
    #[arg(short, long)]
    internal_access_modifier: bool,

    /// TOML file with default settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("RESX2CS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let logger = ConsoleLogger::new();
    let cli = Config {
        input_dir: args.directory,
        out_dir: args.out_dir,
        namespace: args.namespace,
        internal_access_modifier: args.internal_access_modifier,
    };
    let config = match args.config.as_deref() {
        Some(path) => match Config::load(path) {
            Ok(file) => cli.merge(file),
            Err(e) => {
                logger.error(format_args!("{}", e));
                return ExitCode::FAILURE;
            }
        },
        None => cli,
    };

    let converter = FileConverter::new(logger);
    if converter.convert(config.input_dir(), &config.batch_options()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
