use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use covi_core::source::{Category, project_data_folder};
use covi_core::{ConvertError, ConvertOptions, Mode, PressureFormat, SourceError};
use log::info;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("COVI_BUILD_COMMIT"),
    ", ",
    env!("COVI_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "covi")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Convert .covi pressure/force recordings to CSV or TXT.",
    long_about = None,
    allow_negative_numbers = true,
    after_help = "Examples:\n  covi 0 session ./recordings\n  covi 1 session ./recordings --format txt --digits 3\n  covi 2 session ./project 1 --summary"
)]
struct Cli {
    /// 0 = force, 1 = pressure, anything else = force-pressure containers
    mode: i64,

    /// Output prefix, e.g. `out/session` -> `out/session_force.csv`
    prefix: String,

    /// Folder holding the .covi files
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// 1 = FOLDER is a project directory; read FOLDER/Robots/Data/Data/Data
    project_layout: Option<i64>,

    /// Decimal digits for pressure values
    #[arg(long, default_value_t = covi_core::DEFAULT_DIGITS)]
    digits: usize,

    /// Pressure output format
    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    format: FormatArg,

    /// Explicit file ranking, one value per matched file in listing order
    #[arg(long, value_delimiter = ',')]
    order: Option<Vec<i64>>,

    /// Print a JSON conversion summary to stdout
    #[arg(long)]
    summary: bool,

    /// Pretty-print the JSON summary
    #[arg(long, requires = "summary")]
    pretty: bool,

    /// Only log warnings and errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log decoding details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Txt,
}

impl From<FormatArg> for PressureFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => PressureFormat::Csv,
            FormatArg::Txt => PressureFormat::Txt,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };
    init_logging(cli.quiet, cli.verbose);

    match cmd_convert(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        let hint = match &err {
            ConvertError::NoInputs { .. } => Some(
                "check the folder, or pass 1 after it to read <folder>/Robots/Data/Data/Data"
                    .to_string(),
            ),
            ConvertError::Decode { .. } => {
                Some("the file may be truncated or of a different measurement kind".to_string())
            }
            ConvertError::Source(SourceError::OrderMismatch { .. }) => {
                Some("pass one --order value per matched file".to_string())
            }
            ConvertError::Source(_) | ConvertError::Export { .. } => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

fn cmd_convert(cli: Cli) -> Result<(), CliError> {
    let mode = Mode::from_selector(cli.mode);
    let folder = resolve_folder(&cli.folder, cli.project_layout);
    validate_folder(&folder)?;
    prepare_output_dir(&cli.prefix)?;

    let options = ConvertOptions {
        digits: cli.digits,
        pressure_format: cli.format.into(),
        order: cli.order,
    };
    info!(
        "converting {} in {}",
        category_label(mode),
        folder.display()
    );
    let summary = covi_core::convert(mode, &folder, &cli.prefix, &options)?;

    if cli.summary {
        let json = summary
            .to_json(cli.pretty)
            .context("JSON serialization failed")?;
        println!("{}", json);
    }
    for output in &summary.outputs {
        info!("OK: written -> {}", output);
    }
    Ok(())
}

fn resolve_folder(folder: &Path, project_layout: Option<i64>) -> PathBuf {
    if project_layout == Some(1) {
        project_data_folder(folder)
    } else {
        folder.to_path_buf()
    }
}

fn validate_folder(folder: &Path) -> Result<(), CliError> {
    if !folder.is_dir() {
        return Err(CliError::new(
            format!("input folder not found: {}", folder.display()),
            Some("pass the folder holding the .covi files".to_string()),
        ));
    }
    Ok(())
}

fn prepare_output_dir(prefix: &str) -> Result<(), CliError> {
    if let Some(parent) = Path::new(prefix).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

fn category_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Force => Category::Force.pattern(),
        Mode::Pressure => Category::Pressure.pattern(),
        Mode::ForcePressure => Category::ForcePressure.pattern(),
    }
}
