mod app;
mod buffer;
mod config;
mod error;
mod paths;
mod terminal;
mod view;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{Config, LevelFilter, WriteLogger};
use swatch::{DisplayFormat, PickerConfig, Rgba, TriggerMode};

use crate::app::App;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::terminal::Terminal;

#[derive(Parser, Debug)]
#[command(
    name = "swatch",
    version,
    about = "Pick and convert colors in the terminal",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, global = true, help = "Log at debug level")]
    verbose: bool,

    #[arg(long, global = true, help = "Read this config file instead of the default")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a color to another notation
    Convert {
        /// Color as #hex, rgb()/rgba() or hsl()/hsla()
        color: String,

        #[arg(long, short, value_enum, help = "Output notation")]
        to: Option<FormatArg>,

        #[arg(long, conflicts_with = "to", help = "Print every notation")]
        all: bool,
    },

    /// Open the interactive picker and print the chosen color
    Pick {
        /// Starting color
        color: Option<String>,

        #[arg(long, help = "Hide the alpha slider and field")]
        no_alpha: bool,

        #[arg(long, help = "Hide the preset row")]
        no_presets: bool,

        #[arg(long, value_enum, help = "What the closed picker shows")]
        trigger: Option<TriggerArg>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Hex,
    Rgb,
    Hsl,
}

impl From<FormatArg> for DisplayFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => DisplayFormat::Hex,
            FormatArg::Rgb => DisplayFormat::Rgb,
            FormatArg::Hsl => DisplayFormat::Hsl,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TriggerArg {
    Text,
    Icon,
    Both,
}

impl From<TriggerArg> for TriggerMode {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::Text => TriggerMode::Text,
            TriggerArg::Icon => TriggerMode::Icon,
            TriggerArg::Both => TriggerMode::Both,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log into the rotated cache-dir log file. Without a cache dir there is no
/// log at all.
fn init_logging(verbose: bool) -> Result<(), CliError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;
    log::debug!("logging to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::load_default()?,
    };

    match cli.command {
        Command::Convert { color, to, all } => {
            let formats = if all {
                DisplayFormat::ALL.to_vec()
            } else {
                vec![to.map(Into::into).unwrap_or(config.convert_to)]
            };
            for line in convert(&color, &formats)? {
                println!("{line}");
            }
        }
        Command::Pick {
            color,
            no_alpha,
            no_presets,
            trigger,
        } => {
            let mut picker = config.picker;
            apply_overrides(&mut picker, no_alpha, no_presets, trigger);
            let value = color.unwrap_or(config.color);

            let picked = {
                let mut terminal = Terminal::new()?;
                App::new(value, picker).run(&mut terminal)?
            };
            println!("{picked}");
        }
    }
    Ok(())
}

/// Strictly parse `color` and render it in each of `formats`.
fn convert(color: &str, formats: &[DisplayFormat]) -> Result<Vec<String>, CliError> {
    let rgba: Rgba = color.parse()?;
    log::debug!("converting {color:?} as {rgba:?}");
    Ok(formats.iter().map(|format| format.format(rgba)).collect())
}

/// Command-line flags win over the config file.
fn apply_overrides(
    picker: &mut PickerConfig,
    no_alpha: bool,
    no_presets: bool,
    trigger: Option<TriggerArg>,
) {
    if no_alpha {
        picker.show_alpha = false;
    }
    if no_presets {
        picker.show_presets = false;
    }
    if let Some(trigger) = trigger {
        picker.trigger_mode = trigger.into();
    }
}
