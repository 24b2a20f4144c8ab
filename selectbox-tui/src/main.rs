mod app;
mod error;
mod input;
mod layout;
mod paths;
mod render;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use selectbox::{SelectConfig, SelectOption, SelectWidget};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

/// Pick one option from a list in the terminal.
///
/// The selection at exit is printed to stdout.
#[derive(Debug, Parser)]
#[command(name = "selectbox", version, about)]
struct Args {
    /// JSON file with options (array, or object with options/placeholder/value)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Label shown while nothing is selected
    #[arg(short, long)]
    placeholder: Option<String>,

    /// Initially selected value
    #[arg(short, long)]
    value: Option<String>,

    /// Log level written to the log file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn init_logging(level: LevelFilter) -> Result<Option<PathBuf>, AppError> {
    let Some(dir) = paths::cache_dir() else {
        return Ok(None);
    };
    paths::rotate_logs(&dir).map_err(AppError::Log)?;
    fs::create_dir_all(&dir).map_err(AppError::Log)?;

    let path = paths::log_file(&dir);
    let file = File::create(&path).map_err(AppError::Log)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(Some(path))
}

/// Options used when no file is given.
fn default_config() -> SelectConfig {
    SelectConfig {
        options: vec![
            SelectOption::simple("Alabama"),
            SelectOption::simple("Alaska"),
            SelectOption::simple("American Samoa").disabled(true),
            SelectOption::simple("Arizona"),
            SelectOption::simple("Arkansas"),
            SelectOption::simple("California"),
            SelectOption::simple("Colorado"),
            SelectOption::simple("Federated States Of Micronesia").disabled(true),
            SelectOption::simple("Ohio"),
        ],
        placeholder: Some("Pick a state".into()),
        value: None,
    }
}

async fn run(args: Args) -> Result<Option<String>, AppError> {
    let log_path = init_logging(args.log_level)?;
    info!("selectbox-tui starting, log at {:?}", log_path);

    let mut config = match &args.options {
        Some(path) => SelectConfig::from_path(path)?,
        None => default_config(),
    };
    if args.placeholder.is_some() {
        config.placeholder = args.placeholder;
    }
    if args.value.is_some() {
        config.value = args.value;
    }

    app::run(SelectWidget::from_config(config)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(Some(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
