use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, LevelFilter};
use std::process::ExitCode;
use tofi::{cli, config, filters, reporter, scanner, TofiError};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match scan_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(TofiError::NoFiles) => cli::Cli::command()
            .error(ErrorKind::MissingRequiredArgument, TofiError::NoFiles.to_string())
            .exit(),
        Err(err) => {
            eprintln!("tofi: error: {:#}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn scan_command(cli: &cli::Cli) -> Result<(), TofiError> {
    // Load configuration
    let config = config::load_config(cli.config.as_deref())
        .map_err(|err| TofiError::Config(format!("{:#}", err)))?;
    let config = config::apply_cli_overrides(config, cli);
    debug!("Effective config: {:?}", config);

    match cli.color {
        cli::ColorChoice::Always => colored::control::set_override(true),
        cli::ColorChoice::Never => colored::control::set_override(false),
        cli::ColorChoice::Auto => {}
    }

    let markers = filters::select_markers(&config.markers)?;

    // Expand directories into the sorted file list
    let files = scanner::collect_files(&cli.paths, config.respect_ignore);
    if files.is_empty() {
        return Err(TofiError::NoFiles);
    }
    debug!("Scanning {} files", files.len());

    let reports = scanner::scan_files(&files, &markers)?;
    debug!(
        "Found markers in {} files",
        reports.iter().filter(|report| report.found()).count()
    );

    reporter::generate_report(&reports, cli.format, &config.display())?;

    Ok(())
}
