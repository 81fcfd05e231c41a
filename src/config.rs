use crate::cli::{Cli, ColorChoice};
use crate::models::Config;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".tofirc";

/// Load configuration from file or use defaults
///
/// Search order:
/// 1. Custom path if provided via --config
/// 2. .tofirc in current directory
/// 3. ~/.tofirc in home directory
/// 4. Built-in defaults
pub fn load_config(custom_path: Option<&Path>) -> Result<Config> {
    // If custom path provided, use it exclusively
    if let Some(path) = custom_path {
        return load_config_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let candidates = [Some(PathBuf::from(CONFIG_FILE_NAME)), get_home_config_path()];
    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_config_from_file(&path) {
            Ok(config) => {
                debug!("Using config from {}", path.display());
                return Ok(config);
            }
            Err(err) => warn!("Ignoring {}: {:#}", path.display(), err),
        }
    }

    debug!("Using built-in defaults");
    Ok(Config::default())
}

/// Load config from a specific file
fn load_config_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Get path to home directory config file
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Command line flags win over the config file
pub fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    config.filenames &= !cli.hide_filenames;
    config.keywords &= !cli.hide_keywords;
    config.numbers &= !cli.hide_numbers;
    config.symbols &= !cli.hide_symbols;
    config.respect_ignore |= cli.respect_ignore;

    match cli.color {
        ColorChoice::Always => config.color = true,
        ColorChoice::Never => config.color = false,
        ColorChoice::Auto => {}
    }

    if !cli.marker_types.is_empty() {
        config.markers = cli.marker_types.clone();
    }

    config
}
