use crate::error::TofiError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tofi")]
#[command(version, about = "Print TODOs, FIXMEs & Co.", long_about = None)]
pub struct Cli {
    /// Source files or directories to scan (defaults to current directory)
    #[arg(value_name = "PATH", default_value = ".", value_parser = parse_existing_path)]
    pub paths: Vec<PathBuf>,

    /// Hide filenames
    #[arg(short = 'f', long)]
    pub hide_filenames: bool,

    /// Hide keywords
    #[arg(short = 'k', long)]
    pub hide_keywords: bool,

    /// Hide line numbers
    #[arg(short = 'n', long)]
    pub hide_numbers: bool,

    /// Hide symbols
    #[arg(short = 's', long)]
    pub hide_symbols: bool,

    /// Only report markers of these types (TODO, FIXME, etc.)
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    pub marker_types: Vec<String>,

    /// When to colorize the output; `auto` drops colors when stdout is not a
    /// terminal or NO_COLOR is set, use `always` to keep them in pipes
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format
    #[arg(long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Skip files matched by .gitignore and hidden files when walking directories
    #[arg(long)]
    pub respect_ignore: bool,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colorize when writing to a terminal
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One colorized line per annotation
    Terminal,
    /// JSON format
    Json,
}

fn parse_existing_path(value: &str) -> Result<PathBuf, TofiError> {
    let path = PathBuf::from(value);
    if path.is_file() || path.is_dir() {
        Ok(path)
    } else {
        Err(TofiError::InvalidPath(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tofi"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert!(!cli.hide_filenames && !cli.hide_keywords);
        assert!(!cli.hide_numbers && !cli.hide_symbols);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.format, OutputFormat::Terminal);
    }

    #[test]
    fn test_flags_and_types() {
        let cli = Cli::try_parse_from(["tofi", "-fkns", "-t", "todo,fixme", "."]).unwrap();
        assert!(cli.hide_filenames && cli.hide_keywords);
        assert!(cli.hide_numbers && cli.hide_symbols);
        assert_eq!(cli.marker_types, vec!["todo", "fixme"]);
    }

    #[test]
    fn test_color_help_mentions_pipes() {
        let command = Cli::command();
        let color = command
            .get_arguments()
            .find(|arg| arg.get_id() == "color")
            .unwrap();
        let help = color.get_help().unwrap().to_string();
        assert!(help.contains("always"));
        assert!(help.contains("not a"));
    }

    #[test]
    fn test_rejects_missing_path() {
        let err = Cli::try_parse_from(["tofi", "/definitely/not/here"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("neither file nor directory"));
    }
}
