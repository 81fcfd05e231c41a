use crate::cli::OutputFormat;
use crate::models::{Annotation, DisplayOptions, FileReport};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Write the scan results to stdout in the requested format
pub fn generate_report(
    reports: &[FileReport],
    format: OutputFormat,
    display: &DisplayOptions,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Terminal => write_terminal(&mut out, reports, display),
        OutputFormat::Json => write_json(&mut out, reports),
    }
    .context("Failed to write report")?;

    out.flush().context("Failed to write report")
}

/// Render one annotation: `<num> <symbol> <keyword><text>`
pub fn render_line(annotation: &Annotation, width: usize, display: &DisplayOptions) -> String {
    let marker = &annotation.marker;
    let color = marker.color.as_color();
    let mut line = String::new();

    if display.numbers {
        let number = format!("{:>width$}", annotation.line_number, width = width);
        if display.color {
            line.push_str(&number.as_str().bright_black().to_string());
        } else {
            line.push_str(&number);
        }
        line.push(' ');
    }

    if display.symbols {
        if display.color {
            line.push_str(&marker.symbol.color(color).bold().to_string());
        } else {
            line.push_str(marker.symbol);
        }
        line.push(' ');
    }

    if display.keywords {
        if display.color {
            line.push_str(&marker.keyword.color(color).bold().to_string());
        } else {
            line.push_str(marker.keyword);
        }
    }

    line.push_str(&annotation.text);
    line
}

/// Terminal layout: optional `path:` headers, one line per annotation, and a
/// blank line between the output of consecutive files.
pub fn write_terminal<W: Write>(
    out: &mut W,
    reports: &[FileReport],
    display: &DisplayOptions,
) -> io::Result<()> {
    // A single input file never gets a header
    let headers = display.filenames && reports.len() > 1;
    let mut printed_any = false;

    for report in reports.iter().filter(|report| report.found()) {
        if headers {
            if printed_any {
                writeln!(out)?;
            }
            writeln!(out, "{}:", report.path.display())?;
        }

        let width = report.number_width();
        for annotation in &report.annotations {
            let line = render_line(annotation, width, display);
            if !line.is_empty() {
                writeln!(out, "{}", line)?;
            }
        }

        printed_any = true;
    }

    Ok(())
}

/// Format reports of files with at least one annotation as JSON
pub fn write_json<W: Write>(out: &mut W, reports: &[FileReport]) -> io::Result<()> {
    let found: Vec<&FileReport> = reports.iter().filter(|report| report.found()).collect();
    serde_json::to_writer_pretty(&mut *out, &found)?;
    writeln!(out)
}
