use crate::{SearchReport, Word};
use anyhow::Result;
use colored::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_report(
    report: &SearchReport,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report, colored_output),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    println!("{}", rendered);
    Ok(())
}

pub fn render_text(report: &SearchReport, colored_output: bool) -> String {
    report
        .words
        .iter()
        .map(|word| format_word(word, colored_output))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_word(word: &Word, colored_output: bool) -> String {
    match &word.location {
        Some(path) => {
            let cells = path
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",");
            if colored_output {
                format!("{}: {}", word.text.green().bold(), cells)
            } else {
                format!("{}: {}", word.text, cells)
            }
        }
        None => {
            if colored_output {
                format!("{}: {}", word.text.red().bold(), "not found".dimmed())
            } else {
                format!("{}: not found", word.text)
            }
        }
    }
}

pub fn print_summary(report: &SearchReport, colored: bool) {
    let total = report.found + report.missing;
    let word_label = if total == 1 { "word" } else { "words" };

    if report.missing == 0 {
        let line = format!("✓ Found all {} {}", total, word_label);
        if colored {
            eprintln!("{}", line.green().bold());
        } else {
            eprintln!("{}", line);
        }
    } else if colored {
        eprintln!(
            "{} {} of {} {} not found",
            "✗".red().bold(),
            report.missing.to_string().red().bold(),
            total,
            word_label
        );
    } else {
        eprintln!("✗ {} of {} {} not found", report.missing, total, word_label);
    }
}
