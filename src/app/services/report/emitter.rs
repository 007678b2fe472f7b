//! Human-readable and JSON rendering of analysis outcomes

use crate::Result;
use crate::app::models::{AnalysisOutcome, AnalysisReport};
use clap::ValueEnum;
use colored::*;
use std::fmt::Write as _;
use std::io::Write;

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Friendly text, one section per question
    #[default]
    Human,
    /// Pretty-printed JSON of the full outcome
    Json,
}

/// Render an outcome as plain text
///
/// `detailed` appends a per-species table to successful reports.
pub fn render_human(outcome: &AnalysisOutcome, detailed: bool) -> String {
    match outcome {
        AnalysisOutcome::Success(report) => render_report(report, detailed),
        AnalysisOutcome::Failure { kind, message } => format!("Error: {}: {}\n", kind, message),
    }
}

fn render_report(report: &AnalysisReport, detailed: bool) -> String {
    let mut out = String::new();

    // Debug formatting prints the full value and keeps a trailing ".0" on whole numbers
    let _ = writeln!(
        out,
        "Part1: The longest dino species is {}, averaging a whopping {:?}m.",
        report.largest_avg_species, report.largest_avg_length
    );
    out.push('\n');

    if report.anagram_groups.is_empty() {
        let _ = writeln!(
            out,
            "Part2: No dino name mix-ups today. Every dino is uniquely named, as it should be!"
        );
    } else {
        let _ = writeln!(
            out,
            "Part2: Dino name mix-up! Here are some dinos that could swap names if they wanted to:"
        );
        for group in &report.anagram_groups {
            let _ = writeln!(out, "    - {} are anagram buddies!", group.joined());
        }
    }

    if detailed && !report.species_aggregates.is_empty() {
        let width = report
            .species_aggregates
            .iter()
            .map(|aggregate| aggregate.species.chars().count())
            .max()
            .unwrap_or(0)
            .max("Species".len());

        out.push('\n');
        let _ = writeln!(out, "{:<width$}  {:>6}  {:>10}", "Species", "Count", "Mean (m)");
        for aggregate in &report.species_aggregates {
            let _ = writeln!(
                out,
                "{:<width$}  {:>6}  {:>10.2}",
                aggregate.species, aggregate.count, aggregate.mean_length
            );
        }
    }

    out
}

/// Render an outcome as pretty-printed JSON
pub fn render_json(outcome: &AnalysisOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Writes rendered outcomes to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportEmitter {
    format: OutputFormat,
    detailed: bool,
}

impl ReportEmitter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            detailed: false,
        }
    }

    /// Include the per-species table in human output
    pub fn with_details(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Render the outcome in the configured format
    pub fn render(&self, outcome: &AnalysisOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(render_human(outcome, self.detailed)),
            OutputFormat::Json => render_json(outcome).map(|json| json + "\n"),
        }
    }

    /// Print the outcome: successes to stdout, failures to stderr
    pub fn emit(&self, outcome: &AnalysisOutcome) -> Result<()> {
        let text = self.render(outcome)?;

        if outcome.is_success() {
            let mut stdout = std::io::stdout().lock();
            match self.format {
                OutputFormat::Human => write!(stdout, "{}", highlight_parts(&text))?,
                OutputFormat::Json => write!(stdout, "{}", text)?,
            }
            stdout.flush()?;
        } else {
            let mut stderr = std::io::stderr().lock();
            match self.format {
                OutputFormat::Human => write!(stderr, "{}", text.bright_red())?,
                OutputFormat::Json => write!(stderr, "{}", text)?,
            }
        }

        Ok(())
    }
}

/// Colour the "PartN:" labels of a human report
fn highlight_parts(text: &str) -> String {
    text.lines()
        .map(|line| match line.split_once(": ") {
            Some((label, rest)) if label.starts_with("Part") => {
                format!("{} {}", format!("{}:", label).bright_green().bold(), rest)
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}
