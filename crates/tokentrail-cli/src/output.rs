//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tokentrail_domain::{TraceResult, Transaction};
use tokentrail_sweep::{SeedCandidate, SurveyReport};
use tokentrail_walker::render_trace;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the traces of one run, in seed order.
    pub fn format_traces(&self, traces: &[TraceResult]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(traces)?),
            OutputFormat::Text => Ok(traces
                .iter()
                .map(|t| self.format_trace_text(t))
                .collect::<Vec<_>>()
                .join("\n\n")),
            OutputFormat::Quiet => {
                let mut values: Vec<&str> = Vec::new();
                for trace in traces {
                    values.extend(trace.explained_values());
                }
                Ok(values.join("\n"))
            }
        }
    }

    fn format_trace_text(&self, trace: &TraceResult) -> String {
        let body = render_trace(trace)
            .lines()
            .map(|line| self.colorize_trace_line(line))
            .collect::<Vec<_>>()
            .join("\n");

        let verdict = if trace.found_dependency() {
            self.success("Dependency chain found")
        } else if trace.seed_explained() {
            self.warning("No dependency found beyond the first reference")
        } else {
            self.warning(&format!("No reference found for: {}", trace.seed))
        };

        let stats = &trace.stats;
        let counters = format!(
            "{} explained, {} unexplained, {} cycle(s), {} depth-limited, {} transactions scanned",
            stats.values_explained,
            stats.unexplained,
            stats.cycles,
            stats.depth_limited,
            stats.transactions_scanned
        );
        format!("{}\n\n{}\n{}", body, verdict, self.info(&counters))
    }

    fn colorize_trace_line(&self, line: &str) -> String {
        let marker = line.trim_start().chars().next();
        match marker {
            Some('→') => self.colorize(line, "green"),
            Some('↑') | Some('↓') => self.colorize(line, "cyan"),
            Some('×') => self.colorize(line, "red"),
            Some('↺') | Some('⋯') => self.colorize(line, "yellow"),
            _ => line.to_string(),
        }
    }

    /// Format discovered seeds.
    pub fn format_seeds(&self, seeds: &[SeedCandidate]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(seeds)?),
            OutputFormat::Quiet => Ok(seeds
                .iter()
                .map(|s| s.value.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                if seeds.is_empty() {
                    return Ok(self.colorize("No seeds found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Value", "Entropy", "Pattern", "Source", "Bodies"]);
                for (i, seed) in seeds.iter().enumerate() {
                    builder.push_record([
                        (i + 1).to_string(),
                        seed.value.clone(),
                        format!("{:.2}", seed.entropy),
                        seed.classification.to_string(),
                        format!("{} {}", seed.source.transaction, seed.source.location),
                        seed.occurrences.to_string(),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format a survey report.
    pub fn format_survey(&self, report: &SurveyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(report.summary()),
            OutputFormat::Quiet => Ok(report
                .top_values
                .iter()
                .map(|v| v.value.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the transactions containing `value`.
    pub fn format_locations(&self, value: &str, found: &[&Transaction]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = found
                    .iter()
                    .map(|tx| {
                        serde_json::json!({
                            "transaction": tx.id(),
                            "request_line": tx.top_line(),
                            "status": tx.response().status,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "value": value,
                    "transactions": rows,
                }))?)
            }
            OutputFormat::Quiet => Ok(found
                .iter()
                .map(|tx| tx.id().index().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Text => {
                if found.is_empty() {
                    return Ok(self.warning(&format!("No reference found for: {}", value)));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Method", "URL", "Status"]);
                for tx in found {
                    builder.push_record([
                        tx.id().index().to_string(),
                        tx.request().method.clone(),
                        tx.request().url.clone(),
                        tx.response().status.to_string(),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
        }
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
