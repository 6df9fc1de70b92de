//! Output formatting for search results.
//!
//! This module renders [`RouteSummary`] values in the formats the CLI
//! supports and prints the decorative banner and footer.

use std::fmt::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;

use gridroute_lib::{RouteRenderMode, RouteSummary, NO_SOLUTION};

use crate::terminal::{group_thousands, Palette};

/// Output format for the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-indented report, one block per algorithm.
    #[default]
    Text,
    /// Colored, aligned terminal view.
    Pretty,
    /// Markdown suitable for pasting into notes.
    Markdown,
    /// JSON array of result objects.
    Json,
}

impl OutputFormat {
    /// Whether decorative output (logo, footer) may surround the results.
    pub fn allows_decoration(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Pretty)
    }
}

/// Render every summary in the requested format.
pub fn format_summaries(
    summaries: &[RouteSummary],
    format: OutputFormat,
    palette: &Palette,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|summary| summary.render(RouteRenderMode::PlainText))
            .collect()),
        OutputFormat::Markdown => Ok(summaries
            .iter()
            .map(|summary| summary.render(RouteRenderMode::RichText))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Pretty => Ok(summaries
            .iter()
            .map(|summary| render_pretty(summary, palette))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(summaries)
                .context("failed to serialise search results")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Colored single-summary view with aligned labels.
pub fn render_pretty(summary: &RouteSummary, palette: &Palette) -> String {
    let p = palette;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}{}{} {}({} -> {}){}",
        p.heading,
        summary.algorithm.label(),
        p.reset,
        p.muted,
        summary.source,
        summary.goal,
        p.reset
    );

    if summary.found {
        let arrow = format!(" {}->{} ", p.muted, p.reset);
        let path = summary
            .path
            .iter()
            .map(|id| format!("{}{id}{}", p.vertex, p.reset))
            .collect::<Vec<_>>()
            .join(&arrow);
        let _ = writeln!(buffer, "  path     {path}");
        let _ = writeln!(
            buffer,
            "  cost     {}{}{} ({} hops)",
            p.cost,
            group_thousands(summary.cost),
            p.reset,
            summary.hops
        );
    } else {
        let _ = writeln!(buffer, "  path     {}{NO_SOLUTION}{}", p.warning, p.reset);
        let _ = writeln!(buffer, "  cost     {}", summary.cost);
    }

    let _ = writeln!(
        buffer,
        "  expanded {}{}{}",
        p.muted,
        group_thousands(summary.expanded as u64),
        p.reset
    );
    buffer
}

/// Banner shown above human-readable results.
pub fn logo(palette: &Palette) -> String {
    format!(
        "{}+------------------------------+\n\
         |  gridroute : ucs vs a-star   |\n\
         +------------------------------+{}",
        palette.heading, palette.reset
    )
}

/// Timing line shown after human-readable results.
pub fn footer(elapsed: Duration, palette: &Palette) -> String {
    let millis = elapsed.as_millis();
    let time = if millis < 1000 {
        format!("{millis}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    format!("{}Completed in {time}{}", palette.muted, palette.reset)
}

/// Print the banner to stderr so stdout carries only results.
pub fn print_logo(palette: &Palette) {
    eprintln!("{}", logo(palette));
}

pub fn print_footer(elapsed: Duration, palette: &Palette) {
    eprintln!("\n{}", footer(elapsed, palette));
}
