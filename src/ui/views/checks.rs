//! Check report renderers
//!
//! All three produce the same classification and totals; they differ only in
//! presentation.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::domain::entities::CheckReport;
use crate::domain::value_objects::AggregateSummary;
use crate::ui::context::UiContext;
use crate::ui::json::events::{CheckEvent, SummaryEvent};
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

const COLUMN_GAP: &str = "  ";

/// How a report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Headline, counts and an aligned table, sorted by name
    Table { color: bool },
    /// `name\tbucket\telapsed\tlink`, one line per check
    Tsv,
    /// NDJSON check and summary events
    Json,
}

impl RenderMode {
    pub fn for_context(ui: &UiContext) -> Self {
        if ui.json {
            RenderMode::Json
        } else if ui.interactive() {
            RenderMode::Table { color: ui.color }
        } else {
            RenderMode::Tsv
        }
    }

    /// Only the table owns the screen (alternate buffer, repaint).
    pub fn is_interactive(&self) -> bool {
        matches!(self, RenderMode::Table { .. })
    }

    pub fn render(&self, report: &CheckReport) -> io::Result<String> {
        match self {
            RenderMode::Table { color } => Ok(render_table(report, *color)),
            RenderMode::Tsv => Ok(render_tsv(report)),
            RenderMode::Json => render_ndjson(report).map_err(io::Error::from),
        }
    }
}

/// `1 failing, 1 successful, 0 skipped, and 1 pending checks`
pub fn counts_line(summary: &AggregateSummary) -> String {
    format!(
        "{} failing, {} successful, {} skipped, and {} pending checks",
        summary.failing, summary.passing, summary.skipped, summary.pending
    )
}

/// Interactive table: headline, counts, blank line, then one row per check
/// sorted by name.
pub fn render_table(report: &CheckReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::plain(report.outcome().headline()).bold().render(color));
    out.push('\n');
    out.push_str(&counts_line(&report.summary));
    out.push_str("\n\n");

    let rows: Vec<_> = report
        .sorted_by_identity()
        .into_iter()
        .map(|check| {
            let elapsed = check
                .record
                .elapsed()
                .map(|e| e.to_string())
                .unwrap_or_default();
            (check, elapsed)
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(check, _)| check.record.identity.width())
        .max()
        .unwrap_or(0);
    let elapsed_width = rows.iter().map(|(_, elapsed)| elapsed.width()).max().unwrap_or(0);

    for (check, elapsed) in &rows {
        let line = [
            theme::glyph(check.classification).render(color),
            pad(&check.record.identity, name_width),
            pad(elapsed, elapsed_width),
            check.record.details_link.clone(),
        ]
        .join(COLUMN_GAP);
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Machine-readable stream in dedup order. Unknown elapsed is `0`.
pub fn render_tsv(report: &CheckReport) -> String {
    let mut out = String::new();
    for check in &report.checks {
        let elapsed = check
            .record
            .elapsed()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "0".to_string());
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            check.record.identity, check.classification, elapsed, check.record.details_link
        ));
    }
    out
}

/// One `check` event per record in dedup order, then a `summary` event.
pub fn render_ndjson(report: &CheckReport) -> serde_json::Result<String> {
    let mut out = String::new();
    for check in &report.checks {
        out.push_str(&serde_json::to_string(&CheckEvent::new(check))?);
        out.push('\n');
    }
    out.push_str(&serde_json::to_string(&SummaryEvent::new(&report.summary))?);
    out.push('\n');
    Ok(out)
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
