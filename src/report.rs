//! # Report Formatter
//!
//! Column alignment and per-line rendering. The line-name column is sized
//! from the longest display name plus a fixed margin on each side, and every
//! label is centered within it so the status column lines up no matter which
//! line is printed. Rendering targets any `io::Write` so tests can capture
//! the exact bytes.

use std::io::{self, Write};

use serde_json::Value;

use crate::config::COLUMN_PAD;
use crate::lines::{line_names, Line, LONDON_TUBE};
use crate::status::LineStatus;
use crate::style::{DISRUPTION, GOOD_SERVICE};

/// Center `text` within a column sized for the longest label in `labels`,
/// with `pad` extra spaces on each side.
///
/// Every label in the set produces the same output length:
/// `max(len) + 2 * pad`. Trimming the result gives back the input text.
pub fn justify(text: &str, labels: &[&str], pad: usize) -> String {
    let max_length = labels.iter().map(|label| label.len()).max().unwrap_or(0);
    let left_pad = (max_length.saturating_sub(text.len())) / 2;

    let mut out = String::with_capacity(max_length + 2 * pad);
    out.push_str(&" ".repeat(left_pad + pad));
    out.push_str(text);
    while out.len() < max_length + 2 * pad {
        out.push(' ');
    }
    out
}

/// Render one line's entry: colored label, status text, and the reason line
/// beneath when the line is disrupted. `labels` is the full label set the
/// column width is computed from, built once per report.
pub fn render_line(
    out: &mut impl Write,
    line: &Line,
    status: &LineStatus,
    labels: &[&str],
    color: bool,
) -> io::Result<()> {
    let label = justify(line.name, labels, COLUMN_PAD);

    let status_style = if status.is_good_service() {
        GOOD_SERVICE
    } else {
        DISRUPTION
    };
    let status_text = format!("  {}", status.description);

    writeln!(
        out,
        "{}{}",
        line.style.paint(&label, color),
        status_style.paint(&status_text, color)
    )?;

    // Good service never prints a reason, whatever the document says.
    if !status.is_good_service() && !status.reason.is_empty() {
        writeln!(
            out,
            "{:>width$}",
            status.reason,
            width = label.len() + 2 + status.reason.len()
        )?;
    }

    Ok(())
}

/// Render the whole report: every known line, in declared order, against one
/// fetched document.
pub fn render_report(out: &mut impl Write, doc: &Value, color: bool) -> io::Result<()> {
    let labels: Vec<&str> = line_names().collect();
    for line in &LONDON_TUBE {
        let status = LineStatus::for_line(doc, line.id);
        render_line(out, line, &status, &labels, color)?;
    }
    Ok(())
}
