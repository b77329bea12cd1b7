//! Styled rendering of terminal lines.
//!
//! This is the frontend half of the "render a Line by kind" contract: the
//! core tags lines with a semantic kind, and this module maps each kind to a
//! [`console::Style`].

use console::Style;
use termfolio::models::{Line, LineKind};

/// Style applied to the text of a line.
fn text_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Command => Style::new().white(),
        LineKind::Output => Style::new().dim(),
        LineKind::Path => Style::new().cyan(),
        LineKind::Success => Style::new().green(),
        LineKind::Accent => Style::new().cyan().bold(),
        LineKind::Error => Style::new().red(),
        LineKind::Folder => Style::new().blue().bold(),
        LineKind::File => Style::new().green(),
    }
}

/// Style applied to the prefix glyph.
fn prefix_style(line: &Line) -> Style {
    if line.kind == LineKind::Command {
        Style::new().green().bold()
    } else if line.prefix.as_deref() == Some("→") {
        Style::new().cyan()
    } else {
        Style::new().dim()
    }
}

/// Render one line with its prefix glyph.
pub fn format_line(line: &Line) -> String {
    let text = text_style(line.kind).apply_to(&line.text);
    match line.prefix.as_deref() {
        Some(prefix) if !prefix.trim().is_empty() => {
            format!("{} {}", prefix_style(line).apply_to(prefix), text)
        }
        _ => format!("  {text}"),
    }
}

/// Render the input prompt for the given working directory path.
pub fn prompt(path: &str) -> String {
    format!(
        "{} {} ",
        Style::new().cyan().apply_to(path),
        Style::new().green().bold().apply_to("$")
    )
}
