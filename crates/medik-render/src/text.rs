use crate::{RenderableLine, RenderableRun, RenderableSeverity};
use colored::{ColoredString, Colorize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI colour codes.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Footer text for an overall severity.
pub fn health_summary(severity: RenderableSeverity) -> &'static str {
    match severity {
        RenderableSeverity::Ok => "Environment Healthy",
        RenderableSeverity::Warning => "Environment Healthy (with warnings)",
        RenderableSeverity::Error => "Environment Unhealthy",
    }
}

pub fn render_text(run: &RenderableRun, options: &RenderOptions) -> String {
    let mut out = String::new();

    for exam in &run.exams {
        let tag = format!("[{}]", exam.header.label);
        out.push_str(&format!(
            "{} {}\n",
            paint(&tag, exam.header.severity, options),
            exam.header.text
        ));
        for line in &exam.body {
            out.push_str(&render_body_line(line, options));
        }
    }

    if !run.exams.is_empty() {
        out.push('\n');
    }

    let footer = health_summary(run.severity);
    if options.color {
        out.push_str(&format!("{}\n", tint(footer, run.severity).bold()));
    } else {
        out.push_str(footer);
        out.push('\n');
    }

    out
}

fn render_body_line(line: &RenderableLine, options: &RenderOptions) -> String {
    format!(
        "  {}: {}\n",
        paint(&line.label, line.severity, options),
        line.text
    )
}

fn paint(text: &str, severity: RenderableSeverity, options: &RenderOptions) -> String {
    if options.color {
        tint(text, severity).to_string()
    } else {
        text.to_string()
    }
}

fn tint(text: &str, severity: RenderableSeverity) -> ColoredString {
    match severity {
        RenderableSeverity::Ok => text.green(),
        RenderableSeverity::Warning => text.yellow(),
        RenderableSeverity::Error => text.red(),
    }
}
