//! Render use case: turn a run result into terminal text.

use medik_domain::RunResult;
use medik_render::{RenderOptions, RenderableExam, RenderableLine, RenderableRun, RenderableSeverity};
use medik_types::{FormattedLine, Severity};

fn to_renderable_severity(severity: Severity) -> RenderableSeverity {
    match severity {
        Severity::Ok => RenderableSeverity::Ok,
        Severity::Warning => RenderableSeverity::Warning,
        Severity::Error => RenderableSeverity::Error,
    }
}

fn to_renderable_line(line: FormattedLine) -> RenderableLine {
    RenderableLine {
        severity: to_renderable_severity(line.severity),
        label: line.label,
        text: line.text,
    }
}

/// Format every report at `verbosity` and map the result into the render model.
pub fn to_renderable(result: &RunResult, verbosity: Severity) -> RenderableRun {
    let exams = result
        .reports
        .iter()
        .map(|report| {
            let formatted = report.format(verbosity);
            RenderableExam {
                header: to_renderable_line(formatted.header),
                body: formatted.body.into_iter().map(to_renderable_line).collect(),
            }
        })
        .collect();

    RenderableRun {
        severity: to_renderable_severity(result.severity),
        exams,
    }
}

pub fn render_run(result: &RunResult, verbosity: Severity, options: &RenderOptions) -> String {
    medik_render::render_text(&to_renderable(result, verbosity), options)
}
