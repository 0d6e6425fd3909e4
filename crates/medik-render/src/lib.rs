//! Rendering for the terminal: exam headers, status lines and the health footer.

#![forbid(unsafe_code)]

mod model;
mod text;

pub use model::{RenderableExam, RenderableLine, RenderableRun, RenderableSeverity};
pub use text::{RenderOptions, health_summary, render_text};
