//! Use case orchestration for medik.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod exams;
mod render;

pub use check::{CheckInput, CheckOutput, run_check, severity_exit_code};
pub use exams::{format_exam_list, run_list_exams};
pub use render::{render_run, to_renderable};
