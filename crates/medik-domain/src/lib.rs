//! Exam evaluation for medik.
//!
//! Input: exam descriptors decoded elsewhere, plus an [`Environment`] to read variables from.
//! Output: one [`medik_types::ExamReport`] per exam and the overall severity.
//!
//! Filesystem exams stat paths directly; nothing here writes to the environment or the disk.

#![forbid(unsafe_code)]

pub mod environment;
pub mod error;
pub mod exams;
pub mod registry;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{ExamOrigin, RunResult, plan, run};
pub use environment::{Environment, LayeredEnv, ProcessEnv};
pub use error::{ExamParseError, RunError};
pub use exams::{Exam, ExamSpec};
pub use registry::{ExamParser, lookup, parse_exam, registered_tags};
