//! Stable DTOs and IDs used across the medik workspace.
//!
//! This crate is intentionally boring:
//! - the severity scale shared by configuration and outcomes
//! - the declarative exam descriptor produced by config loaders
//! - per-target statuses and exam reports, with their text formatting
//! - stable exam tag IDs and the catalogue describing them

#![forbid(unsafe_code)]

pub mod catalog;
pub mod descriptor;
pub mod ids;
pub mod report;
pub mod severity;

pub use catalog::{ExamInfo, TargetDomain, all_exam_tags, all_exams, lookup_exam_info};
pub use descriptor::{ExamDescriptor, NumericBound};
pub use report::{ExamReport, FormattedLine, FormattedReport, TargetOutcome, TargetStatus};
pub use severity::Severity;
