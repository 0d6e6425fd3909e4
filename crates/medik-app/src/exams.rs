//! The `list-exams` use case: enumerate every exam kind medik understands.

use medik_types::{ExamInfo, TargetDomain};

/// Every known exam, in registry order.
pub fn run_list_exams() -> &'static [ExamInfo] {
    medik_types::all_exams()
}

/// Format the exam catalogue for terminal display.
pub fn format_exam_list(exams: &[ExamInfo]) -> String {
    let width = exams.iter().map(|e| e.tag.len()).max().unwrap_or(0);
    let mut out = String::new();

    for exam in exams {
        let targets = match exam.domain {
            TargetDomain::EnvVar => "vars",
            TargetDomain::Path => "paths",
        };
        out.push_str(&format!("{:<width$}  {}", exam.tag, exam.summary));

        let mut fields = vec![targets];
        fields.extend_from_slice(exam.fields);
        out.push_str(&format!(" [{}]\n", fields.join(", ")));
    }

    out
}
