#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderableSeverity {
    Ok,
    Warning,
    Error,
}

/// A level-tagged line: `label` is the exam's level label for headers, the target for body lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLine {
    pub severity: RenderableSeverity,
    pub label: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableExam {
    pub header: RenderableLine,
    /// Already filtered by verbosity.
    pub body: Vec<RenderableLine>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRun {
    pub severity: RenderableSeverity,
    pub exams: Vec<RenderableExam>,
}
