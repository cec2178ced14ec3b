//! Structural optimization of a prompt into the Context/Task scaffold

use serde::{Deserialize, Serialize};

/// Prompts shorter than this (in characters) are flagged as too brief
pub const BREVITY_THRESHOLD: usize = 50;

const CONTEXT_MARKER: &str = "Context:";
const TASK_MARKER: &str = "Task:";

/// Kind of rewrite an [`OptimizationChange`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// A new section was introduced
    Added,
    /// Existing content was clarified or expanded
    Improved,
    /// The overall layout was changed
    Structured,
}

/// One entry of the change log shown for review after [`optimize`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationChange {
    #[serde(rename = "type")]
    pub kind:        ChangeKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after:       Option<String>,
}

impl OptimizationChange {
    fn new(kind: ChangeKind, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            before: None,
            after: None,
        }
    }

    fn with_example(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self.after = Some(after.into());
        self
    }
}

/// Sections added around the task, with the change-log description for each
const ADDED_SECTIONS: [(&str, &str); 4] = [
    ("Context", "Added a Context section for background, audience and purpose"),
    ("Requirements", "Added a Requirements section with numbered constraints"),
    ("Output Format", "Added an Output Format section describing the expected shape"),
    ("Example", "Added an Example section showing the desired output"),
];

fn scaffold(task: &str) -> String {
    format!(
        "Context: [Describe the background, audience and purpose]\n\
         \n\
         Task: {task}\n\
         \n\
         Requirements:\n\
         1. [First requirement]\n\
         2. [Second requirement]\n\
         3. [Third requirement]\n\
         \n\
         Output Format: [Describe the desired structure, length and tone]\n\
         \n\
         Example: [Provide an example of the expected output]"
    )
}

/// Wrap `text` in the five-part Context/Task/Requirements/Output Format/Example
/// scaffold
///
/// Text that already carries both `Context:` and `Task:` is returned as is
/// with an empty change log. The function keeps no history; callers that
/// offer a revert must hold on to the original text themselves.
pub fn optimize(text: &str) -> (String, Vec<OptimizationChange>) {
    if text.contains(CONTEXT_MARKER) && text.contains(TASK_MARKER) {
        return (text.to_string(), Vec::new());
    }

    let optimized = scaffold(text);

    let mut changes = vec![OptimizationChange::new(
        ChangeKind::Structured,
        "Restructured the prompt into Context, Task, Requirements, Output Format and Example sections",
    )
    .with_example("Single block of free text", "Five labelled sections")];

    changes.extend(
        ADDED_SECTIONS
            .iter()
            .map(|(_, description)| OptimizationChange::new(ChangeKind::Added, description)),
    );

    let length = text.chars().count();
    if length < BREVITY_THRESHOLD {
        changes.push(
            OptimizationChange::new(
                ChangeKind::Improved,
                "Expanded a very short prompt with sections that ask for the missing detail",
            )
            .with_example(
                format!("{} characters", length),
                format!("{} characters", optimized.chars().count()),
            ),
        );
    }

    if !text.contains(TASK_MARKER) && !text.contains('?') {
        changes.push(
            OptimizationChange::new(
                ChangeKind::Improved,
                "Clarified the request by moving it into a dedicated Task section",
            )
            .with_example(text, format!("Task: {}", text)),
        );
    }

    (optimized, changes)
}
