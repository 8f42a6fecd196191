use indexmap::IndexMap;

use crate::model::task::Task;

/// The parsed board: section label → tasks, iterated in the order labels
/// first appear in the document.
///
/// A board is derived state. It is rebuilt from the raw document text on
/// every render pass and discarded afterwards; toggling a task never mutates
/// a board, it rewrites the text and the next parse picks the change up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    sections: IndexMap<String, Vec<Task>>,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Append a task to the section with the given label, creating the
    /// section if this is the first time the label is seen. A label that
    /// recurs later in the document keeps appending to the same bucket.
    pub fn push_task(&mut self, label: &str, task: Task) {
        self.sections
            .entry(label.to_string())
            .or_default()
            .push(task);
    }

    /// Tasks under a label, or None if the label never appeared.
    pub fn tasks(&self, label: &str) -> Option<&[Task]> {
        self.sections.get(label).map(|v| v.as_slice())
    }

    /// Section labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(|s| s.as_str())
    }

    /// (label, tasks) pairs in first-seen order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find a task by (label, exact text). Used by the CLI to report why a
    /// toggle did nothing, never by the patch engine itself.
    pub fn find_task(&self, label: &str, text: &str) -> Option<&Task> {
        self.tasks(label)?.iter().find(|t| t.text == text)
    }
}
