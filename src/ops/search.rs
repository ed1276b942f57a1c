use crate::model::document::PipelineDocument;
use crate::model::task::TaskModel;

/// Case-insensitive substring match against a task's searchable fields:
/// name, recognition, action, and every `next` reference.
pub fn matches_query(task: &TaskModel, query: &str) -> bool {
    matches_lowered(task, &query.to_lowercase())
}

/// Derive the filtered view of a document: indices and entries matching
/// `query`, in document order.
///
/// A pure projection over the backing sequence: the document is never
/// reordered or mutated, and a blank query matches every entry.
pub fn filter<'a>(document: &'a PipelineDocument, query: &str) -> Vec<(usize, &'a TaskModel)> {
    let query = query.to_lowercase();
    document
        .iter()
        .enumerate()
        .filter(|(_, task)| matches_lowered(task, &query))
        .collect()
}

fn matches_lowered(task: &TaskModel, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    if task.name.to_lowercase().contains(query) {
        return true;
    }
    if let Some(recognition) = &task.recognition
        && recognition.to_lowercase().contains(query)
    {
        return true;
    }
    if let Some(action) = &task.action
        && action.to_lowercase().contains(query)
    {
        return true;
    }
    if let Some(next) = &task.next
        && next.iter().any(|n| n.to_lowercase().contains(query))
    {
        return true;
    }
    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
