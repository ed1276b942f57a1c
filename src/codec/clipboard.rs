use indexmap::IndexMap;

use crate::model::task::TaskModel;

use super::pipeline::{self, CodecError};

/// Error type for clipboard transfer
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The clipboard held no text payload
    #[error("clipboard has no text")]
    Empty,
    #[error("payload error: {0}")]
    Codec(#[from] CodecError),
}

/// Encode a single task as a transfer payload: the same name-to-task
/// mapping shape as a pipeline file, holding one entry. A payload pasted
/// into a text editor is a valid pipeline fragment.
pub fn encode_one(task: &TaskModel) -> Result<String, ClipboardError> {
    let mut mapping = IndexMap::new();
    mapping.insert(task.name.clone(), task.clone());
    Ok(pipeline::to_json(&mapping)?)
}

/// Decode a transfer payload into tasks in payload order, with each
/// task's `name` stamped from its mapping key.
///
/// `text` is `None` when the clipboard holds no text. Foreign text that
/// is not a task mapping fails with a parse error; an empty mapping
/// decodes to an empty list.
pub fn decode_many(text: Option<&str>) -> Result<Vec<TaskModel>, ClipboardError> {
    let text = text.ok_or(ClipboardError::Empty)?;
    let mapping = pipeline::from_json(text)?;
    Ok(mapping
        .into_iter()
        .map(|(name, mut task)| {
            task.stamp_name(name);
            task
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
