use indexmap::IndexMap;

use crate::model::task::TaskModel;

/// Error type for pipeline wire-format conversions
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not a JSON mapping of task names to task objects
    #[error("could not parse pipeline JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("could not serialize pipeline JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Parse pipeline JSON into its mapping form, preserving key order.
///
/// Only the shape is validated (a top-level object of task objects);
/// fields this editor does not model ride along in each task's `extra`
/// map. The entries' `name` fields are not filled in here: the mapping
/// key is the name, and consumers stamp it where they need it.
pub fn from_json(text: &str) -> Result<IndexMap<String, TaskModel>, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Parse)
}

/// Serialize a mapping as indented JSON, the on-disk format
pub fn to_json(mapping: &IndexMap<String, TaskModel>) -> Result<String, CodecError> {
    serde_json::to_string_pretty(mapping).map_err(CodecError::Serialize)
}

/// Serialize a mapping as single-line JSON
pub fn to_json_compact(mapping: &IndexMap<String, TaskModel>) -> Result<String, CodecError> {
    serde_json::to_string(mapping).map_err(CodecError::Serialize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
