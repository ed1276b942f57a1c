use indexmap::IndexMap;

use crate::model::task::TaskModel;

/// Error type for document operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Two entries collide on the same mapping key. Export is
    /// all-or-nothing: nothing is dropped or overwritten.
    #[error("duplicate task name: {name:?}")]
    DuplicateName { name: String },
    /// An index outside the entry sequence
    #[error("entry index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// The ordered sequence of tasks being edited.
///
/// Order is meaningful: it drives display order and paste positions. The
/// name index is derived on demand (`export`, `index_of`), never stored
/// alongside the sequence, so the two cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineDocument {
    entries: Vec<TaskModel>,
}

impl PipelineDocument {
    pub fn new() -> Self {
        PipelineDocument::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskModel> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TaskModel> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskModel> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[TaskModel] {
        &self.entries
    }

    /// Index of the first entry with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|t| t.name == name)
    }

    /// Replace the whole sequence from a name-to-task mapping. Each key is
    /// stamped into its entry's `name` field (the key is authoritative, a
    /// stray inner `name` key is dropped); entry order follows the
    /// mapping's iteration order.
    pub fn load(&mut self, mapping: IndexMap<String, TaskModel>) {
        self.entries = mapping
            .into_iter()
            .map(|(name, mut task)| {
                task.stamp_name(name);
                task
            })
            .collect();
    }

    /// Append an entry, returning its index
    pub fn push(&mut self, entry: TaskModel) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Insert `entry` at `index`, shifting later entries down.
    /// `index == len` appends.
    pub fn insert_at(&mut self, index: usize, entry: TaskModel) -> Result<(), DocumentError> {
        if index > self.entries.len() {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Remove and return the entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<TaskModel, DocumentError> {
        if index >= self.entries.len() {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Swap in a whole new sequence, returning the prior one
    pub fn replace_all(&mut self, entries: Vec<TaskModel>) -> Vec<TaskModel> {
        std::mem::replace(&mut self.entries, entries)
    }

    /// Build the name-to-task mapping for persistence or transfer.
    ///
    /// All-or-nothing: the first key collision fails the whole export
    /// without yielding a partial mapping. Blank names are legal keys, but
    /// two of them still collide.
    pub fn export(&self) -> Result<IndexMap<String, TaskModel>, DocumentError> {
        let mut mapping = IndexMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if mapping.contains_key(&entry.name) {
                return Err(DocumentError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
            mapping.insert(entry.name.clone(), entry.clone());
        }
        Ok(mapping)
    }
}
