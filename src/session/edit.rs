use indexmap::IndexMap;

use crate::codec::clipboard::{self, ClipboardError};
use crate::model::config::EditorConfig;
use crate::model::document::{DocumentError, PipelineDocument};
use crate::model::task::TaskModel;
use crate::ops::capture::{Capture, apply_capture};

use super::undo::{Command, UndoStack, apply};

/// Error type for edit-session operations
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The operation needs a selected task and none is selected
    #[error("no task is selected")]
    NoSelection,
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Transient editing state over one pipeline document: the current
/// selection plus the undo/redo stacks. One session per open editor,
/// dropped with it, never persisted.
///
/// Structural edits (add, delete, paste, clear) go through the session so
/// each one records its inverse command; bypassing it would let the
/// stacks drift from the document. Field edits on the selected task are
/// free since they shift no indices.
pub struct EditSession {
    document: PipelineDocument,
    selected: Option<usize>,
    history: UndoStack,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        EditSession {
            document: PipelineDocument::new(),
            selected: None,
            history: UndoStack::new(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        EditSession {
            document: PipelineDocument::new(),
            selected: None,
            history: UndoStack::with_limit(config.session.undo_limit),
        }
    }

    pub fn document(&self) -> &PipelineDocument {
        &self.document
    }

    /// Replace the document from a loaded mapping. The selection and both
    /// history stacks reset: a freshly loaded file starts a fresh history.
    pub fn load_document(&mut self, mapping: IndexMap<String, TaskModel>) {
        self.document.load(mapping);
        self.selected = None;
        self.history.clear();
    }

    // --- Selection ---

    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Result<(), EditError> {
        if index >= self.document.len() {
            return Err(DocumentError::IndexOutOfRange(index).into());
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_task(&self) -> Option<&TaskModel> {
        self.document.get(self.selected?)
    }

    /// Mutable access to the selected task for field edits (recognition,
    /// action, next, …). Field edits are not undoable and never shift
    /// indices, so they are safe outside the command stack.
    pub fn selected_task_mut(&mut self) -> Option<&mut TaskModel> {
        self.document.get_mut(self.selected?)
    }

    // --- Structural edits ---

    /// Append a fresh empty task, returning its index
    pub fn add_new(&mut self) -> Result<usize, EditError> {
        let index = self.document.len();
        let inverse = apply(
            Command::InsertAt {
                index,
                entry: TaskModel::default(),
            },
            &mut self.document,
        )?;
        self.history.push(inverse);
        Ok(index)
    }

    /// Remove the selected task; clears the selection
    pub fn delete_selected(&mut self) -> Result<(), EditError> {
        let index = self.selected.ok_or(EditError::NoSelection)?;
        let inverse = apply(Command::RemoveAt { index }, &mut self.document)?;
        self.history.push(inverse);
        self.selected = None;
        Ok(())
    }

    /// Encode the selected task as a transfer payload without mutating
    /// anything
    pub fn copy_selected(&self) -> Result<String, EditError> {
        let index = self.selected.ok_or(EditError::NoSelection)?;
        let task = self
            .document
            .get(index)
            .ok_or(DocumentError::IndexOutOfRange(index))?;
        Ok(clipboard::encode_one(task)?)
    }

    /// Copy, then delete: returns the payload the caller hands to the
    /// clipboard. Encoding happens first, so a failure leaves the
    /// document untouched.
    pub fn cut_selected(&mut self) -> Result<String, EditError> {
        let payload = self.copy_selected()?;
        self.delete_selected()?;
        Ok(payload)
    }

    /// Decode `text` and insert every entry before the entry at `index`,
    /// in payload order. Returns the number of entries inserted.
    pub fn paste_above(&mut self, index: usize, text: Option<&str>) -> Result<usize, EditError> {
        self.paste_at(index, text)
    }

    /// Decode `text` and insert every entry after the entry at `index`,
    /// in payload order. Returns the number of entries inserted.
    pub fn paste_below(&mut self, index: usize, text: Option<&str>) -> Result<usize, EditError> {
        let start = index
            .checked_add(1)
            .ok_or(DocumentError::IndexOutOfRange(index))?;
        self.paste_at(start, text)
    }

    fn paste_at(&mut self, start: usize, text: Option<&str>) -> Result<usize, EditError> {
        // Decode fully before touching the document: bad payloads must
        // not leave a partial paste behind.
        let tasks = clipboard::decode_many(text)?;
        if start > self.document.len() {
            return Err(DocumentError::IndexOutOfRange(start).into());
        }

        let mut index = start;
        for task in tasks {
            let inverse = apply(Command::InsertAt { index, entry: task }, &mut self.document)?;
            self.history.push(inverse);
            index += 1;
        }
        let count = index - start;

        // Selection follows the entry it pointed at, which insertions
        // above have shifted down.
        if let Some(selected) = self.selected
            && selected >= start
        {
            self.selected = Some(selected + count);
        }
        Ok(count)
    }

    /// Empty the document in a single undo step; clears the selection
    pub fn clear_all(&mut self) -> Result<(), EditError> {
        if self.document.is_empty() {
            return Ok(());
        }
        let inverse = apply(
            Command::ReplaceAll {
                entries: Vec::new(),
            },
            &mut self.document,
        )?;
        self.history.push(inverse);
        self.selected = None;
        Ok(())
    }

    // --- Field edits (not undoable) ---

    /// Rename the selected task. Never blocks: duplicate names are legal
    /// while editing and only surface through `check_document` or at
    /// export time.
    pub fn rename_selected(&mut self, name: &str) -> Result<(), EditError> {
        let task = self.require_selected_mut()?;
        task.name = name.to_string();
        Ok(())
    }

    /// Feed a capture dialog result into the selected task
    pub fn apply_capture(&mut self, capture: Capture) -> Result<(), EditError> {
        let task = self.require_selected_mut()?;
        apply_capture(task, capture);
        Ok(())
    }

    fn require_selected_mut(&mut self) -> Result<&mut TaskModel, EditError> {
        let index = self.selected.ok_or(EditError::NoSelection)?;
        self.document
            .get_mut(index)
            .ok_or_else(|| DocumentError::IndexOutOfRange(index).into())
    }

    // --- History ---

    /// Undo the most recent structural edit. Returns false on an empty
    /// stack. The selection clears, since the entry it pointed at may
    /// have moved or vanished.
    pub fn undo(&mut self) -> Result<bool, EditError> {
        let undone = self.history.undo(&mut self.document)?;
        if undone {
            self.selected = None;
        }
        Ok(undone)
    }

    /// Redo the most recently undone edit. Returns false on an empty
    /// redo stack.
    pub fn redo(&mut self) -> Result<bool, EditError> {
        let redone = self.history.redo(&mut self.document)?;
        if redone {
            self.selected = None;
        }
        Ok(redone)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
