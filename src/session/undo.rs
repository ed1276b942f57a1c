use crate::model::document::{DocumentError, PipelineDocument};
use crate::model::task::TaskModel;

const DEFAULT_UNDO_LIMIT: usize = 500;

/// A single structural edit, expressed so that applying it yields the
/// command that reverses it. Field-level edits are not commands: they
/// never shift indices, so the stacks stay valid across them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert `entry` at `index`, shifting later entries down
    InsertAt { index: usize, entry: TaskModel },
    /// Remove the entry at `index`
    RemoveAt { index: usize },
    /// Swap in an entire new sequence
    ReplaceAll { entries: Vec<TaskModel> },
}

/// Apply a command to the document, returning its inverse.
///
/// Every structural mutation in an edit session funnels through here, so
/// undo and redo are the same operation walking opposite directions. An
/// index error leaves the document untouched.
pub fn apply(command: Command, document: &mut PipelineDocument) -> Result<Command, DocumentError> {
    match command {
        Command::InsertAt { index, entry } => {
            document.insert_at(index, entry)?;
            Ok(Command::RemoveAt { index })
        }
        Command::RemoveAt { index } => {
            let entry = document.remove_at(index)?;
            Ok(Command::InsertAt { index, entry })
        }
        Command::ReplaceAll { entries } => {
            let prior = document.replace_all(entries);
            Ok(Command::ReplaceAll { entries: prior })
        }
    }
}

/// The undo/redo stack
pub struct UndoStack {
    undo: Vec<Command>,
    redo: Vec<Command>,
    limit: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    /// A stack that keeps at most `limit` undo steps, discarding the
    /// oldest past that depth
    pub fn with_limit(limit: usize) -> Self {
        UndoStack {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record the inverse of a forward mutation. Clears the redo stack.
    pub fn push(&mut self, inverse: Command) {
        self.undo.push(inverse);
        if self.undo.len() > self.limit {
            self.undo.drain(..self.undo.len() - self.limit);
        }
        self.redo.clear();
    }

    /// Undo the most recent step. Returns false when there is nothing to
    /// undo. An index error here means the stacks have drifted from the
    /// document, which a session never allows.
    pub fn undo(&mut self, document: &mut PipelineDocument) -> Result<bool, DocumentError> {
        let Some(command) = self.undo.pop() else {
            return Ok(false);
        };
        let inverse = apply(command, document)?;
        self.redo.push(inverse);
        Ok(true)
    }

    /// Redo the most recently undone step. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self, document: &mut PipelineDocument) -> Result<bool, DocumentError> {
        let Some(command) = self.redo.pop() else {
            return Ok(false);
        };
        let inverse = apply(command, document)?;
        self.undo.push(inverse);
        Ok(true)
    }

    /// Drop all recorded steps in both directions
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Peek at the last command on the undo stack
    pub fn peek_last_undo(&self) -> Option<&Command> {
        self.undo.last()
    }

    /// Peek at the last command on the redo stack (just pushed during undo)
    pub fn peek_last_redo(&self) -> Option<&Command> {
        self.redo.last()
    }
}
