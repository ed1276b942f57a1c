pub mod edit;
pub mod undo;

pub use edit::{EditError, EditSession};
pub use undo::{Command, UndoStack, apply};
