//! Editing core for visual automation pipeline editors.
//!
//! A pipeline file is a JSON mapping of task names to task objects: each
//! task names a recognition step, an action, and the tasks to try next.
//! This crate holds everything such an editor needs short of a UI: the
//! ordered [`model::PipelineDocument`] and its [`model::TaskModel`]
//! entries, lossless JSON conversion in [`codec`], an undo/redo
//! [`session::EditSession`] with clipboard cut/copy/paste, capture-field
//! accumulation and validation in [`ops`], and file round-tripping in
//! [`io`].
//!
//! ```
//! use pipewright::session::EditSession;
//!
//! let mut session = EditSession::new();
//! session.load_document(pipewright::codec::from_json(
//!     r#"{"Start": {"action": "Click", "next": ["Collect"]}}"#,
//! )?);
//!
//! // Duplicate the task via the clipboard payload, then rename the copy.
//! session.select(0)?;
//! let payload = session.copy_selected()?;
//! session.paste_below(0, Some(payload.as_str()))?;
//! session.select(1)?;
//! session.rename_selected("Start2")?;
//!
//! let json = pipewright::codec::to_json(&session.document().export()?)?;
//! assert!(json.contains("Start2"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod io;
pub mod model;
pub mod ops;
pub mod session;
