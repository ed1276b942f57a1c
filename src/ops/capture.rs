use crate::model::task::{Point, Rect, TaskModel};

/// A value produced by one of the modal capture dialogs. A cancelled
/// dialog produces no capture at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Capture {
    /// Recognition region, accumulates into `roi`
    Region(Rect),
    /// Action target, overwrites `target`
    Target(Rect),
    /// Template image path, accumulates into `template`
    Template(String),
    /// Swipe gesture endpoints, overwrite `begin` and `end` together
    Swipe { begin: Point, end: Point },
    /// Color extraction bounds, overwrite `upper` and `lower` together
    ColorRange { upper: Vec<i32>, lower: Vec<i32> },
    /// Recognized text, accumulates into `expected`
    Text(String),
}

/// Feed one capture result into a task.
///
/// `roi`, `template`, and `expected` follow the set-or-append rule: an
/// empty field takes the value as its single entry, a populated field
/// grows into a list. The point and range fields are last-write-wins.
/// Blank strings are dropped rather than stored as empty entries.
pub fn apply_capture(task: &mut TaskModel, capture: Capture) {
    match capture {
        Capture::Region(rect) => task.roi.push(rect),
        Capture::Target(rect) => task.target = Some(rect),
        Capture::Template(path) => {
            if !path.trim().is_empty() {
                task.template.push(path);
            }
        }
        Capture::Swipe { begin, end } => {
            task.begin = Some(begin);
            task.end = Some(end);
        }
        Capture::ColorRange { upper, lower } => {
            task.upper = Some(upper);
            task.lower = Some(lower);
        }
        Capture::Text(text) => {
            if !text.trim().is_empty() {
                task.expected.push(text);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
