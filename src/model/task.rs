use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rectangle in screen coordinates, persisted as `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<[i32; 4]> for Rect {
    fn from([x, y, width, height]: [i32; 4]) -> Self {
        Rect::new(x, y, width, height)
    }
}

impl From<Rect> for [i32; 4] {
    fn from(rect: Rect) -> Self {
        [rect.x, rect.y, rect.width, rect.height]
    }
}

/// A point in screen coordinates, persisted as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [i32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// A pipeline field holding nothing, a single value, or an ordered list.
///
/// The wire format writes such fields as either a bare value or an array;
/// `Empty` is the never-serialized absent state. Deserialization tries the
/// bare form before the list form, so `[1, 2, 3, 4]` reads as one `Rect`
/// while `[[1, 2, 3, 4]]` reads as a list of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Empty,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Empty
    }
}

impl<T> OneOrMany<T> {
    /// True when no value is held (absent, or an empty list)
    pub fn is_empty(&self) -> bool {
        match self {
            OneOrMany::Empty => true,
            OneOrMany::One(_) => false,
            OneOrMany::Many(items) => items.is_empty(),
        }
    }

    /// Number of held values
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Empty => 0,
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// Set-or-append: an empty field takes the value as its single entry,
    /// a single entry widens to a list of two, a list grows at the end.
    pub fn push(&mut self, value: T) {
        *self = match std::mem::take(self) {
            OneOrMany::Empty => OneOrMany::One(value),
            OneOrMany::One(existing) => OneOrMany::Many(vec![existing, value]),
            OneOrMany::Many(mut items) => {
                items.push(value);
                OneOrMany::Many(items)
            }
        };
    }

    /// View the held values as a slice
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Empty => &[],
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

/// One pipeline node: a recognition step, an action, successor links, and
/// the capture parameters the edit dialogs fill in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskModel {
    /// Task name. Persisted as the mapping key, never inside the value
    /// object; the key is authoritative on load.
    #[serde(skip)]
    pub name: String,
    /// Recognition category (free-form, e.g. `TemplateMatch`, `OCR`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognition: Option<String>,
    /// Action category (free-form, e.g. `Click`, `Swipe`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Successor task names. Soft references: they need not resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<String>>,
    /// Recognition region(s) of interest
    #[serde(default, skip_serializing_if = "OneOrMany::is_empty")]
    pub roi: OneOrMany<Rect>,
    /// Action target rectangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Rect>,
    /// Template image path(s)
    #[serde(default, skip_serializing_if = "OneOrMany::is_empty")]
    pub template: OneOrMany<String>,
    /// Swipe start point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<Point>,
    /// Swipe end point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Point>,
    /// Upper color bound per channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<Vec<i32>>,
    /// Lower color bound per channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<Vec<i32>>,
    /// Expected text(s) for OCR recognition
    #[serde(default, skip_serializing_if = "OneOrMany::is_empty")]
    pub expected: OneOrMany<String>,

    /// Fields this editor does not model, preserved verbatim across
    /// load and save
    #[serde(flatten, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, Value>,
}

impl TaskModel {
    /// Create an empty task with the given name
    pub fn named(name: &str) -> Self {
        TaskModel {
            name: name.to_string(),
            ..TaskModel::default()
        }
    }

    /// Stamp the authoritative name from a mapping key, dropping any
    /// stray `name` key that rode into `extra` so it cannot re-serialize
    /// and contradict the key.
    pub fn stamp_name(&mut self, name: String) {
        self.name = name;
        self.extra.shift_remove("name");
    }

    /// True when the name is empty or whitespace-only. Blank-named tasks
    /// are tolerated in a document but flagged by validation.
    pub fn has_blank_name(&self) -> bool {
        self.name.trim().is_empty()
    }
}
