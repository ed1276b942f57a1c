pub mod clipboard;
pub mod pipeline;

pub use clipboard::{ClipboardError, decode_many, encode_one};
pub use pipeline::{CodecError, from_json, to_json, to_json_compact};
