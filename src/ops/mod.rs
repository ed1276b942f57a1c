pub mod capture;
pub mod check;
pub mod search;

pub use capture::{Capture, apply_capture};
pub use check::{CheckError, CheckResult, CheckWarning, check_document};
pub use search::{filter, matches_query};
