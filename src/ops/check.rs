use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::config::CheckConfig;
use crate::model::document::PipelineDocument;

/// Structured result of a document validation pass, suitable for JSON output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (something that should be fixed).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Two or more non-blank entries share a name; export will refuse this
    #[serde(rename = "duplicate_name")]
    DuplicateName { name: String, indices: Vec<usize> },
    /// A `next` reference that resolves to no entry, escalated from a
    /// warning by `[check] strict_next`
    #[serde(rename = "dangling_next")]
    DanglingNext { task: String, reference: String },
}

/// A validation warning (non-critical issue).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// A `next` reference that resolves to no entry. Soft references are
    /// legal: the target may live in another file.
    #[serde(rename = "dangling_next")]
    DanglingNext { task: String, reference: String },
    /// Entry with an empty or whitespace-only name
    #[serde(rename = "blank_name")]
    BlankName { index: usize },
}

// ---------------------------------------------------------------------------
// Main check entry point
// ---------------------------------------------------------------------------

/// Validate a document and return structured results.
///
/// Read-only: the document is never modified, and a failing check does not
/// block any edit by itself.
///
/// Checks performed:
/// 1. No duplicate non-blank names (these would fail export)
/// 2. All `next` references resolve to an entry in this document
///    (warnings, or errors when `strict_next` is set)
/// 3. Warnings for blank names
pub fn check_document(document: &PipelineDocument, config: &CheckConfig) -> CheckResult {
    let mut result = CheckResult::default();

    for (name, indices) in find_duplicate_names(document) {
        result.errors.push(CheckError::DuplicateName { name, indices });
    }

    let names: HashSet<&str> = document
        .iter()
        .filter(|t| !t.has_blank_name())
        .map(|t| t.name.as_str())
        .collect();

    for (index, task) in document.iter().enumerate() {
        if task.has_blank_name() {
            result.warnings.push(CheckWarning::BlankName { index });
        }

        let Some(next) = &task.next else { continue };
        for reference in next {
            if names.contains(reference.as_str()) {
                continue;
            }
            if config.strict_next {
                result.errors.push(CheckError::DanglingNext {
                    task: task.name.clone(),
                    reference: reference.clone(),
                });
            } else {
                result.warnings.push(CheckWarning::DanglingNext {
                    task: task.name.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }

    result.valid = result.errors.is_empty();
    result
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Find non-blank names that appear more than once, with the entry indices
/// where each appears, in first-seen order.
fn find_duplicate_names(document: &PipelineDocument) -> Vec<(String, Vec<usize>)> {
    let mut name_to_indices: IndexMap<&str, Vec<usize>> = IndexMap::new();

    for (index, task) in document.iter().enumerate() {
        if task.has_blank_name() {
            continue;
        }
        name_to_indices.entry(&task.name).or_default().push(index);
    }

    name_to_indices
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .map(|(name, indices)| (name.to_string(), indices))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
