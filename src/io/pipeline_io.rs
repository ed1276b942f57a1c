use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

use crate::codec::pipeline::{self, CodecError};
use crate::model::document::{DocumentError, PipelineDocument};
use crate::model::task::TaskModel;

/// Error type for pipeline file I/O
#[derive(Debug, thiserror::Error)]
pub enum PipelineIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Read a pipeline file into its mapping form, preserving task order
pub fn load_pipeline(path: &Path) -> Result<IndexMap<String, TaskModel>, PipelineIoError> {
    let text = fs::read_to_string(path).map_err(|e| PipelineIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(pipeline::from_json(&text)?)
}

/// Export the document and write it to `path`.
///
/// Export is all-or-nothing: a duplicate name aborts before anything
/// touches disk, and the write itself goes through a temp file + rename
/// so a failure never truncates the previous file.
pub fn save_pipeline(
    path: &Path,
    document: &PipelineDocument,
    compact: bool,
) -> Result<(), PipelineIoError> {
    let mapping = document.export()?;
    let json = if compact {
        pipeline::to_json_compact(&mapping)?
    } else {
        pipeline::to_json(&mapping)?
    };
    atomic_write(path, json.as_bytes()).map_err(|e| PipelineIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_json() -> &'static str {
        r#"{
  "StartBattle": {
    "recognition": "TemplateMatch",
    "action": "Click",
    "next": [
      "CollectReward"
    ]
  },
  "CollectReward": {
    "action": "Click",
    "timeout": 20000
  }
}"#
    }

    #[test]
    fn test_load_preserves_order_and_extras() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pipeline.json");
        fs::write(&path, sample_json()).unwrap();

        let mapping = load_pipeline(&path).unwrap();
        let names: Vec<&String> = mapping.keys().collect();
        assert_eq!(names, vec!["StartBattle", "CollectReward"]);
        assert_eq!(
            mapping["CollectReward"].extra["timeout"],
            serde_json::json!(20000)
        );
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_pipeline(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(PipelineIoError::ReadError { .. })));
    }

    #[test]
    fn test_load_malformed_file_is_codec_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(
            load_pipeline(&path),
            Err(PipelineIoError::Codec(_))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pipeline.json");
        fs::write(&path, sample_json()).unwrap();

        let mut document = PipelineDocument::new();
        document.load(load_pipeline(&path).unwrap());

        let out = tmp.path().join("saved.json");
        save_pipeline(&out, &document, false).unwrap();

        let reloaded = load_pipeline(&out).unwrap();
        let mut reloaded_doc = PipelineDocument::new();
        reloaded_doc.load(reloaded);
        assert_eq!(reloaded_doc, document);
    }

    #[test]
    fn test_stale_inner_name_is_dropped_on_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pipeline.json");
        fs::write(
            &path,
            r#"{
  "StartBattle": {
    "timeout": 20000,
    "name": "Impostor",
    "action": "Click"
  }
}"#,
        )
        .unwrap();

        let mut document = PipelineDocument::new();
        document.load(load_pipeline(&path).unwrap());
        assert_eq!(document.get(0).unwrap().name, "StartBattle");

        // The stray inner name is gone; the other foreign field survives
        let out = tmp.path().join("saved.json");
        save_pipeline(&out, &document, false).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            r#"{
  "StartBattle": {
    "action": "Click",
    "timeout": 20000
  }
}"#
        );
    }

    #[test]
    fn test_save_compact_is_single_line() {
        let tmp = TempDir::new().unwrap();
        let mut document = PipelineDocument::new();
        document.push(TaskModel::named("Start"));

        let path = tmp.path().join("compact.json");
        save_pipeline(&path, &document, true).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"Start":{}}"#);
    }

    #[test]
    fn test_save_duplicate_names_leaves_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pipeline.json");
        fs::write(&path, sample_json()).unwrap();

        let mut document = PipelineDocument::new();
        document.push(TaskModel::named("Twice"));
        document.push(TaskModel::named("Twice"));

        let result = save_pipeline(&path, &document, false);
        assert!(matches!(
            result,
            Err(PipelineIoError::Document(DocumentError::DuplicateName { .. }))
        ));
        // The existing file did not change
        assert_eq!(fs::read_to_string(&path).unwrap(), sample_json());
    }

    #[test]
    fn test_save_overwrites_atomically() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pipeline.json");
        fs::write(&path, "{}").unwrap();

        let mut document = PipelineDocument::new();
        document.push(TaskModel::named("Start"));
        save_pipeline(&path, &document, false).unwrap();

        let mapping = load_pipeline(&path).unwrap();
        assert!(mapping.contains_key("Start"));
        // No temp file debris in the directory
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
