use serde::{Deserialize, Serialize};

/// Configuration from pipewright.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub save: SaveConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Oldest undo steps are discarded past this depth
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            undo_limit: default_undo_limit(),
        }
    }
}

fn default_undo_limit() -> usize {
    500
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Write single-line JSON instead of the indented default
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Report unresolved `next` references as errors instead of warnings
    #[serde(default)]
    pub strict_next: bool,
}
