// ============================================================
// Layer 3 — TrainingFile Domain Type
// ============================================================
// A single entry found in the training channel directory.
// The placeholder trainer never opens these files; it only
// reports what the platform mounted for it.

use std::path::PathBuf;

/// One directory entry of the training channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingFile {
    /// Entry name as it appears in the directory listing
    pub name: String,

    /// Full path to the entry
    pub path: PathBuf,
}

impl TrainingFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
