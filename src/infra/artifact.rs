// ============================================================
// Layer 6 — Model Artifact Writer
// ============================================================
// Saves the placeholder model into the model directory.
//
// What gets saved:
//   {model_dir}/model.dummy   ← contains the text "Dummy model."
//
// The platform uploads whatever is in the model directory
// when the job exits, so this is the job's only output.
// Writing truncates, so re-running leaves the same bytes.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// File name of the placeholder artifact
pub const ARTIFACT_NAME: &str = "model.dummy";

/// Content of the placeholder artifact
pub const ARTIFACT_CONTENT: &str = "Dummy model.";

/// Writes model artifacts into one directory.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the artifact is (or will be) written to
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join(ARTIFACT_NAME)
    }

    /// Create the model directory, including parents, and write
    /// the placeholder artifact. Returns the written path.
    pub fn save_dummy(&self) -> Result<PathBuf> {
        // create_dir_all is a no-op when the directory already exists
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Cannot create model directory '{}'", self.dir.display())
        })?;

        let path = self.artifact_path();
        fs::write(&path, ARTIFACT_CONTENT).with_context(|| {
            format!("Cannot write model artifact to '{}'", path.display())
        })?;

        tracing::debug!("Wrote {} bytes to '{}'", ARTIFACT_CONTENT.len(), path.display());
        Ok(path)
    }
}
