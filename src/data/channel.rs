// ============================================================
// Layer 4 — Training Channel Lister
// ============================================================
// Enumerates the training directory handed to the job.
//
// A missing or unreadable channel is a hard failure; the job
// must not go on to write an artifact.
//
// Every entry is returned, files and subdirectories alike,
// sorted by name so repeated runs log the same order.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::training_file::TrainingFile;
use crate::domain::traits::FileSource;

/// Lists a single training channel directory.
pub struct ChannelLister {
    dir: PathBuf,
}

impl ChannelLister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSource for ChannelLister {
    fn list_files(&self) -> Result<Vec<TrainingFile>> {
        let entries = fs::read_dir(&self.dir).with_context(|| {
            format!("Cannot read training directory '{}'", self.dir.display())
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Cannot read entry in '{}'", self.dir.display())
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push(TrainingFile::new(name, entry.path()));
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!("Found {} entries in '{}'", files.len(), self.dir.display());
        Ok(files)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_files_and_dirs_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.csv"), "1,2").unwrap();
        fs::write(tmp.path().join("a.csv"), "3,4").unwrap();
        fs::create_dir(tmp.path().join("shards")).unwrap();

        let files = ChannelLister::new(tmp.path()).list_files().unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

        assert_eq!(names, vec!["a.csv", "b.csv", "shards"]);
        assert_eq!(files[0].path, tmp.path().join("a.csv"));
    }

    #[test]
    fn test_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let files = ChannelLister::new(tmp.path()).list_files().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not-mounted");

        let err = ChannelLister::new(&missing).list_files().unwrap_err();
        assert!(err.to_string().contains("not-mounted"));
    }

    #[test]
    fn test_file_instead_of_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("train.csv");
        fs::write(&file, "x").unwrap();

        assert!(ChannelLister::new(&file).list_files().is_err());
    }
}
