// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The entry point depends on two outside sources:
//   - the environment, for path fallbacks
//   - a directory of training files
//
// Both sit behind traits so the CLI and use case can be
// exercised in tests without mutating the process
// environment or mounting real training data.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::collections::HashMap;
use std::env::VarError;

use anyhow::Result;
use crate::domain::training_file::TrainingFile;

// ─── EnvSource ────────────────────────────────────────────────────────────────
/// Anything that can answer "what is the value of variable X?".
/// Mirrors std::env::var: unset and non-UTF-8 values are told apart.
///
/// Implementations:
///   - ProcessEnv               → the real process environment
///   - HashMap<String, String>  → fixed values, used in tests
pub trait EnvSource {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

// ─── FileSource ───────────────────────────────────────────────────────────────
/// Any component that can enumerate the training data it was given.
///
/// Implementations:
///   - ChannelLister → lists a local directory
pub trait FileSource {
    /// List every entry available to training.
    fn list_files(&self) -> Result<Vec<TrainingFile>>;
}
