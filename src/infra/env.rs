// ============================================================
// Layer 6 — Process Environment
// ============================================================
// The only place the crate reads std::env. Everything below
// the CLI layer receives already-resolved values.

use std::env::{self, VarError};

use crate::domain::traits::EnvSource;

/// Environment variable holding the model output directory
pub const MODEL_DIR_VAR: &str = "SM_MODEL_DIR";

/// Environment variable holding the training channel directory
pub const TRAINING_DIR_VAR: &str = "SM_CHANNEL_TRAIN";

/// Reads variables from the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}
