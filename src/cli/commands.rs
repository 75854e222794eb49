// ============================================================
// Layer 1 — Training Arguments
// ============================================================
// The flags the platform passes to the job, and how they are
// turned into a TrainConfig.
//
// Path flags are Option<String> rather than clap defaults:
// two of them fall back to environment variables, and that
// lookup goes through an EnvSource so it can be tested with
// a fixed map instead of the real process environment.

use clap::Args;
use std::env::VarError;

use crate::application::train_use_case::{
    TrainConfig, DEFAULT_CHECKPOINT_DIR, DEFAULT_EPOCHS, DEFAULT_EPOCH_DELAY_MS,
};
use crate::domain::error::ConfigError;
use crate::domain::traits::EnvSource;
use crate::infra::env::{MODEL_DIR_VAR, TRAINING_DIR_VAR};

/// All arguments for a training run.
#[derive(Args, Debug, Default)]
pub struct TrainArgs {
    /// Directory to write the model artifact to [default: $SM_MODEL_DIR]
    #[arg(long)]
    pub model_dir: Option<String>,

    /// Directory reserved for intermediate training state (unused)
    #[arg(long, default_value = DEFAULT_CHECKPOINT_DIR)]
    pub checkpoint_dir: String,

    /// Directory containing the training data [default: $SM_CHANNEL_TRAIN]
    #[arg(long)]
    pub training_dir: Option<String>,

    /// Number of placeholder epochs to run
    #[arg(long, default_value_t = DEFAULT_EPOCHS)]
    pub epochs: usize,

    /// Pause inside each placeholder epoch, in milliseconds
    #[arg(long, default_value_t = DEFAULT_EPOCH_DELAY_MS)]
    pub epoch_delay_ms: u64,
}

impl TrainArgs {
    /// Apply environment fallbacks and validate the paths.
    /// This is the boundary between Layer 1 and Layer 2 —
    /// the application layer never sees clap types or env vars.
    pub fn resolve(self, env: &dyn EnvSource) -> Result<TrainConfig, ConfigError> {
        let model_dir = flag_or_env(self.model_dir, "--model-dir", MODEL_DIR_VAR, env)?;
        let training_dir =
            flag_or_env(self.training_dir, "--training-dir", TRAINING_DIR_VAR, env)?;
        let checkpoint_dir = non_empty(self.checkpoint_dir, "--checkpoint-dir")?;

        Ok(TrainConfig {
            model_dir,
            checkpoint_dir,
            training_dir,
            epochs:         self.epochs,
            epoch_delay_ms: self.epoch_delay_ms,
        })
    }
}

fn flag_or_env(
    flag_value: Option<String>,
    flag:       &'static str,
    var:        &'static str,
    env:        &dyn EnvSource,
) -> Result<String, ConfigError> {
    let value = match flag_value {
        Some(v) => v,
        None => env.var(var).map_err(|e| match e {
            VarError::NotPresent => ConfigError::MissingEnv { flag, var },
            VarError::NotUnicode(_) => ConfigError::NotUnicode { flag, var },
        })?,
    };
    non_empty(value, flag)
}

fn non_empty(value: String, flag: &'static str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyPath { flag });
    }
    Ok(value)
}
