// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Runs one training job in order:
//
//   Step 1: Log the resolved config          (serde_json)
//   Step 2: List the training channel        (Layer 4 - data)
//   Step 3: Run the placeholder epochs       (Layer 5 - ml)
//   Step 4: Write the model artifact         (Layer 6 - infra)
//
// Any failure stops the job; nothing is retried.

use anyhow::Result;
use serde::Serialize;
use std::{path::PathBuf, time::Duration};

use crate::data::channel::ChannelLister;
use crate::domain::traits::FileSource;
use crate::infra::artifact::ArtifactWriter;
use crate::ml::trainer::run_training;

/// Checkpoint directory used when --checkpoint-dir is not given
pub const DEFAULT_CHECKPOINT_DIR: &str = "/opt/ml/checkpoints";

/// Number of placeholder epochs used when --epochs is not given
pub const DEFAULT_EPOCHS: usize = 5;

/// Pause per placeholder epoch used when --epoch-delay-ms is not given
pub const DEFAULT_EPOCH_DELAY_MS: u64 = 2000;

// ─── Training Configuration ──────────────────────────────────────────────────
// Fully resolved settings for a training run. Built once by the
// CLI layer; nothing below it reads flags or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainConfig {
    pub model_dir:      String,
    pub checkpoint_dir: String,
    pub training_dir:   String,
    pub epochs:         usize,
    pub epoch_delay_ms: u64,
}

impl TrainConfig {
    pub fn epoch_delay(&self) -> Duration {
        Duration::from_millis(self.epoch_delay_ms)
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSummary {
    pub files_listed:     usize,
    pub epochs_completed: usize,
    pub artifact:         PathBuf,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the training job end to end
    pub fn execute(&self) -> Result<TrainSummary> {
        let cfg = &self.config;

        // ── Step 1: Report what we were given ────────────────────────────────
        tracing::info!("Resolved config: {}", serde_json::to_string(cfg)?);
        tracing::debug!("Checkpoint directory '{}' is unused", cfg.checkpoint_dir);

        // ── Step 2: List the training channel ────────────────────────────────
        let files = ChannelLister::new(&cfg.training_dir).list_files()?;
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        tracing::info!("Listing training files: {:?}", names);
        for file in &files {
            tracing::debug!("  {}", file.path.display());
        }

        // ── Step 3: Placeholder training loop ────────────────────────────────
        let epochs_completed = run_training(cfg.epochs, cfg.epoch_delay());

        // ── Step 4: Save the model artifact ──────────────────────────────────
        let artifact = ArtifactWriter::new(&cfg.model_dir).save_dummy()?;
        tracing::info!("Saved model artifact to '{}'", artifact.display());

        Ok(TrainSummary {
            files_listed: files.len(),
            epochs_completed,
            artifact,
        })
    }
}
