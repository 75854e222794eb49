// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for the training platform. Parses flags with
// clap, resolves environment fallbacks once, and hands the
// finished TrainConfig to Layer 2.
//
// There are no subcommands: the platform invokes the binary
// with flags only, e.g.
//
//   train-stub --model-dir /opt/ml/model --training-dir /data
//
// Reference: Rust Book §12 (Building a CLI Program)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::TrainArgs;

use crate::application::train_use_case::{TrainSummary, TrainUseCase};
use crate::domain::traits::EnvSource;
use crate::infra::env::ProcessEnv;

#[derive(Parser, Debug)]
#[command(
    name = "train-stub",
    version,
    about = "Placeholder training job: lists the training channel and writes a dummy model."
)]
pub struct Cli {
    #[command(flatten)]
    pub train: TrainArgs,
}

impl Cli {
    /// Run against the real process environment.
    pub fn run(self) -> Result<()> {
        let summary = self.run_with_env(&ProcessEnv)?;
        println!(
            "Training complete: {} epochs over {} training entries. Model saved to {}",
            summary.epochs_completed,
            summary.files_listed,
            summary.artifact.display()
        );
        Ok(())
    }

    /// Resolve the config from `env`, then run the training job.
    /// Configuration errors surface here, before any directory is
    /// read or any epoch starts.
    pub fn run_with_env(self, env: &dyn EnvSource) -> Result<TrainSummary> {
        let config = self.train.resolve(env)?;

        tracing::info!(
            "Starting training: channel '{}', model dir '{}'",
            config.training_dir,
            config.model_dir
        );

        TrainUseCase::new(config).execute()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    use crate::domain::error::ConfigError;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["train-stub"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.train.model_dir, None);
        assert_eq!(cli.train.training_dir, None);
        assert_eq!(cli.train.checkpoint_dir, "/opt/ml/checkpoints");
        assert_eq!(cli.train.epochs, 5);
        assert_eq!(cli.train.epoch_delay_ms, 2000);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = parse(&[
            "--model-dir", "/m",
            "--checkpoint-dir", "/c",
            "--training-dir", "/t",
            "--epochs", "3",
            "--epoch-delay-ms", "0",
        ]);
        assert_eq!(cli.train.model_dir.as_deref(), Some("/m"));
        assert_eq!(cli.train.checkpoint_dir, "/c");
        assert_eq!(cli.train.training_dir.as_deref(), Some("/t"));
        assert_eq!(cli.train.epochs, 3);
        assert_eq!(cli.train.epoch_delay_ms, 0);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["train-stub", "--learning-rate", "0.1"]).is_err());
    }

    #[test]
    fn test_end_to_end_from_env() {
        let tmp = tempfile::tempdir().unwrap();
        let train = tmp.path().join("train");
        let model = tmp.path().join("model");
        fs::create_dir(&train).unwrap();
        fs::write(train.join("part-0000"), "x").unwrap();

        let env = HashMap::from([
            ("SM_MODEL_DIR".to_string(), model.to_string_lossy().into_owned()),
            ("SM_CHANNEL_TRAIN".to_string(), train.to_string_lossy().into_owned()),
        ]);

        let summary = parse(&["--epoch-delay-ms", "0"]).run_with_env(&env).unwrap();
        assert_eq!(summary.files_listed, 1);
        assert_eq!(fs::read_to_string(model.join("model.dummy")).unwrap(), "Dummy model.");
    }

    #[test]
    fn test_missing_env_fails_before_training() {
        let tmp = tempfile::tempdir().unwrap();
        let model = tmp.path().join("model");

        // No --training-dir and no SM_CHANNEL_TRAIN
        let cli = parse(&[
            "--model-dir", model.to_str().unwrap(),
            "--epoch-delay-ms", "0",
        ]);
        let err = cli.run_with_env(&HashMap::new()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingEnv { flag: "--training-dir", var: "SM_CHANNEL_TRAIN" })
        );
        assert!(!model.exists());
    }

    #[test]
    fn test_missing_training_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        let model = tmp.path().join("model");

        let cli = parse(&[
            "--model-dir", model.to_str().unwrap(),
            "--training-dir", missing.to_str().unwrap(),
            "--epoch-delay-ms", "0",
        ]);
        assert!(cli.run_with_env(&HashMap::new()).is_err());
        assert!(!model.exists());
    }
}
