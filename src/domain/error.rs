// ============================================================
// Layer 3 — Configuration Errors
// ============================================================
// Raised while turning CLI flags and environment variables
// into a TrainConfig. Everything else (I/O failures while
// listing or writing) travels as anyhow::Error with context.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The flag was not given and its fallback variable is unset
    #[error("{flag} not given and environment variable {var} is not set")]
    MissingEnv {
        flag: &'static str,
        var:  &'static str,
    },

    /// The flag was not given and its fallback variable is not valid UTF-8
    #[error("{flag} not given and environment variable {var} is not valid UTF-8")]
    NotUnicode {
        flag: &'static str,
        var:  &'static str,
    },

    /// The path resolved to an empty string
    #[error("{flag} must not be empty")]
    EmptyPath { flag: &'static str },
}
