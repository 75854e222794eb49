// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Touches the outside world on behalf of the other layers:
//
//   env.rs      — Process environment adapter
//                 Implements EnvSource over std::env so the
//                 CLI layer can resolve path fallbacks.
//
//   logging.rs  — tracing-subscriber setup
//                 RUST_LOG overrides the train_stub=info default.
//
//   artifact.rs — Model artifact writer
//                 Creates the model directory (with parents)
//                 and writes the placeholder model file.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Real process environment behind the EnvSource trait
pub mod env;

/// Global log filter and subscriber
pub mod logging;

/// Writes the model.dummy artifact
pub mod artifact;
