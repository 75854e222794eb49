// ============================================================
// Layer 4 — Data Access
// ============================================================
// The placeholder does no data processing. The only thing it
// does with the training channel is list it, so the logs show
// which files the platform mounted.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Lists the entries of the training channel directory
pub mod channel;
