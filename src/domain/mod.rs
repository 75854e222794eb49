// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what the training
// entry point works with:
//
//   - the files found in the training channel
//   - the configuration errors raised while resolving paths
//   - the abstractions other layers implement
//
// Rules for this layer:
//   - NO file I/O or environment access
//   - NO clap types
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One entry of the training channel listing
pub mod training_file;

// Configuration errors raised before training starts
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
