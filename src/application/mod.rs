// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one training job.
//
// Rules for this layer:
//   - No clap types (that's Layer 1)
//   - No environment access; the config arrives resolved
//   - No direct file access (that's Layers 4 and 6)
//   - Only workflow coordination

// The training workflow
pub mod train_use_case;
