// ============================================================
// Layer 5 — Training
// ============================================================
// Stand-in for a real training loop. Replace trainer.rs with
// actual model code; the entry point contract around it
// (config resolution, channel listing, artifact write) stays.

/// Placeholder epoch loop
pub mod trainer;
