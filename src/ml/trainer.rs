// ============================================================
// Layer 5 — Placeholder Training Loop
// ============================================================
// Runs a fixed number of "epochs", each of which only logs
// and sleeps. No retry, no cancellation: it does no work.

use std::{thread, time::Duration};

/// Run `epochs` placeholder epochs, pausing `delay` in each.
/// Returns the number of epochs completed.
pub fn run_training(epochs: usize, delay: Duration) -> usize {
    let mut completed = 0;

    for epoch in 0..epochs {
        tracing::info!("Running epoch {}...", epoch);
        thread::sleep(delay);
        tracing::info!("Completed epoch {}.", epoch);
        completed += 1;
    }

    completed
}
