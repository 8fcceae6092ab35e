// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Session Stop Signal
// ─────────────────────────────────────────────────────────────────────
//! Cooperative cancellation for long sessions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable stop flag shared between a session and its controller.
///
/// The engine only reads it between cycles, so a raised signal never
/// interrupts a cycle halfway.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    raised: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the session to stop after the current cycle.
    pub fn stop(&self) {
        self.raised.store(true, Ordering::SeqCst);
        log::info!("Stop signal raised");
    }

    pub fn is_stopped(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Lower the flag so the signal can drive another session.
    pub fn clear(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }
}
