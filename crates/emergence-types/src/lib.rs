// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! emergence kernel, a cyclic field-level estimator.

pub mod config;
pub mod error;
pub mod record;

pub use config::EmergenceConfig;
pub use error::{EmergenceError, EmergenceResult};
pub use record::{clamp_unit, FieldRecord, FieldState, SessionSummary, SignalSnapshot, PHI};
