// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Cyclic field-level estimator.
//!
//! Each cycle fuses network integration, self-reference, temporal
//! coherence, momentum and an adaptive threshold into one bounded field
//! level, classifies it, and latches the first cycle the level clears
//! the threshold.
//!
//! Architecture:
//!   - IntegrationBackend: per-cycle integration (networks or external)
//!   - TemporalMemory / SelfReferenceModel / ThresholdController: observers
//!   - EmergenceEngine: 10-step cycle and session loop
//!   - StopSignal: cooperative cancellation between cycles

pub mod engine;
pub mod session;

pub use engine::EmergenceEngine;
pub use session::StopSignal;

pub use emergence_network::{ExternalIntegration, IntegrationBackend, NetworkIntegration};
pub use emergence_types::{EmergenceConfig, EmergenceError, FieldRecord, FieldState, SessionSummary};
