// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Field Observers
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Stateful observers fed once per cycle by the engine.
//!
//! - Temporal memory: bounded history, coherence and momentum
//! - Self-reference: nested self-model and meta-awareness
//! - Threshold: adaptive emergence threshold with phase-transition latch

pub mod memory;
pub mod self_reference;
pub mod threshold;

pub use memory::{MemoryState, TemporalMemory};
pub use self_reference::{build_self_model, SelfModel, SelfReferenceModel, SelfReferenceState};
pub use threshold::{ThresholdConfig, ThresholdController, ThresholdState};
