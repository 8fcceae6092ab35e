// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Network Layer
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Multi-scale small-world networks and the integration estimator.
//!
//! - NetworkModel / MultiScaleNetworkSet: fixed topology, per-cycle metrics
//! - IntegrationEstimator: connectivity, clustering, path efficiency
//! - IntegrationBackend: seam the engine pulls integration through

pub mod integration;
pub mod network;

pub use integration::{
    ExternalIntegration, IntegrationBackend, IntegrationEstimator, NetworkIntegration,
};
pub use network::{IntegrationSnapshot, MultiScaleNetworkSet, NetworkModel};
