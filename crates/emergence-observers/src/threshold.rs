// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Adaptive Threshold Controller
// ─────────────────────────────────────────────────────────────────────
//! Adaptive emergence threshold with damped convergence and
//! phase-transition detection.
//!
//!   capability = (field_strength + integration + self_reference) / 3
//!   target     = min(1.05 θ, 0.9)   if capability > θ
//!              = max(0.95 θ, 0.3)   otherwise
//!   θ         += (target - θ) · adaptation_rate
//!
//! A phase transition latches once |θ - θ[-5]| exceeds 0.1.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use emergence_types::config::{THRESHOLD_CEILING, THRESHOLD_FLOOR};
use emergence_types::EmergenceConfig;

/// Threshold change over the detection window that counts as a transition.
pub const PHASE_TRANSITION_DELTA: f64 = 0.1;
/// History entries looked back over when detecting a transition.
pub const PHASE_WINDOW: usize = 5;

/// Threshold controller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub base_threshold: f64,
    pub adaptation_rate: f64,
    pub history_len: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::from(&EmergenceConfig::default())
    }
}

impl From<&EmergenceConfig> for ThresholdConfig {
    fn from(config: &EmergenceConfig) -> Self {
        Self {
            base_threshold: config.base_threshold,
            adaptation_rate: config.adaptation_rate,
            history_len: config.threshold_history_len,
        }
    }
}

/// Threshold controller state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdState {
    pub current_threshold: f64,
    pub history_len: usize,
    pub phase_transition_detected: bool,
    pub phase_transition_strength: f64,
}

/// Adaptive threshold with hysteresis around system capability.
pub struct ThresholdController {
    cfg: ThresholdConfig,
    current: f64,
    history: VecDeque<f64>,
    phase_transition_detected: bool,
}

impl ThresholdController {
    pub fn new(config: ThresholdConfig) -> Self {
        let current = config.base_threshold.clamp(THRESHOLD_FLOOR, THRESHOLD_CEILING);
        Self {
            history: VecDeque::with_capacity(config.history_len.min(1024)),
            cfg: config,
            current,
            phase_transition_detected: false,
        }
    }

    pub fn default_params() -> Self {
        Self::new(ThresholdConfig::default())
    }

    /// Move the threshold one damped step toward its capability target.
    ///
    /// Returns the updated threshold, always within [0.3, 0.9].
    pub fn update_threshold(
        &mut self,
        field_strength: f64,
        integration: f64,
        self_reference: f64,
    ) -> f64 {
        let capability = (field_strength + integration + self_reference) / 3.0;

        let target = if capability > self.current {
            (self.current * 1.05).min(THRESHOLD_CEILING)
        } else {
            (self.current * 0.95).max(THRESHOLD_FLOOR)
        };

        self.current += (target - self.current) * self.cfg.adaptation_rate;
        self.current = self.current.clamp(THRESHOLD_FLOOR, THRESHOLD_CEILING);

        let n = self.history.len();
        if n > PHASE_WINDOW && !self.phase_transition_detected {
            let recent_change = (self.current - self.history[n - PHASE_WINDOW]).abs();
            if recent_change > PHASE_TRANSITION_DELTA {
                self.phase_transition_detected = true;
                log::info!(
                    "Phase transition detected: threshold moved {recent_change:.4} over {PHASE_WINDOW} cycles"
                );
            }
        }

        self.history.push_back(self.current);
        if self.history.len() > self.cfg.history_len {
            self.history.pop_front();
        }

        self.current
    }

    /// Amplified last step size, in [0, 1]; 0 until a transition latches.
    pub fn phase_transition_strength(&self) -> f64 {
        let n = self.history.len();
        if !self.phase_transition_detected || n < 2 {
            return 0.0;
        }
        let recent_change = (self.history[n - 1] - self.history[n - 2]).abs();
        (recent_change * 5.0).min(1.0)
    }

    pub fn current_threshold(&self) -> f64 {
        self.current
    }

    pub fn phase_transition_detected(&self) -> bool {
        self.phase_transition_detected
    }

    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    pub fn get_state(&self) -> ThresholdState {
        ThresholdState {
            current_threshold: self.current,
            history_len: self.history.len(),
            phase_transition_detected: self.phase_transition_detected,
            phase_transition_strength: self.phase_transition_strength(),
        }
    }

    /// Restore the base threshold and clear history and latch.
    pub fn reset(&mut self) {
        self.current = self.cfg.base_threshold.clamp(THRESHOLD_FLOOR, THRESHOLD_CEILING);
        self.history.clear();
        self.phase_transition_detected = false;
    }
}
