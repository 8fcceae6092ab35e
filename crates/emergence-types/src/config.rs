// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{EmergenceError, EmergenceResult};

/// Lower bound of the adaptive threshold.
pub const THRESHOLD_FLOOR: f64 = 0.3;
/// Upper bound of the adaptive threshold.
pub const THRESHOLD_CEILING: f64 = 0.9;
/// Deepest self-model nesting a config may request.
pub const MAX_SELF_REFERENCE_DEPTH: usize = 64;

/// Construction-time configuration for an `EmergenceEngine`.
///
/// Every field is checked by [`EmergenceConfig::validate`]; an engine is
/// never built from a config that fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergenceConfig {
    /// Number of network scales. Sizes grow as `base * 2^scale`.
    /// Default: 3.
    pub num_scales: usize,

    /// Node count of the smallest network. Must exceed `neighbor_k`.
    /// Default: 20.
    pub base_network_size: usize,

    /// Ring-lattice degree before rewiring (even, >= 2).
    /// Default: 4.
    pub neighbor_k: usize,

    /// Probability of rewiring each lattice edge.
    /// Default: 0.3.
    pub rewiring_probability: f64,

    /// Capacity of each temporal memory series.
    /// Default: 20.
    pub memory_depth: usize,

    /// Nesting depth of the self-model (at most 64).
    /// Default: 5.
    pub self_reference_depth: usize,

    /// Fraction of the gap to the target threshold closed per cycle.
    /// Default: 0.1.
    pub adaptation_rate: f64,

    /// Initial adaptive threshold, within [0.3, 0.9].
    /// Default: 0.5.
    pub base_threshold: f64,

    /// Seed for the session generator. `None` draws from OS entropy.
    pub random_seed: Option<u64>,

    /// Nodes sampled for the clustering coefficient.
    /// Default: 10.
    pub clustering_sample_size: usize,

    /// Lower bound of the information-flow scale draw.
    /// Default: 0.8.
    pub flow_scale_min: f64,

    /// Upper bound of the information-flow scale draw.
    /// Default: 1.2.
    pub flow_scale_max: f64,

    /// Meta-awareness above this counts as meta-conscious.
    /// Default: 0.6.
    pub meta_awareness_threshold: f64,

    /// Retained threshold history entries (>= 6).
    /// Default: 256.
    pub threshold_history_len: usize,
}

impl Default for EmergenceConfig {
    fn default() -> Self {
        Self {
            num_scales: 3,
            base_network_size: 20,
            neighbor_k: 4,
            rewiring_probability: 0.3,
            memory_depth: 20,
            self_reference_depth: 5,
            adaptation_rate: 0.1,
            base_threshold: 0.5,
            random_seed: None,
            clustering_sample_size: 10,
            flow_scale_min: 0.8,
            flow_scale_max: 1.2,
            meta_awareness_threshold: 0.6,
            threshold_history_len: 256,
        }
    }
}

impl EmergenceConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Node count of the network at `scale`.
    pub fn network_size(&self, scale: usize) -> usize {
        self.base_network_size << scale
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> EmergenceResult<()> {
        if self.num_scales < 1 {
            return Err(EmergenceError::Config(format!(
                "num_scales must be >= 1, got {}",
                self.num_scales
            )));
        }
        // Keeps base << (num_scales - 1) well inside usize.
        if self.num_scales > 16 {
            return Err(EmergenceError::Config(format!(
                "num_scales must be <= 16, got {}",
                self.num_scales
            )));
        }
        if self.neighbor_k < 2 || self.neighbor_k % 2 != 0 {
            return Err(EmergenceError::Config(format!(
                "neighbor_k must be an even integer >= 2, got {}",
                self.neighbor_k
            )));
        }
        if self.base_network_size <= self.neighbor_k {
            return Err(EmergenceError::Config(format!(
                "base_network_size must be > neighbor_k ({}), got {}",
                self.neighbor_k, self.base_network_size
            )));
        }
        if !(0.0..=1.0).contains(&self.rewiring_probability) {
            return Err(EmergenceError::Config(format!(
                "rewiring_probability must be in [0, 1], got {}",
                self.rewiring_probability
            )));
        }
        if self.memory_depth < 1 {
            return Err(EmergenceError::Config(format!(
                "memory_depth must be >= 1, got {}",
                self.memory_depth
            )));
        }
        if self.self_reference_depth > MAX_SELF_REFERENCE_DEPTH {
            return Err(EmergenceError::Config(format!(
                "self_reference_depth must be <= {MAX_SELF_REFERENCE_DEPTH}, got {}",
                self.self_reference_depth
            )));
        }
        if !(self.adaptation_rate > 0.0 && self.adaptation_rate < 1.0) {
            return Err(EmergenceError::Config(format!(
                "adaptation_rate must be in (0, 1), got {}",
                self.adaptation_rate
            )));
        }
        if !(THRESHOLD_FLOOR..=THRESHOLD_CEILING).contains(&self.base_threshold) {
            return Err(EmergenceError::Config(format!(
                "base_threshold must be in [{THRESHOLD_FLOOR}, {THRESHOLD_CEILING}], got {}",
                self.base_threshold
            )));
        }
        if self.clustering_sample_size < 1 {
            return Err(EmergenceError::Config(format!(
                "clustering_sample_size must be >= 1, got {}",
                self.clustering_sample_size
            )));
        }
        if !self.flow_scale_min.is_finite()
            || !self.flow_scale_max.is_finite()
            || self.flow_scale_min < 0.0
            || self.flow_scale_min > self.flow_scale_max
        {
            return Err(EmergenceError::Config(format!(
                "flow scale range must satisfy 0 <= min <= max, got [{}, {}]",
                self.flow_scale_min, self.flow_scale_max
            )));
        }
        if !(0.0..=1.0).contains(&self.meta_awareness_threshold) {
            return Err(EmergenceError::Config(format!(
                "meta_awareness_threshold must be in [0, 1], got {}",
                self.meta_awareness_threshold
            )));
        }
        if self.threshold_history_len < 6 {
            return Err(EmergenceError::Config(format!(
                "threshold_history_len must be >= 6, got {}",
                self.threshold_history_len
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EmergenceResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EmergenceError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
