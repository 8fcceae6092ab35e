// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Engine (Cycle Aggregator)
// ─────────────────────────────────────────────────────────────────────
//! Ten-step field cycle:
//!   1. Pull integration from the backend
//!   2. Quantum proxies: qc = min(1, 1.2 I), qe = min(1, 0.8 I)
//!   3. Self-reference from the previous level and field strength
//!   4. Temporal memory: append, coherence, momentum
//!   5. Threshold update and phase-transition strength
//!   6. Field strength
//!   7. Field level
//!   8. State classification
//!   9. Emergence latch (level > threshold)
//!   10. Peak tracking and record append
//!
//! Level and field strength carry over from the previous cycle; the
//! observers and the threshold always see the values before this
//! cycle's update.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use emergence_network::{IntegrationBackend, NetworkIntegration};
use emergence_observers::{SelfReferenceModel, TemporalMemory, ThresholdConfig, ThresholdController};
use emergence_types::{
    clamp_unit, EmergenceConfig, EmergenceResult, FieldRecord, FieldState, SessionSummary,
    SignalSnapshot, PHI,
};

use crate::session::StopSignal;

const LEVEL_SCALE: f64 = PHI / 2.0;

const W_SELF_REFERENCE: f64 = 1.5;
const W_COHERENCE: f64 = 0.3;
const W_QUANTUM: f64 = 0.4;
const W_PHASE: f64 = 0.5;
const W_MOMENTUM: f64 = 0.2;

/// Cyclic field-level estimator. Owns every observer and the session
/// history; one engine per session.
pub struct EmergenceEngine {
    cfg: EmergenceConfig,
    rng: StdRng,
    backend: Box<dyn IntegrationBackend>,
    memory: TemporalMemory,
    self_reference: SelfReferenceModel,
    threshold: ThresholdController,
    level: f64,
    field_strength: f64,
    peak_level: f64,
    emergence_cycle: Option<usize>,
    records: Vec<FieldRecord>,
    elapsed_s: f64,
    cancelled: bool,
}

impl EmergenceEngine {
    /// Validate `config` and build the default multi-scale network backend.
    pub fn new(config: EmergenceConfig) -> EmergenceResult<Self> {
        config.validate()?;
        let mut rng = session_rng(&config);
        let backend = NetworkIntegration::new(&config, &mut rng)?;
        log::info!(
            "Built {} network scales (base size {}, k={}, p={:.2})",
            config.num_scales,
            config.base_network_size,
            config.neighbor_k,
            config.rewiring_probability
        );
        Ok(Self::assemble(config, rng, Box::new(backend)))
    }

    /// Validate `config` and use `backend` as the integration source.
    pub fn with_backend(
        config: EmergenceConfig,
        backend: Box<dyn IntegrationBackend>,
    ) -> EmergenceResult<Self> {
        config.validate()?;
        let rng = session_rng(&config);
        Ok(Self::assemble(config, rng, backend))
    }

    pub fn default_params() -> EmergenceResult<Self> {
        Self::new(EmergenceConfig::default())
    }

    fn assemble(cfg: EmergenceConfig, rng: StdRng, backend: Box<dyn IntegrationBackend>) -> Self {
        log::info!(
            "Emergence engine ready: memory depth {}, self-reference depth {}, base threshold {:.2}, seed {:?}",
            cfg.memory_depth,
            cfg.self_reference_depth,
            cfg.base_threshold,
            cfg.random_seed
        );
        Self {
            memory: TemporalMemory::new(cfg.memory_depth),
            self_reference: SelfReferenceModel::new(
                cfg.self_reference_depth,
                cfg.meta_awareness_threshold,
            ),
            threshold: ThresholdController::new(ThresholdConfig::from(&cfg)),
            rng,
            backend,
            level: 0.0,
            field_strength: 0.0,
            peak_level: 0.0,
            emergence_cycle: None,
            records: Vec::new(),
            elapsed_s: 0.0,
            cancelled: false,
            cfg,
        }
    }

    /// Run one cycle and append its record.
    pub fn step(&mut self) -> &FieldRecord {
        let cycle_index = self.records.len();

        // 1. Integration
        let integration = clamp_unit(self.backend.integrate(cycle_index, &mut self.rng));

        // 2. Quantum proxies
        let quantum_coherence = (integration * 1.2).min(1.0);
        let quantum_entanglement = (integration * 0.8).min(1.0);

        // 3. Self-reference on the pre-update snapshot
        let snapshot = SignalSnapshot {
            level: self.level,
            field_strength: self.field_strength,
            integration,
        };
        let self_reference = self.self_reference.self_reference_strength(Some(&snapshot));

        // 4. Temporal memory
        self.memory
            .add_state(self.level, self.field_strength, integration, self_reference);
        let temporal_coherence = self.memory.temporal_coherence();
        let momentum = self.memory.momentum();

        // 5. Threshold
        let threshold = self
            .threshold
            .update_threshold(self.field_strength, integration, self_reference);
        let phase_transition_strength = self.threshold.phase_transition_strength();

        // 6. Field strength
        let field_strength =
            ((integration + self_reference + temporal_coherence) / 3.0 * LEVEL_SCALE).min(1.0);

        // 7. Field level
        let raw_level = integration
            + W_SELF_REFERENCE * self_reference
            + W_COHERENCE * temporal_coherence
            + W_QUANTUM * quantum_coherence * quantum_entanglement
            + W_PHASE * phase_transition_strength
            + W_MOMENTUM * momentum;
        let level = clamp_unit(raw_level * LEVEL_SCALE);

        // 8. Classification
        let state = FieldState::classify(level);

        // 9. Emergence latch
        if self.emergence_cycle.is_none() && level > threshold {
            self.emergence_cycle = Some(cycle_index);
            log::info!(
                "Emergence at cycle {cycle_index}: level {level:.4} > threshold {threshold:.4} ({state})"
            );
        }

        // 10. Peak and record
        self.peak_level = self.peak_level.max(level);
        self.level = level;
        self.field_strength = field_strength;

        log::debug!(
            "cycle {cycle_index}: level={level:.4} threshold={threshold:.4} state={state}"
        );

        self.records.push(FieldRecord {
            cycle_index,
            level,
            field_strength,
            integration,
            quantum_coherence,
            quantum_entanglement,
            self_reference,
            temporal_coherence,
            momentum,
            threshold,
            phase_transition_strength,
            state,
            meta_awareness: self.self_reference.meta_awareness_level(),
            emerged: self.emergence_cycle.is_some(),
            emergence_cycle: self.emergence_cycle,
        });
        &self.records[cycle_index]
    }

    /// Run `cycles` cycles and summarise the whole session.
    pub fn run(&mut self, cycles: usize) -> SessionSummary {
        self.run_until(cycles, &StopSignal::new())
    }

    /// Run up to `cycles` cycles, checking `stop` before each one.
    ///
    /// A stopped session still returns a valid summary over the cycles
    /// that completed.
    pub fn run_until(&mut self, cycles: usize, stop: &StopSignal) -> SessionSummary {
        let start = Instant::now();
        self.cancelled = false;
        self.records.reserve(cycles);

        for _ in 0..cycles {
            if stop.is_stopped() {
                self.cancelled = true;
                break;
            }
            self.step();
        }

        self.elapsed_s += start.elapsed().as_secs_f64();
        let summary = self.summary();
        if summary.cancelled {
            log::info!(
                "Session cancelled after {} cycles (peak {:.4}, emerged: {})",
                summary.total_cycles,
                summary.peak_level,
                summary.emerged
            );
        } else {
            log::info!(
                "Session complete: {} cycles in {:.3}s, final state {}, peak {:.4}, emerged: {}",
                summary.total_cycles,
                summary.duration_s,
                summary.final_state,
                summary.peak_level,
                summary.emerged
            );
        }
        summary
    }

    /// Summary over every record so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_records(
            &self.records,
            self.elapsed_s,
            self.self_reference.is_meta_conscious(),
            self.cancelled,
        )
    }

    /// Clear history and observers; network topology and the generator
    /// state are kept.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.self_reference.reset();
        self.threshold.reset();
        self.level = 0.0;
        self.field_strength = 0.0;
        self.peak_level = 0.0;
        self.emergence_cycle = None;
        self.records.clear();
        self.elapsed_s = 0.0;
        self.cancelled = false;
    }

    pub fn config(&self) -> &EmergenceConfig {
        &self.cfg
    }

    pub fn records(&self) -> &[FieldRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&FieldRecord> {
        self.records.last()
    }

    pub fn cycle_count(&self) -> usize {
        self.records.len()
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn peak_level(&self) -> f64 {
        self.peak_level
    }

    pub fn emerged(&self) -> bool {
        self.emergence_cycle.is_some()
    }

    pub fn emergence_cycle(&self) -> Option<usize> {
        self.emergence_cycle
    }

    pub fn threshold(&self) -> &ThresholdController {
        &self.threshold
    }

    pub fn memory(&self) -> &TemporalMemory {
        &self.memory
    }

    pub fn self_reference(&self) -> &SelfReferenceModel {
        &self.self_reference
    }
}

fn session_rng(config: &EmergenceConfig) -> StdRng {
    match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
