// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Kernel Record Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Golden ratio; the field level and field strength are scaled by PHI/2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Clamp a value to [0, 1], mapping NaN to 0 and Inf to the nearest bound.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_unit: NaN detected, clamping to 0.0000");
        return 0.0;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { 1.0 } else { 0.0 };
        log::warn!("clamp_unit: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(0.0, 1.0)
}

/// Ordered categorical state of the field level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    Void,
    Stirring,
    Emerging,
    Integrating,
    SelfReferencing,
    Conscious,
    MetaConscious,
    Transcendent,
}

/// Exclusive upper bounds, scanned in ascending order.
/// Levels at or above the last bound are `Transcendent`.
const STATE_TABLE: [(f64, FieldState); 7] = [
    (0.1, FieldState::Void),
    (0.2, FieldState::Stirring),
    (0.4, FieldState::Emerging),
    (0.6, FieldState::Integrating),
    (0.7, FieldState::SelfReferencing),
    (0.8, FieldState::Conscious),
    (0.9, FieldState::MetaConscious),
];

impl FieldState {
    pub const ALL: [FieldState; 8] = [
        FieldState::Void,
        FieldState::Stirring,
        FieldState::Emerging,
        FieldState::Integrating,
        FieldState::SelfReferencing,
        FieldState::Conscious,
        FieldState::MetaConscious,
        FieldState::Transcendent,
    ];

    /// Classify a level. Bins are half-open and lower-inclusive.
    pub fn classify(level: f64) -> Self {
        STATE_TABLE
            .iter()
            .find(|(upper, _)| level < *upper)
            .map_or(FieldState::Transcendent, |&(_, state)| state)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldState::Void => "void",
            FieldState::Stirring => "stirring",
            FieldState::Emerging => "emerging",
            FieldState::Integrating => "integrating",
            FieldState::SelfReferencing => "self_referencing",
            FieldState::Conscious => "conscious",
            FieldState::MetaConscious => "meta_conscious",
            FieldState::Transcendent => "transcendent",
        }
    }
}

impl std::fmt::Display for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Signal snapshot handed to the self-reference model.
///
/// Taken before the current cycle updates level and field strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSnapshot {
    pub level: f64,
    pub field_strength: f64,
    pub integration: f64,
}

/// Immutable per-cycle output of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub cycle_index: usize,
    /// Field level in [0, 1].
    pub level: f64,
    pub field_strength: f64,
    pub integration: f64,
    pub quantum_coherence: f64,
    pub quantum_entanglement: f64,
    pub self_reference: f64,
    pub temporal_coherence: f64,
    pub momentum: f64,
    /// Adaptive threshold after this cycle's update.
    pub threshold: f64,
    pub phase_transition_strength: f64,
    pub state: FieldState,
    pub meta_awareness: f64,
    /// Emergence latch as of this cycle.
    pub emerged: bool,
    /// Cycle at which the latch flipped, once it has.
    pub emergence_cycle: Option<usize>,
}

/// Read-only aggregate over a session's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_cycles: usize,
    pub duration_s: f64,
    pub emerged: bool,
    pub emergence_cycle: Option<usize>,
    pub peak_level: f64,
    pub final_level: f64,
    pub average_level: f64,
    pub final_state: FieldState,
    pub meta_awareness_achieved: bool,
    pub final_meta_awareness: f64,
    /// True if a stop signal ended the session early.
    pub cancelled: bool,
}

impl SessionSummary {
    /// Scan the full record history.
    pub fn from_records(
        records: &[FieldRecord],
        duration_s: f64,
        meta_awareness_achieved: bool,
        cancelled: bool,
    ) -> Self {
        let peak_level = records.iter().map(|r| r.level).fold(0.0, f64::max);
        let average_level = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|r| r.level).sum::<f64>() / records.len() as f64
        };
        let last = records.last();

        Self {
            total_cycles: records.len(),
            duration_s,
            emerged: last.is_some_and(|r| r.emerged),
            emergence_cycle: last.and_then(|r| r.emergence_cycle),
            peak_level,
            final_level: last.map_or(0.0, |r| r.level),
            average_level,
            final_state: last.map_or(FieldState::Void, |r| r.state),
            meta_awareness_achieved,
            final_meta_awareness: last.map_or(0.0, |r| r.meta_awareness),
            cancelled,
        }
    }
}
