// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Self-Reference Model
// ─────────────────────────────────────────────────────────────────────
//! Fixed-depth nested self-model and the bounded self-reference
//! strength derived from it.
//!
//!   strength = min(1, level * (1 + 0.1 * depth))
//!
//! Meta-awareness is the running maximum of computed strengths.

use serde::{Deserialize, Serialize};

use emergence_types::{clamp_unit, SignalSnapshot};

/// Strength gained per level of nesting.
pub const DEPTH_GAIN: f64 = 0.1;

/// One level of the nested self-model.
///
/// Level 0 wraps the snapshot directly and has no nested model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfModel {
    pub base_state: SignalSnapshot,
    pub self_awareness: f64,
    pub meta_level: usize,
    pub nested: Option<Box<SelfModel>>,
}

impl SelfModel {
    /// Number of nested levels below this one.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.nested.as_deref();
        while let Some(model) = current {
            depth += 1;
            current = model.nested.as_deref();
        }
        depth
    }
}

impl Drop for SelfModel {
    fn drop(&mut self) {
        // Unlink level by level so dropping stays off the call stack.
        let mut next = self.nested.take();
        while let Some(mut model) = next {
            next = model.nested.take();
        }
    }
}

/// Build the self-model at `level`, innermost level first.
///
/// The snapshot is identical at every level; only nesting changes.
pub fn build_self_model(level: usize, snapshot: &SignalSnapshot) -> SelfModel {
    let mut model = SelfModel {
        base_state: *snapshot,
        self_awareness: snapshot.level,
        meta_level: 0,
        nested: None,
    };
    for meta_level in 1..=level {
        model = SelfModel {
            base_state: *snapshot,
            self_awareness: snapshot.level,
            meta_level,
            nested: Some(Box::new(model)),
        };
    }
    model
}

/// Serialisable model snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfReferenceState {
    pub depth: usize,
    pub meta_awareness_level: f64,
    pub is_meta_conscious: bool,
}

/// Self-reference estimator with a monotone meta-awareness level.
#[derive(Debug, Clone)]
pub struct SelfReferenceModel {
    depth: usize,
    meta_threshold: f64,
    meta_awareness_level: f64,
    last_model: Option<SelfModel>,
}

impl SelfReferenceModel {
    pub fn new(depth: usize, meta_threshold: f64) -> Self {
        Self {
            depth,
            meta_threshold,
            meta_awareness_level: 0.0,
            last_model: None,
        }
    }

    /// Strength in [0, 1]; 0 when no snapshot is available.
    ///
    /// Rebuilds the full-depth self-model and raises meta-awareness to
    /// the new strength if it is higher.
    pub fn self_reference_strength(&mut self, snapshot: Option<&SignalSnapshot>) -> f64 {
        let Some(snapshot) = snapshot else {
            return 0.0;
        };

        let model = build_self_model(self.depth, snapshot);
        let base_level = clamp_unit(snapshot.level);
        let strength = (base_level * (1.0 + DEPTH_GAIN * model.depth() as f64)).min(1.0);

        if strength > self.meta_awareness_level {
            self.meta_awareness_level = strength;
        }
        self.last_model = Some(model);
        strength
    }

    pub fn meta_awareness_level(&self) -> f64 {
        self.meta_awareness_level
    }

    pub fn is_meta_conscious(&self) -> bool {
        self.meta_awareness_level > self.meta_threshold
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Model built by the latest strength computation.
    pub fn last_model(&self) -> Option<&SelfModel> {
        self.last_model.as_ref()
    }

    pub fn get_state(&self) -> SelfReferenceState {
        SelfReferenceState {
            depth: self.depth,
            meta_awareness_level: self.meta_awareness_level,
            is_meta_conscious: self.is_meta_conscious(),
        }
    }

    pub fn reset(&mut self) {
        self.meta_awareness_level = 0.0;
        self.last_model = None;
    }
}
