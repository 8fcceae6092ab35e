// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Temporal Memory
// ─────────────────────────────────────────────────────────────────────
//! Bounded rolling history of the level, field strength, integration
//! and self-reference series.
//!
//!   temporal_coherence = min(1, 1 / (1 + Var(recent)) + max(0, slope))
//!   momentum           = max(0, (x[-1] - x[-3]) / 3)
//!
//! `recent` is the last (up to) 10 level samples; `slope` is the
//! least-squares trend over their indices (needs at least 3 samples).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Level samples considered by temporal coherence.
pub const COHERENCE_WINDOW: usize = 10;
/// Level samples considered by momentum.
pub const MOMENTUM_WINDOW: usize = 3;

/// Serialisable memory snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryState {
    pub depth: usize,
    pub len: usize,
    pub temporal_coherence: f64,
    pub momentum: f64,
}

/// Four parallel FIFO series with shared capacity.
#[derive(Debug, Clone)]
pub struct TemporalMemory {
    depth: usize,
    levels: VecDeque<f64>,
    strengths: VecDeque<f64>,
    integrations: VecDeque<f64>,
    self_references: VecDeque<f64>,
}

fn push_bounded(series: &mut VecDeque<f64>, value: f64, depth: usize) {
    if series.len() == depth {
        series.pop_front();
    }
    series.push_back(value);
}

impl TemporalMemory {
    /// `depth` is clamped to at least 1.
    pub fn new(depth: usize) -> Self {
        let depth = depth.max(1);
        Self {
            depth,
            levels: VecDeque::with_capacity(depth),
            strengths: VecDeque::with_capacity(depth),
            integrations: VecDeque::with_capacity(depth),
            self_references: VecDeque::with_capacity(depth),
        }
    }

    /// Append one sample to every series, evicting the oldest when full.
    pub fn add_state(&mut self, level: f64, strength: f64, integration: f64, self_reference: f64) {
        push_bounded(&mut self.levels, level, self.depth);
        push_bounded(&mut self.strengths, strength, self.depth);
        push_bounded(&mut self.integrations, integration, self.depth);
        push_bounded(&mut self.self_references, self_reference, self.depth);
    }

    /// Stability plus upward trend of recent levels, in [0, 1].
    pub fn temporal_coherence(&self) -> f64 {
        let n = self.levels.len();
        if n < 2 {
            return 0.0;
        }

        let recent: Vec<f64> = self
            .levels
            .iter()
            .skip(n.saturating_sub(COHERENCE_WINDOW))
            .copied()
            .collect();
        let count = recent.len() as f64;
        let mean = recent.iter().sum::<f64>() / count;
        let variance = recent.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / count;
        let stability = 1.0 / (1.0 + variance);

        let trend_factor = if recent.len() >= 3 {
            trend_slope(&recent).max(0.0)
        } else {
            0.0
        };

        (stability + trend_factor).min(1.0)
    }

    /// Recent rate of increase of the level; never negative.
    pub fn momentum(&self) -> f64 {
        let n = self.levels.len();
        if n < MOMENTUM_WINDOW {
            return 0.0;
        }
        let first = self.levels[n - MOMENTUM_WINDOW];
        let last = self.levels[n - 1];
        ((last - first) / MOMENTUM_WINDOW as f64).max(0.0)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &VecDeque<f64> {
        &self.levels
    }

    pub fn strengths(&self) -> &VecDeque<f64> {
        &self.strengths
    }

    pub fn integrations(&self) -> &VecDeque<f64> {
        &self.integrations
    }

    pub fn self_references(&self) -> &VecDeque<f64> {
        &self.self_references
    }

    pub fn get_state(&self) -> MemoryState {
        MemoryState {
            depth: self.depth,
            len: self.len(),
            temporal_coherence: self.temporal_coherence(),
            momentum: self.momentum(),
        }
    }

    pub fn reset(&mut self) {
        self.levels.clear();
        self.strengths.clear();
        self.integrations.clear();
        self.self_references.clear();
    }
}

/// Least-squares slope of `ys` against 0, 1, 2, ...
fn trend_slope(ys: &[f64]) -> f64 {
    let n = ys.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = ys.iter().sum::<f64>() / n;
    let (num, den) = ys.iter().enumerate().fold((0.0, 0.0), |(num, den), (i, &y)| {
        let dx = i as f64 - x_mean;
        (num + dx * (y - y_mean), den + dx * dx)
    });
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_initial_state() {
        let mem = TemporalMemory::new(10);
        assert_eq!(mem.depth(), 10);
        assert!(mem.is_empty());
        assert_eq!(mem.temporal_coherence(), 0.0);
        assert_eq!(mem.momentum(), 0.0);
    }

    #[test]
    fn test_add_state_fills_all_series() {
        let mut mem = TemporalMemory::new(10);
        mem.add_state(0.5, 0.6, 0.7, 0.8);
        assert_eq!(mem.levels()[0], 0.5);
        assert_eq!(mem.strengths()[0], 0.6);
        assert_eq!(mem.integrations()[0], 0.7);
        assert_eq!(mem.self_references()[0], 0.8);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut mem = TemporalMemory::new(4);
        for i in 0..10 {
            mem.add_state(i as f64, 0.0, 0.0, 0.0);
            assert!(mem.len() <= 4);
        }
        let levels: Vec<f64> = mem.levels().iter().copied().collect();
        assert_eq!(levels, vec![6.0, 7.0, 8.0, 9.0]);
        assert_eq!(mem.strengths().len(), 4);
        assert_eq!(mem.integrations().len(), 4);
        assert_eq!(mem.self_references().len(), 4);
    }

    #[test]
    fn test_zero_depth_clamped() {
        let mut mem = TemporalMemory::new(0);
        mem.add_state(0.1, 0.0, 0.0, 0.0);
        mem.add_state(0.2, 0.0, 0.0, 0.0);
        assert_eq!(mem.len(), 1);
        assert_eq!(mem.levels()[0], 0.2);
    }

    #[test]
    fn test_coherence_constant_levels() {
        let mut mem = TemporalMemory::new(20);
        for _ in 0..5 {
            mem.add_state(0.4, 0.0, 0.0, 0.0);
        }
        assert!((mem.temporal_coherence() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coherence_two_samples_no_trend() {
        let mut mem = TemporalMemory::new(20);
        mem.add_state(0.0, 0.0, 0.0, 0.0);
        mem.add_state(1.0, 0.0, 0.0, 0.0);
        // Var = 0.25, slope ignored below three samples.
        assert!((mem.temporal_coherence() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_coherence_falling_levels() {
        let mut mem = TemporalMemory::new(20);
        for v in [1.0, 0.0, 1.0, 0.0] {
            mem.add_state(v, 0.0, 0.0, 0.0);
        }
        // Var = 0.25, negative slope contributes nothing.
        assert!((mem.temporal_coherence() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_coherence_bounded() {
        let mut mem = TemporalMemory::new(20);
        for i in 0..15 {
            mem.add_state(0.1 + i as f64 * 0.05, 0.2, 0.3, 0.4);
            let c = mem.temporal_coherence();
            assert!((0.0..=1.0).contains(&c), "coherence {c}");
        }
    }

    #[test]
    fn test_coherence_uses_last_ten() {
        let mut mem = TemporalMemory::new(20);
        for _ in 0..5 {
            mem.add_state(100.0, 0.0, 0.0, 0.0);
        }
        for _ in 0..10 {
            mem.add_state(0.3, 0.0, 0.0, 0.0);
        }
        assert!((mem.temporal_coherence() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_trend_slope_linear() {
        assert!((trend_slope(&[1.0, 3.0, 5.0, 7.0]) - 2.0).abs() < 1e-12);
        assert!((trend_slope(&[0.5, 0.5, 0.5]) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_momentum_needs_three_samples() {
        let mut mem = TemporalMemory::new(20);
        mem.add_state(0.1, 0.0, 0.0, 0.0);
        mem.add_state(0.5, 0.0, 0.0, 0.0);
        assert_eq!(mem.momentum(), 0.0);
        mem.add_state(0.7, 0.0, 0.0, 0.0);
        assert!((mem.momentum() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_momentum_clamps_decline() {
        let mut mem = TemporalMemory::new(20);
        for v in [0.9, 0.6, 0.3] {
            mem.add_state(v, 0.0, 0.0, 0.0);
        }
        assert_eq!(mem.momentum(), 0.0);
    }

    #[test]
    fn test_momentum_positive_under_growth() {
        // Accelerating levels: momentum positive from the third sample
        // and non-decreasing while growth continues.
        let mut mem = TemporalMemory::new(20);
        let mut previous = 0.0;
        for i in 0..20 {
            mem.add_state(0.01 * (i * i) as f64, 0.0, 0.0, 0.0);
            let m = mem.momentum();
            if i >= 2 {
                assert!(m > 0.0, "momentum should be positive at sample {i}");
                assert!(m >= previous - 1e-12, "momentum fell at sample {i}: {m} < {previous}");
            }
            previous = m;
        }
    }

    #[test]
    fn test_momentum_plateau() {
        let mut mem = TemporalMemory::new(20);
        for v in [0.1, 0.2, 0.3, 0.3, 0.3, 0.3] {
            mem.add_state(v, 0.0, 0.0, 0.0);
        }
        assert_eq!(mem.momentum(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut mem = TemporalMemory::new(5);
        mem.add_state(0.1, 0.2, 0.3, 0.4);
        mem.reset();
        assert!(mem.is_empty());
        assert_eq!(mem.get_state().len, 0);
    }
}
