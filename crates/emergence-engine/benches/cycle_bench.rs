// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Emergence Kernel Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the emergence cycle.
//!
//! Covers the hot path:
//!   - Network construction and integration estimate
//!   - Observers (memory, self-reference, threshold)
//!   - Single cycle and full sessions

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use emergence_engine::{EmergenceConfig, EmergenceEngine};
use emergence_network::{IntegrationEstimator, MultiScaleNetworkSet};
use emergence_observers::{SelfReferenceModel, TemporalMemory, ThresholdController};
use emergence_types::SignalSnapshot;

const SEED: u64 = 42;

fn make_engine() -> EmergenceEngine {
    EmergenceEngine::new(EmergenceConfig::seeded(SEED)).expect("default config is valid")
}

fn make_networks(cfg: &EmergenceConfig, rng: &mut StdRng) -> MultiScaleNetworkSet {
    MultiScaleNetworkSet::build(cfg, rng).expect("default config is valid")
}

// ── Network benchmarks ───────────────────────────────────────────────

fn bench_build_networks(c: &mut Criterion) {
    let cfg = EmergenceConfig::seeded(SEED);
    c.bench_function("build_networks_3_scales", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(SEED);
            make_networks(black_box(&cfg), &mut rng)
        })
    });
}

fn bench_integration_estimate(c: &mut Criterion) {
    let cfg = EmergenceConfig::seeded(SEED);
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut set = make_networks(&cfg, &mut rng);
    let estimator = IntegrationEstimator::from_config(&cfg);
    c.bench_function("integration_estimate_3_scales", |b| {
        b.iter(|| estimator.estimate(black_box(&mut set), &mut rng))
    });
}

// ── Observer benchmarks ──────────────────────────────────────────────

fn bench_memory_coherence(c: &mut Criterion) {
    let mut memory = TemporalMemory::new(20);
    for i in 0..20 {
        memory.add_state((i as f64 * 0.3).sin().abs(), 0.4, 0.5, 0.6);
    }
    c.bench_function("memory_coherence_20", |b| {
        b.iter(|| black_box(&memory).temporal_coherence())
    });
}

fn bench_self_reference(c: &mut Criterion) {
    let mut model = SelfReferenceModel::new(5, 0.6);
    let snapshot = SignalSnapshot {
        level: 0.55,
        field_strength: 0.4,
        integration: 0.35,
    };
    c.bench_function("self_reference_depth_5", |b| {
        b.iter(|| model.self_reference_strength(Some(black_box(&snapshot))))
    });
}

fn bench_threshold_update(c: &mut Criterion) {
    let mut ctrl = ThresholdController::default_params();
    c.bench_function("threshold_update", |b| {
        b.iter(|| ctrl.update_threshold(black_box(0.6), black_box(0.5), black_box(0.7)))
    });
}

// ── Engine benchmarks ────────────────────────────────────────────────

fn bench_engine_init(c: &mut Criterion) {
    c.bench_function("engine_init_default", |b| b.iter(make_engine));
}

fn bench_single_cycle(c: &mut Criterion) {
    let mut engine = make_engine();
    engine.step();
    c.bench_function("engine_single_cycle", |b| {
        b.iter(|| engine.step().level)
    });
}

fn bench_session_100(c: &mut Criterion) {
    c.bench_function("engine_session_100_cycles", |b| {
        b.iter(|| {
            let mut engine = make_engine();
            engine.run(black_box(100))
        })
    });
}

// ── Groups ───────────────────────────────────────────────────────────

criterion_group!(network, bench_build_networks, bench_integration_estimate,);

criterion_group!(
    observers,
    bench_memory_coherence,
    bench_self_reference,
    bench_threshold_update,
);

criterion_group!(engine, bench_engine_init, bench_single_cycle, bench_session_100,);

criterion_main!(network, observers, engine);
