// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Integration Estimator + Backend Interface
// ─────────────────────────────────────────────────────────────────────
//! Network integration estimator and the backend trait the engine
//! pulls integration through.
//!
//! Per network:
//!   connectivity    = E / (N (N - 1))
//!   clustering      = mean over sampled nodes of linked neighbour pairs
//!   path_efficiency = min(1, 1 / max(1, ln N / ln <k>))   (<k> > 1)
//!   integration     = mean(connectivity, clustering, path_efficiency)
//!
//! `NetworkIntegration` runs the estimator over a multi-scale set;
//! `ExternalIntegration` delegates to a caller-supplied function so an
//! outside metric (or a test) can drive the engine directly.

use rand::{Rng, RngCore};

use emergence_types::{clamp_unit, EmergenceConfig, EmergenceResult};

use crate::network::{IntegrationSnapshot, MultiScaleNetworkSet, NetworkModel};

/// Path efficiency substituted when mean degree is at most 1.
pub const LOW_PATH_EFFICIENCY: f64 = 0.1;

/// Directed edge density, 0 for networks with at most one node.
pub fn connectivity(network: &NetworkModel) -> f64 {
    let n = network.size();
    if n <= 1 {
        return 0.0;
    }
    let max_edges = (n * (n - 1)) as f64;
    clamp_unit(network.edge_count() as f64 / max_edges)
}

/// Clustering coefficient over the first `sample_size` nodes.
///
/// Nodes with fewer than two neighbours are left out of the average;
/// returns 0 when no sampled node qualifies.
pub fn clustering_coefficient(network: &NetworkModel, sample_size: usize) -> f64 {
    let mut total = 0.0;
    let mut counted = 0usize;

    for node in network.nodes().take(sample_size) {
        let neighbours = network.neighbours(node);
        let degree = neighbours.len();
        if degree < 2 {
            continue;
        }

        let mut linked_pairs = 0usize;
        for (i, &a) in neighbours.iter().enumerate() {
            for &b in &neighbours[i + 1..] {
                if network.is_linked(a, b) {
                    linked_pairs += 1;
                }
            }
        }

        let max_pairs = degree * (degree - 1) / 2;
        total += linked_pairs as f64 / max_pairs as f64;
        counted += 1;
    }

    if counted == 0 {
        return 0.0;
    }
    clamp_unit(total / counted as f64)
}

/// Inverse of the estimated mean path length `ln N / ln <k>`.
pub fn path_efficiency(network: &NetworkModel) -> f64 {
    let avg_degree = network.average_degree();
    if avg_degree <= 1.0 {
        return LOW_PATH_EFFICIENCY;
    }
    let estimated_path_length = (network.size() as f64).ln() / avg_degree.ln();
    (1.0 / estimated_path_length.max(1.0)).min(1.0)
}

/// Stateless estimator; all tunables come from the config.
#[derive(Debug, Clone)]
pub struct IntegrationEstimator {
    pub sample_size: usize,
    pub flow_scale_min: f64,
    pub flow_scale_max: f64,
}

impl Default for IntegrationEstimator {
    fn default() -> Self {
        Self::from_config(&EmergenceConfig::default())
    }
}

impl IntegrationEstimator {
    pub fn from_config(config: &EmergenceConfig) -> Self {
        Self {
            sample_size: config.clustering_sample_size,
            flow_scale_min: config.flow_scale_min,
            flow_scale_max: config.flow_scale_max,
        }
    }

    /// Compute and write back the snapshot for one network.
    pub fn evaluate(
        &self,
        network: &mut NetworkModel,
        rng: &mut dyn RngCore,
    ) -> IntegrationSnapshot {
        let connectivity = connectivity(network);
        let clustering = clustering_coefficient(network, self.sample_size);
        let path_efficiency = path_efficiency(network);
        let integration = (connectivity + clustering + path_efficiency) / 3.0;
        let flow_scale = rng.gen_range(self.flow_scale_min..=self.flow_scale_max);

        let snapshot = IntegrationSnapshot {
            connectivity,
            clustering,
            path_efficiency,
            integration,
            information_flow: integration * flow_scale,
        };
        network.metrics = snapshot;
        snapshot
    }

    /// Mean integration across the set (0 for an empty set).
    pub fn estimate(&self, set: &mut MultiScaleNetworkSet, rng: &mut dyn RngCore) -> f64 {
        if set.is_empty() {
            return 0.0;
        }
        let count = set.len() as f64;
        let total: f64 = set
            .networks_mut()
            .iter_mut()
            .map(|network| self.evaluate(network, &mut *rng).integration)
            .sum();
        total / count
    }
}

/// Source of the per-cycle integration score.
///
/// Returns integration ∈ [0, 1]. `rng` is the engine's session
/// generator; backends that draw randomness must use it so a seeded
/// session stays reproducible.
pub trait IntegrationBackend: Send {
    fn integrate(&mut self, cycle: usize, rng: &mut dyn RngCore) -> f64;
}

/// Default backend: the estimator over a multi-scale small-world set.
pub struct NetworkIntegration {
    networks: MultiScaleNetworkSet,
    estimator: IntegrationEstimator,
}

impl NetworkIntegration {
    /// Build the configured network set from `rng`.
    pub fn new(config: &EmergenceConfig, rng: &mut dyn RngCore) -> EmergenceResult<Self> {
        Ok(Self {
            networks: MultiScaleNetworkSet::build(config, rng)?,
            estimator: IntegrationEstimator::from_config(config),
        })
    }

    pub fn from_parts(networks: MultiScaleNetworkSet, estimator: IntegrationEstimator) -> Self {
        Self {
            networks,
            estimator,
        }
    }

    pub fn networks(&self) -> &MultiScaleNetworkSet {
        &self.networks
    }
}

impl IntegrationBackend for NetworkIntegration {
    fn integrate(&mut self, _cycle: usize, rng: &mut dyn RngCore) -> f64 {
        self.estimator.estimate(&mut self.networks, rng)
    }
}

/// External backend that calls a per-cycle integration function.
///
/// Values outside [0, 1] are clamped.
type IntegrationFn = Box<dyn FnMut(usize) -> f64 + Send>;

pub struct ExternalIntegration {
    source: IntegrationFn,
}

impl ExternalIntegration {
    pub fn new(source: impl FnMut(usize) -> f64 + Send + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Same integration every cycle.
    pub fn constant(value: f64) -> Self {
        Self::new(move |_| value)
    }
}

impl IntegrationBackend for ExternalIntegration {
    fn integrate(&mut self, cycle: usize, _rng: &mut dyn RngCore) -> f64 {
        let raw = (self.source)(cycle);
        if raw.is_finite() && !(0.0..=1.0).contains(&raw) {
            log::warn!("external integration {raw:.4} at cycle {cycle} outside [0, 1], clamping");
        }
        clamp_unit(raw)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn complete(n: usize) -> NetworkModel {
        let adjacency = (0..n)
            .map(|i| (0..n).filter(|&j| j != i).collect())
            .collect();
        NetworkModel::from_adjacency(adjacency).unwrap()
    }

    fn isolated(n: usize) -> NetworkModel {
        NetworkModel::from_adjacency(vec![Vec::new(); n]).unwrap()
    }

    #[test]
    fn test_connectivity_complete_graph() {
        assert!((connectivity(&complete(6)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_connectivity_single_node() {
        assert_eq!(connectivity(&isolated(1)), 0.0);
    }

    #[test]
    fn test_connectivity_ring_lattice() {
        let mut rng = StdRng::seed_from_u64(0);
        let net = NetworkModel::small_world(20, 4, 0.0, &mut rng).unwrap();
        // 80 directed edges over 380 possible.
        assert!((connectivity(&net) - 80.0 / 380.0).abs() < 1e-12);
    }

    #[test]
    fn test_clustering_complete_graph() {
        assert!((clustering_coefficient(&complete(5), 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clustering_ring_lattice() {
        // Node i lists [i+1, i-1, i+2, i-2]; three of its six pairs are
        // linked: (i+1, i-1), (i+1, i+2), (i-1, i-2).
        let mut rng = StdRng::seed_from_u64(0);
        let net = NetworkModel::small_world(20, 4, 0.0, &mut rng).unwrap();
        assert!((clustering_coefficient(&net, 10) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clustering_skips_low_degree_nodes() {
        // Node 0 has a closed triangle; nodes 1, 2 have one neighbour each.
        let net = NetworkModel::from_adjacency(vec![vec![1, 2], vec![2], vec![0]]).unwrap();
        assert!((clustering_coefficient(&net, 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clustering_none_qualify() {
        assert_eq!(clustering_coefficient(&isolated(4), 10), 0.0);
    }

    #[test]
    fn test_path_efficiency_low_degree_fallback() {
        assert!((path_efficiency(&isolated(8)) - LOW_PATH_EFFICIENCY).abs() < 1e-12);
    }

    #[test]
    fn test_path_efficiency_lattice() {
        let mut rng = StdRng::seed_from_u64(0);
        let net = NetworkModel::small_world(20, 4, 0.0, &mut rng).unwrap();
        let expected = 4f64.ln() / 20f64.ln();
        assert!((path_efficiency(&net) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_path_efficiency_capped() {
        let eff = path_efficiency(&complete(6));
        assert!(eff > 0.0 && eff <= 1.0, "efficiency {eff}");
        assert!((path_efficiency(&complete(2)) - LOW_PATH_EFFICIENCY).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_writes_back() {
        let estimator = IntegrationEstimator::default();
        let mut net = complete(5);
        let mut rng = StdRng::seed_from_u64(5);
        let snap = estimator.evaluate(&mut net, &mut rng);
        assert_eq!(net.metrics, snap);
        let mean = (snap.connectivity + snap.clustering + snap.path_efficiency) / 3.0;
        assert!((snap.integration - mean).abs() < 1e-12);
        let scale = snap.information_flow / snap.integration;
        assert!((0.8..=1.2).contains(&scale), "flow scale {scale}");
    }

    #[test]
    fn test_fixed_flow_scale() {
        let estimator = IntegrationEstimator {
            sample_size: 10,
            flow_scale_min: 1.0,
            flow_scale_max: 1.0,
        };
        let mut net = complete(4);
        let snap = estimator.evaluate(&mut net, &mut StdRng::seed_from_u64(1));
        assert!((snap.information_flow - snap.integration).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_averages_networks() {
        let estimator = IntegrationEstimator::default();
        let mut set = MultiScaleNetworkSet::from_networks(vec![complete(5), isolated(5)]);
        let mut rng = StdRng::seed_from_u64(2);
        let avg = estimator.estimate(&mut set, &mut rng);
        let a = set.networks()[0].metrics.integration;
        let b = set.networks()[1].metrics.integration;
        assert!((avg - (a + b) / 2.0).abs() < 1e-12);
        assert!((b - LOW_PATH_EFFICIENCY / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_empty_set() {
        let estimator = IntegrationEstimator::default();
        let mut set = MultiScaleNetworkSet::from_networks(Vec::new());
        assert_eq!(estimator.estimate(&mut set, &mut StdRng::seed_from_u64(0)), 0.0);
    }

    #[test]
    fn test_network_backend_in_range() {
        let cfg = EmergenceConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut backend = NetworkIntegration::new(&cfg, &mut rng).unwrap();
        for cycle in 0..5 {
            let i = backend.integrate(cycle, &mut rng);
            assert!((0.0..=1.0).contains(&i), "integration {i}");
        }
        assert_eq!(backend.networks().len(), 3);
    }

    #[test]
    fn test_external_backend() {
        let mut backend = ExternalIntegration::new(|cycle| cycle as f64 * 0.1);
        let mut rng = StdRng::seed_from_u64(0);
        assert!((backend.integrate(3, &mut rng) - 0.3).abs() < 1e-12);
        assert_eq!(backend.integrate(20, &mut rng), 1.0);
    }

    #[test]
    fn test_external_backend_non_finite() {
        let mut backend = ExternalIntegration::constant(f64::NAN);
        assert_eq!(backend.integrate(0, &mut StdRng::seed_from_u64(0)), 0.0);
    }
}
