// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Multi-Scale Network Set
// ─────────────────────────────────────────────────────────────────────
//! Synthetic small-world networks, one per integration scale.
//!
//! Each network starts as a ring lattice where node i links to its k/2
//! nearest neighbours on either side; every lattice edge is then
//! rewired with probability p to a uniformly drawn node (Watts-Strogatz
//! style, directed adjacency). Topology is fixed after construction;
//! only the per-cycle `IntegrationSnapshot` changes.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use emergence_types::{EmergenceConfig, EmergenceError, EmergenceResult};

/// Per-cycle metrics written back onto a network by the estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSnapshot {
    pub connectivity: f64,
    pub clustering: f64,
    pub path_efficiency: f64,
    pub integration: f64,
    pub information_flow: f64,
}

/// One synthetic network: nodes `0..size` and a directed adjacency list.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    size: usize,
    adjacency: Vec<Vec<usize>>,
    /// Metrics from the most recent cycle.
    pub metrics: IntegrationSnapshot,
}

impl NetworkModel {
    /// Build from an explicit adjacency list (`adjacency[i]` = neighbours of i).
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> EmergenceResult<Self> {
        let size = adjacency.len();
        if size == 0 {
            return Err(EmergenceError::Validation(
                "network must have at least one node".to_string(),
            ));
        }
        for (node, neighbours) in adjacency.iter().enumerate() {
            if let Some(&bad) = neighbours.iter().find(|&&n| n >= size) {
                return Err(EmergenceError::Validation(format!(
                    "node {node} lists neighbour {bad}, outside [0, {size})"
                )));
            }
        }
        Ok(Self {
            size,
            adjacency,
            metrics: IntegrationSnapshot::default(),
        })
    }

    /// Ring lattice of degree `k` with random rewiring.
    ///
    /// Rejects odd or zero `k`, `size <= k` and `p` outside [0, 1]; within
    /// those bounds every node has a free rewiring target.
    pub fn small_world(
        size: usize,
        k: usize,
        p: f64,
        rng: &mut dyn RngCore,
    ) -> EmergenceResult<Self> {
        if k < 2 || k % 2 != 0 {
            return Err(EmergenceError::Validation(format!(
                "lattice degree must be an even integer >= 2, got {k}"
            )));
        }
        if size <= k {
            return Err(EmergenceError::Validation(format!(
                "network size must exceed lattice degree {k}, got {size}"
            )));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(EmergenceError::Validation(format!(
                "rewiring probability must be in [0, 1], got {p}"
            )));
        }

        let mut adjacency = Vec::with_capacity(size);

        for i in 0..size {
            let mut lattice = Vec::with_capacity(k);
            for j in 1..=k / 2 {
                lattice.push((i + j) % size);
                lattice.push((i + size - j) % size);
            }

            let mut rewired: Vec<usize> = Vec::with_capacity(k);
            for conn in lattice {
                if rng.gen::<f64>() < p {
                    let mut target = rng.gen_range(0..size);
                    while target == i || rewired.contains(&target) {
                        target = rng.gen_range(0..size);
                    }
                    rewired.push(target);
                } else {
                    rewired.push(conn);
                }
            }
            adjacency.push(rewired);
        }

        Ok(Self {
            size,
            adjacency,
            metrics: IntegrationSnapshot::default(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Node ids, in order.
    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.size
    }

    /// Neighbours of `node` (empty for an unknown id).
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_linked(&self, from: usize, to: usize) -> bool {
        self.neighbours(from).contains(&to)
    }

    /// Total directed edge count.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Mean out-degree.
    pub fn average_degree(&self) -> f64 {
        self.edge_count() as f64 / self.size as f64
    }
}

/// Ordered networks of geometrically increasing size, one per scale.
#[derive(Debug, Clone)]
pub struct MultiScaleNetworkSet {
    networks: Vec<NetworkModel>,
}

impl MultiScaleNetworkSet {
    /// Build one small-world network per configured scale.
    pub fn build(config: &EmergenceConfig, rng: &mut dyn RngCore) -> EmergenceResult<Self> {
        let networks = (0..config.num_scales)
            .map(|scale| {
                NetworkModel::small_world(
                    config.network_size(scale),
                    config.neighbor_k,
                    config.rewiring_probability,
                    &mut *rng,
                )
            })
            .collect::<EmergenceResult<Vec<_>>>()?;
        Ok(Self { networks })
    }

    pub fn from_networks(networks: Vec<NetworkModel>) -> Self {
        Self { networks }
    }

    pub fn networks(&self) -> &[NetworkModel] {
        &self.networks
    }

    pub fn networks_mut(&mut self) -> &mut [NetworkModel] {
        &mut self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
