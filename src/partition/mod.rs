//! Mesh partitioning: configuration, strategies and the entry points.
//!
//! A [`PartitionerConfig`] selects one of three strategies
//! ([`PartitionAlgorithm`]) and fixes the number of partitions; the
//! [`partition`] / [`partition_with`] entry points produce a validated
//! [`PartitionAssignment`] with one label per mesh point.
//!
//! ## Determinism
//!
//! All randomized decisions use `SmallRng` seeds drawn from configuration,
//! so runs are reproducible. Tests fix seeds explicitly.

pub mod apply;
pub mod meshfree;
#[cfg(feature = "metis-support")]
pub mod metis;
pub mod topology;
pub mod uniform;

pub use apply::apply_partition;
pub use topology::GraphPartitioner;

use crate::mesh::Mesh;
use crate::mesh_error::MeshPartError;
use std::str::FromStr;

/// Identifier of one partition, in `[0, num_parts)`.
pub type PartitionId = usize;

/// The three partitioning strategies.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PartitionAlgorithm {
    /// k-means clustering of point coordinates; needs no topology.
    #[default]
    Meshfree,
    /// Graph partitioning over the cell connectivity; needs cells.
    Topology,
    /// Analytic decomposition of a uniform planar grid.
    Uniform,
}

impl FromStr for PartitionAlgorithm {
    type Err = MeshPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meshfree" => Ok(PartitionAlgorithm::Meshfree),
            "topology" => Ok(PartitionAlgorithm::Topology),
            "uniform" => Ok(PartitionAlgorithm::Uniform),
            other => Err(MeshPartError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Configuration for a partitioning run.
#[derive(Clone, Debug)]
pub struct PartitionerConfig {
    /// Number of partitions to produce.
    pub num_parts: usize,
    /// Strategy used to assign points to partitions.
    pub algorithm: PartitionAlgorithm,
    /// Seed for all randomized decisions (k-means centroid selection).
    pub rng_seed: u64,
    /// Iteration cap for the k-means refinement loop.
    pub max_iters: usize,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            num_parts: 2,
            algorithm: PartitionAlgorithm::default(),
            rng_seed: 42,
            max_iters: 50,
        }
    }
}

/// A total assignment of points to partitions.
///
/// Constructing one validates that every label lies in `[0, num_parts)`;
/// downstream consumers rely on that invariant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartitionAssignment {
    labels: Vec<PartitionId>,
    num_parts: usize,
}

impl PartitionAssignment {
    /// Wrap a label array, rejecting labels outside `[0, num_parts)`.
    pub fn new(labels: Vec<PartitionId>, num_parts: usize) -> Result<Self, MeshPartError> {
        if num_parts == 0 {
            return Err(MeshPartError::InvalidPartCount(0));
        }
        for (point, &label) in labels.iter().enumerate() {
            if label >= num_parts {
                return Err(MeshPartError::LabelOutOfRange {
                    point,
                    label,
                    num_parts,
                });
            }
        }
        Ok(Self { labels, num_parts })
    }

    /// The single-partition assignment: every point gets label 0.
    pub fn trivial(point_count: usize) -> Self {
        Self {
            labels: vec![0; point_count],
            num_parts: 1,
        }
    }

    pub fn labels(&self) -> &[PartitionId] {
        &self.labels
    }

    pub fn num_parts(&self) -> usize {
        self.num_parts
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Compute a partition assignment for `mesh` under `cfg`.
///
/// The `topology` strategy needs an external graph partitioner; without the
/// `metis-support` feature this returns
/// [`MeshPartError::GraphPartitionerUnavailable`] for it — use
/// [`partition_with`] to supply a collaborator explicitly.
pub fn partition(mesh: &Mesh, cfg: &PartitionerConfig) -> Result<PartitionAssignment, MeshPartError> {
    match short_circuit(mesh, cfg)? {
        Some(assignment) => Ok(assignment),
        None => match cfg.algorithm {
            PartitionAlgorithm::Meshfree => meshfree::partition_meshfree(mesh, cfg),
            PartitionAlgorithm::Uniform => uniform_or_meshfree(mesh, cfg),
            #[cfg(feature = "metis-support")]
            PartitionAlgorithm::Topology => {
                topology::partition_topology(mesh, cfg, &metis::MetisPartitioner)
            }
            #[cfg(not(feature = "metis-support"))]
            PartitionAlgorithm::Topology => Err(MeshPartError::GraphPartitionerUnavailable),
        },
    }
}

/// Like [`partition`], with an explicit graph-partitioning collaborator
/// for the `topology` strategy.
pub fn partition_with(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
    graph_partitioner: &dyn GraphPartitioner,
) -> Result<PartitionAssignment, MeshPartError> {
    match short_circuit(mesh, cfg)? {
        Some(assignment) => Ok(assignment),
        None => match cfg.algorithm {
            PartitionAlgorithm::Meshfree => meshfree::partition_meshfree(mesh, cfg),
            PartitionAlgorithm::Uniform => uniform_or_meshfree(mesh, cfg),
            PartitionAlgorithm::Topology => {
                topology::partition_topology(mesh, cfg, graph_partitioner)
            }
        },
    }
}

fn short_circuit(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
) -> Result<Option<PartitionAssignment>, MeshPartError> {
    match cfg.num_parts {
        0 => Err(MeshPartError::InvalidPartCount(0)),
        1 => Ok(Some(PartitionAssignment::trivial(mesh.point_count()))),
        _ => Ok(None),
    }
}

fn uniform_or_meshfree(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
) -> Result<PartitionAssignment, MeshPartError> {
    match uniform::partition_uniform(mesh, cfg)? {
        Some(assignment) => Ok(assignment),
        None => {
            log::warn!("mesh is not planar; falling back to meshfree partitioning");
            meshfree::partition_meshfree(mesh, cfg)
        }
    }
}
