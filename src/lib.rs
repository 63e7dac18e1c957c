//! # mesh-part
//!
//! mesh-part is a mesh partitioning and recovery library for scaling and
//! accuracy experiments with mesh-to-mesh data mapping. It splits a
//! surface/volume mesh into N disjoint sub-meshes (simulating per-process
//! chunks of a distributed run) and later reassembles the partition
//! outputs into a single mesh — bit-for-bit in point order and
//! connectivity when recovery metadata is available.
//!
//! ## Features
//! - Three partitioning strategies: `meshfree` (k-means clustering),
//!   `topology` (graph partitioning via a pluggable collaborator, METIS
//!   behind the `metis-support` feature) and `uniform` (analytic grid
//!   decomposition for planar meshes)
//! - Planarity detection and in-plane coordinate reduction for flat meshes
//!   arbitrarily oriented in 3D
//! - Exact round-trip recovery driven by per-partition GlobalIDs channels
//!   and a small JSON-compatible recovery manifest
//! - Graceful degradation: missing topology, non-planar input and missing
//!   GlobalIDs fall back to weaker well-defined behavior with a diagnostic
//!
//! ## Determinism
//!
//! All randomized decisions use `SmallRng` seeds drawn from configuration
//! so runs are reproducible. Unit tests fix seeds explicitly.
//!
//! File-format I/O, CLI surfaces and run orchestration live in the
//! surrounding tooling; this crate works on in-memory meshes only.

pub mod geometry;
pub mod mesh;
pub mod mesh_error;
pub mod meshgen;
pub mod partition;
pub mod recovery;

/// A convenient prelude to import the most-used types and entry points:
pub mod prelude {
    pub use crate::geometry::{ReducedPoints, reduce_dimension};
    pub use crate::mesh::{Cell, CellType, Mesh, Point, PointData};
    pub use crate::mesh_error::MeshPartError;
    #[cfg(feature = "metis-support")]
    pub use crate::partition::metis::MetisPartitioner;
    pub use crate::partition::{
        GraphPartitioner, PartitionAlgorithm, PartitionAssignment, PartitionId, PartitionerConfig,
        apply_partition, partition, partition_with,
    };
    pub use crate::recovery::{RecoveryManifest, join, join_partitionwise, join_recovery};
}
