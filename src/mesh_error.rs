//! MeshPartError: unified error type for mesh-part public APIs.
//!
//! Every fallible operation in this library reports through this enum so
//! callers get robust, non-panicking error handling. Configuration errors
//! and precondition violations are distinct variants; degraded-input
//! conditions (planarity fallback, missing GlobalIDs) are not errors and
//! are handled in place with a diagnostic.

use crate::mesh::CellType;
use thiserror::Error;

/// Unified error type for mesh-part operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshPartError {
    /// The requested number of partitions is invalid.
    #[error("number of partitions must be at least 1, got {0}")]
    InvalidPartCount(usize),
    /// A strategy name did not match any known partitioning algorithm.
    #[error("unknown partitioning algorithm `{0}` (expected meshfree, topology or uniform)")]
    UnknownAlgorithm(String),
    /// A partition assignment did not cover every point exactly once.
    #[error("partition assignment covers {found} points, mesh has {expected}")]
    AssignmentLengthMismatch { expected: usize, found: usize },
    /// A partition label fell outside `[0, num_parts)`.
    #[error("partition label {label} for point {point} out of range [0, {num_parts})")]
    LabelOutOfRange {
        point: usize,
        label: usize,
        num_parts: usize,
    },
    /// A cell references a point index past the end of the point array.
    #[error("cell {cell} references point {vertex}, mesh has {point_count} points")]
    CellVertexOutOfRange {
        cell: usize,
        vertex: usize,
        point_count: usize,
    },
    /// A cell's vertex count does not match its cell type.
    #[error("cell {cell} of type {cell_type:?} has {found} vertices, expected {expected}")]
    CellArityMismatch {
        cell: usize,
        cell_type: CellType,
        expected: usize,
        found: usize,
    },
    /// Point data is not aligned with the point array.
    #[error("point data holds {found} tuples, mesh has {expected} points")]
    PointDataLengthMismatch { expected: usize, found: usize },
    /// Partitions carry point data of different tuple widths.
    #[error("partition {partition} carries {found}-component point data, expected {expected}")]
    PointDataComponentMismatch {
        partition: usize,
        expected: usize,
        found: usize,
    },
    /// A GlobalIDs channel is not aligned with its partition's points.
    #[error("partition {partition} carries {found} global ids for {expected} points")]
    GlobalIdCountMismatch {
        partition: usize,
        expected: usize,
        found: usize,
    },
    /// A global id points past the end of the reconstructed mesh.
    #[error(
        "partition {partition} maps local point {local} to global id {global}, original mesh has {size} points"
    )]
    GlobalIdOutOfRange {
        partition: usize,
        local: usize,
        global: u64,
        size: usize,
    },
    /// A recovery manifest used a VTK cell type code this library does not model.
    #[error("unsupported VTK cell type code {0} in recovery manifest")]
    UnknownCellTypeCode(u8),
    /// A recovery manifest pairs `cells` and `cell_types` of different lengths.
    #[error("recovery manifest lists {cells} cells but {cell_types} cell types")]
    ManifestLengthMismatch { cells: usize, cell_types: usize },
    /// Joining requires at least one partition.
    #[error("no partitions to join")]
    NoPartitions,
    /// A structured mesh generator was asked for a degenerate grid.
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),
    /// The external graph-partitioning collaborator failed.
    #[error("graph partitioner error: {0}")]
    GraphPartitioner(String),
    /// The topology strategy was selected but no graph partitioner is available.
    #[error(
        "topology partitioning requires a graph partitioner (enable `metis-support` or use `partition_with`)"
    )]
    GraphPartitionerUnavailable,
}
