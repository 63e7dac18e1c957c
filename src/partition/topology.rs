//! Topology-based partitioning over the cell connectivity.
//!
//! The mesh's cells are flattened into a CSR pair (`cell_ptr`, `cell_data`;
//! METIS calls these `eptr`/`eind`) and handed to an external
//! graph-partitioning routine behind the narrow [`GraphPartitioner`] seam.
//! Everything collaborator-specific — native library loading, index width —
//! stays on the far side of that trait.

use crate::mesh::Mesh;
use crate::mesh_error::MeshPartError;
use crate::partition::{PartitionAssignment, PartitionId, PartitionerConfig};

/// Black-box graph-partitioning collaborator.
///
/// `cell_ptr` has one more entry than there are cells; the vertex ids of
/// cell `i` are `cell_data[cell_ptr[i]..cell_ptr[i + 1]]`. Implementations
/// return one label per point, each in `[0, num_parts)`.
pub trait GraphPartitioner {
    fn partition(
        &self,
        cell_ptr: &[usize],
        cell_data: &[usize],
        point_count: usize,
        num_parts: usize,
    ) -> Result<Vec<PartitionId>, MeshPartError>;
}

/// Partition by cell connectivity via the given collaborator.
pub fn partition_topology(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
    graph_partitioner: &dyn GraphPartitioner,
) -> Result<PartitionAssignment, MeshPartError> {
    if mesh.cells.is_empty() {
        log::warn!(
            "no topology information provided; the resulting partition is likely to be poor"
        );
    }
    let (cell_ptr, cell_data) = cell_csr(mesh);
    let labels =
        graph_partitioner.partition(&cell_ptr, &cell_data, mesh.point_count(), cfg.num_parts)?;
    PartitionAssignment::new(labels, cfg.num_parts)
}

/// Flatten the cell list into CSR form.
pub fn cell_csr(mesh: &Mesh) -> (Vec<usize>, Vec<usize>) {
    let mut cell_ptr = Vec::with_capacity(mesh.cells.len() + 1);
    cell_ptr.push(0);
    let mut cell_data = Vec::new();
    for cell in &mesh.cells {
        cell_data.extend_from_slice(&cell.vertices);
        cell_ptr.push(cell_data.len());
    }
    (cell_ptr, cell_data)
}
