//! Split a mesh into sub-meshes according to a partition assignment.
//!
//! Every point goes to exactly one sub-mesh, in global order; cells whose
//! vertices stay inside one partition are remapped to local indices, cells
//! spanning partitions are recorded in the [`RecoveryManifest`] with their
//! global indices. Each sub-mesh carries a GlobalIDs channel so the join
//! can later undo the split exactly.

use crate::mesh::{Cell, Mesh, PointData};
use crate::mesh_error::MeshPartError;
use crate::partition::{PartitionAssignment, PartitionId};
use crate::recovery::RecoveryManifest;
use hashbrown::HashSet;

/// Where a global point ended up: its partition and local position there.
type GlobalIndexMap = Vec<(PartitionId, usize)>;

/// Materialize one sub-mesh per partition plus the recovery manifest.
///
/// Guarantees by construction: the sub-meshes' point counts sum to the
/// original point count, and kept cells plus manifest cells account for
/// every original cell exactly once.
pub fn apply_partition(
    mesh: &Mesh,
    assignment: &PartitionAssignment,
) -> Result<(Vec<Mesh>, RecoveryManifest), MeshPartError> {
    let n = mesh.point_count();
    if assignment.len() != n {
        return Err(MeshPartError::AssignmentLengthMismatch {
            expected: n,
            found: assignment.len(),
        });
    }
    let components = match &mesh.point_data {
        Some(data) => {
            if data.len() != n {
                return Err(MeshPartError::PointDataLengthMismatch {
                    expected: n,
                    found: data.len(),
                });
            }
            Some(data.components)
        }
        None => None,
    };

    let num_parts = assignment.num_parts();
    let mut points = vec![Vec::new(); num_parts];
    let mut global_ids = vec![Vec::new(); num_parts];
    let mut values = vec![Vec::new(); num_parts];
    let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); num_parts];

    let mut mapping: GlobalIndexMap = Vec::with_capacity(n);
    for (i, &point) in mesh.points.iter().enumerate() {
        let label = assignment.labels()[i];
        mapping.push((label, points[label].len()));
        points[label].push(point);
        global_ids[label].push(i as u64);
        if let Some(data) = &mesh.point_data {
            values[label].extend_from_slice(data.tuple(i));
        }
    }

    let mut discarded: Vec<Cell> = Vec::new();
    let mut touched: HashSet<PartitionId> = HashSet::new();
    for (c, cell) in mesh.cells.iter().enumerate() {
        touched.clear();
        for &v in &cell.vertices {
            if v >= n {
                return Err(MeshPartError::CellVertexOutOfRange {
                    cell: c,
                    vertex: v,
                    point_count: n,
                });
            }
            touched.insert(mapping[v].0);
        }
        if touched.len() == 1 {
            let label = mapping[cell.vertices[0]].0;
            let local = cell.vertices.iter().map(|&v| mapping[v].1).collect();
            cells[label].push(Cell::new(cell.cell_type, local));
        } else {
            discarded.push(cell.clone());
        }
    }

    let parts = itertools::izip!(points, cells, global_ids, values)
        .map(|(points, cells, gids, values)| Mesh {
            points,
            cells,
            point_data: components.map(|components| PointData { components, values }),
            global_ids: Some(gids),
        })
        .collect();
    Ok((parts, RecoveryManifest::new(n, &discarded)))
}
