//! Join partition outputs back into a single mesh.
//!
//! Two modes, mirroring the two guarantees the metadata affords:
//!
//! - [`join_partitionwise`]: concatenate in partition order. Always works,
//!   but the global point order is lost and discarded boundary cells stay
//!   lost.
//! - [`join_recovery`]: scatter by GlobalIDs and re-append the manifest's
//!   discarded cells, reproducing the original point order, point data
//!   order and cell set. Falls back to the partition-wise join with a
//!   warning when a partition lacks its GlobalIDs channel; silently
//!   scattering without them would scramble the result.

use crate::mesh::{Cell, Mesh, PointData};
use crate::mesh_error::MeshPartError;
use crate::recovery::RecoveryManifest;

/// Join partitions, with full recovery when a manifest is available.
pub fn join(parts: &[Mesh], manifest: Option<&RecoveryManifest>) -> Result<Mesh, MeshPartError> {
    if parts.is_empty() {
        return Err(MeshPartError::NoPartitions);
    }
    match manifest {
        Some(manifest) => {
            log::info!("recovery data found; running full mesh recovery");
            join_recovery(parts, manifest)
        }
        None => {
            log::info!("no recovery data given; meshes will be joined partition-wise");
            Ok(join_partitionwise(parts))
        }
    }
}

/// Concatenate partitions in order, remapping cells by a running offset.
///
/// The result has the same point and cell multiset as the partitions, not
/// the original global order; discarded cells are not recovered. A point
/// data channel that is inconsistent across partitions is dropped with a
/// warning rather than concatenated misaligned.
pub fn join_partitionwise(parts: &[Mesh]) -> Mesh {
    let mut joined = Mesh::default();
    let components = parts
        .iter()
        .find_map(|p| p.point_data.as_ref().map(|d| d.components));
    // The channel survives only if every non-empty partition carries data
    // of the same tuple width, aligned with its points.
    let keep_data = components.is_some_and(|components| {
        parts.iter().all(|p| {
            p.point_count() == 0
                || p.point_data
                    .as_ref()
                    .is_some_and(|d| d.components == components && d.len() == p.point_count())
        })
    });
    if components.is_some() && !keep_data {
        log::warn!("point data is inconsistent across partitions; the joined mesh carries none");
    }
    let mut values = Vec::new();
    let mut global_ids = Vec::new();
    let all_have_ids = parts.iter().all(|p| p.global_ids.is_some());

    let mut offset = 0usize;
    for part in parts {
        log::debug!("appending partition with {} points", part.point_count());
        joined.points.extend_from_slice(&part.points);
        if keep_data {
            if let Some(data) = &part.point_data {
                values.extend_from_slice(&data.values);
            }
        }
        if all_have_ids {
            if let Some(ids) = &part.global_ids {
                global_ids.extend_from_slice(ids);
            }
        }
        for cell in &part.cells {
            let vertices = cell.vertices.iter().map(|&v| v + offset).collect();
            joined.cells.push(Cell::new(cell.cell_type, vertices));
        }
        offset += part.point_count();
    }

    if keep_data {
        if let Some(components) = components {
            joined.point_data = Some(PointData { components, values });
        }
    }
    if all_have_ids {
        joined.global_ids = Some(global_ids);
    }
    joined
}

/// Reconstruct the original mesh from partitions plus recovery metadata.
///
/// Every partition must carry a GlobalIDs channel; if one does not, full
/// recovery is impossible and this falls back to [`join_partitionwise`]
/// with a warning. Kept cells are remapped back to global indices, then
/// the manifest's discarded cells are appended verbatim.
pub fn join_recovery(parts: &[Mesh], manifest: &RecoveryManifest) -> Result<Mesh, MeshPartError> {
    if parts.is_empty() {
        return Err(MeshPartError::NoPartitions);
    }
    let mut all_gids = Vec::with_capacity(parts.len());
    for part in parts {
        match &part.global_ids {
            Some(gids) => all_gids.push(gids),
            None => {
                log::warn!("GlobalIDs were not found; a recovery merge is not possible");
                return Ok(join_partitionwise(parts));
            }
        }
    }

    let size = manifest.size;
    log::debug!(
        "original mesh contains {size} points, {} cells discarded during partitioning",
        manifest.discarded_count()
    );
    let total: usize = parts.iter().map(|p| p.point_count()).sum();
    if total != size {
        log::warn!("partitions hold {total} points, recovery data expects {size}");
    }

    let components = parts
        .iter()
        .find_map(|p| p.point_data.as_ref().map(|d| d.components));
    let mut points = vec![[0.0; 3]; size];
    let mut values = components.map(|c| vec![0.0; c * size]);
    let mut cells = Vec::new();

    for (partition, (part, gids)) in parts.iter().zip(all_gids).enumerate() {
        if gids.len() != part.point_count() {
            return Err(MeshPartError::GlobalIdCountMismatch {
                partition,
                expected: part.point_count(),
                found: gids.len(),
            });
        }
        if let Some(data) = &part.point_data {
            if data.len() != part.point_count() {
                return Err(MeshPartError::PointDataLengthMismatch {
                    expected: part.point_count(),
                    found: data.len(),
                });
            }
            if let Some(components) = components {
                if data.components != components {
                    return Err(MeshPartError::PointDataComponentMismatch {
                        partition,
                        expected: components,
                        found: data.components,
                    });
                }
            }
        }
        for (local, (&gid, &point)) in gids.iter().zip(&part.points).enumerate() {
            let global = usize::try_from(gid).unwrap_or(usize::MAX);
            if global >= size {
                return Err(MeshPartError::GlobalIdOutOfRange {
                    partition,
                    local,
                    global: gid,
                    size,
                });
            }
            points[global] = point;
            if let (Some(values), Some(data)) = (values.as_mut(), part.point_data.as_ref()) {
                let tuple = data.tuple(local);
                values[global * tuple.len()..(global + 1) * tuple.len()].copy_from_slice(tuple);
            }
        }
        for cell in &part.cells {
            let mut vertices = Vec::with_capacity(cell.vertices.len());
            for &v in &cell.vertices {
                let gid = gids.get(v).ok_or(MeshPartError::CellVertexOutOfRange {
                    cell: cells.len(),
                    vertex: v,
                    point_count: part.point_count(),
                })?;
                vertices.push(*gid as usize);
            }
            cells.push(Cell::new(cell.cell_type, vertices));
        }
    }

    cells.extend(manifest.discarded_cells()?);

    Ok(Mesh {
        points,
        cells,
        point_data: components
            .zip(values)
            .map(|(components, values)| PointData { components, values }),
        global_ids: None,
    })
}
