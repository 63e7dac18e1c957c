//! METIS adapter for the topology strategy.
//!
//! Wraps `METIS_PartMeshNodal` from `metis-sys` behind [`GraphPartitioner`]
//! so the FFI call and the library's `idx_t` width (32- or 64-bit,
//! depending on how METIS was built) stay isolated to this module.

use crate::mesh_error::MeshPartError;
use crate::partition::topology::GraphPartitioner;
use crate::partition::PartitionId;
use metis_sys as m;

/// Graph-partitioning collaborator backed by the native METIS library.
pub struct MetisPartitioner;

impl GraphPartitioner for MetisPartitioner {
    fn partition(
        &self,
        cell_ptr: &[usize],
        cell_data: &[usize],
        point_count: usize,
        num_parts: usize,
    ) -> Result<Vec<PartitionId>, MeshPartError> {
        let cell_count = cell_ptr.len().saturating_sub(1);
        let mut ne = idx(cell_count)?;
        let mut nn = idx(point_count)?;
        let mut nparts = idx(num_parts)?;
        let mut eptr = to_idx_vec(cell_ptr)?;
        let mut eind = to_idx_vec(cell_data)?;
        let mut epart = vec![0 as m::idx_t; cell_count];
        let mut npart = vec![0 as m::idx_t; point_count];
        let mut options = [0 as m::idx_t; m::METIS_NOPTIONS as usize];
        let mut objval: m::idx_t = 0;

        let status = unsafe {
            m::METIS_SetDefaultOptions(options.as_mut_ptr());
            m::METIS_PartMeshNodal(
                &mut ne,
                &mut nn,
                eptr.as_mut_ptr(),
                eind.as_mut_ptr(),
                std::ptr::null_mut(), // vwgt
                std::ptr::null_mut(), // vsize
                &mut nparts,
                std::ptr::null_mut(), // tpwgts
                options.as_mut_ptr(),
                &mut objval,
                epart.as_mut_ptr(),
                npart.as_mut_ptr(),
            )
        };
        if status != m::rstatus_et_METIS_OK {
            return Err(MeshPartError::GraphPartitioner(format!(
                "METIS_PartMeshNodal returned status {status}"
            )));
        }
        Ok(npart.into_iter().map(|p| p as PartitionId).collect())
    }
}

fn idx(value: usize) -> Result<m::idx_t, MeshPartError> {
    m::idx_t::try_from(value).map_err(|_| {
        MeshPartError::GraphPartitioner(format!("value {value} does not fit METIS idx_t"))
    })
}

fn to_idx_vec(values: &[usize]) -> Result<Vec<m::idx_t>, MeshPartError> {
    values.iter().map(|&v| idx(v)).collect()
}
