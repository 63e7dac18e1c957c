//! Cell type metadata for mesh elements.

use crate::mesh_error::MeshPartError;

/// Element types supported by the partitioner.
///
/// The numeric codes follow the VTK convention because the recovery
/// manifest and the surrounding mesh I/O tooling speak VTK cell types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellType {
    /// 1D segment/edge.
    Line,
    /// 2D simplex.
    Triangle,
    /// 2D tensor-product cell.
    Quad,
    /// 3D simplex.
    Tetra,
}

impl CellType {
    /// Number of vertices a cell of this type connects.
    pub fn node_count(self) -> usize {
        match self {
            CellType::Line => 2,
            CellType::Triangle => 3,
            CellType::Quad | CellType::Tetra => 4,
        }
    }

    /// VTK cell type code.
    pub fn vtk_code(self) -> u8 {
        match self {
            CellType::Line => 3,
            CellType::Triangle => 5,
            CellType::Quad => 9,
            CellType::Tetra => 10,
        }
    }

    /// Decode a VTK cell type code.
    pub fn from_vtk_code(code: u8) -> Result<Self, MeshPartError> {
        match code {
            3 => Ok(CellType::Line),
            5 => Ok(CellType::Triangle),
            9 => Ok(CellType::Quad),
            10 => Ok(CellType::Tetra),
            other => Err(MeshPartError::UnknownCellTypeCode(other)),
        }
    }
}
