//! In-memory mesh data model.
//!
//! A [`Mesh`] holds points in a semantically meaningful order (the "global"
//! order referenced by cells and recovery metadata), cells over point
//! indices, optional per-point data and an optional GlobalIDs channel.
//! Meshes produced by this library are built once and not mutated in place.

pub mod cell_type;

pub use cell_type::CellType;

use crate::mesh_error::MeshPartError;

/// A point in 3D space.
pub type Point = [f64; 3];

/// A mesh element: a cell type plus the point indices it connects.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub cell_type: CellType,
    pub vertices: Vec<usize>,
}

impl Cell {
    pub fn new(cell_type: CellType, vertices: Vec<usize>) -> Self {
        Self {
            cell_type,
            vertices,
        }
    }
}

/// Per-point scalar or fixed-width vector data, aligned with the point array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointData {
    /// Components per tuple; 1 for scalar data.
    pub components: usize,
    /// Flattened tuples, `components` values per point.
    pub values: Vec<f64>,
}

impl PointData {
    pub fn scalar(values: Vec<f64>) -> Self {
        Self {
            components: 1,
            values,
        }
    }

    /// Number of tuples stored.
    pub fn len(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.values.len() / self.components
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The data tuple for point `i`.
    pub fn tuple(&self, i: usize) -> &[f64] {
        &self.values[i * self.components..(i + 1) * self.components]
    }
}

/// An unstructured surface/volume mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub points: Vec<Point>,
    pub cells: Vec<Cell>,
    pub point_data: Option<PointData>,
    /// For partition outputs: the original global index of each local point.
    pub global_ids: Option<Vec<u64>>,
}

impl Mesh {
    pub fn new(points: Vec<Point>, cells: Vec<Cell>) -> Self {
        Self {
            points,
            cells,
            point_data: None,
            global_ids: None,
        }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check the structural invariants of the data model.
    ///
    /// Point data and GlobalIDs must be aligned with the point array, every
    /// cell's arity must match its type and every vertex index must be in
    /// range.
    pub fn validate(&self) -> Result<(), MeshPartError> {
        let n = self.points.len();
        if let Some(data) = &self.point_data {
            if data.len() != n {
                return Err(MeshPartError::PointDataLengthMismatch {
                    expected: n,
                    found: data.len(),
                });
            }
        }
        if let Some(gids) = &self.global_ids {
            if gids.len() != n {
                return Err(MeshPartError::GlobalIdCountMismatch {
                    partition: 0,
                    expected: n,
                    found: gids.len(),
                });
            }
        }
        for (c, cell) in self.cells.iter().enumerate() {
            let expected = cell.cell_type.node_count();
            if cell.vertices.len() != expected {
                return Err(MeshPartError::CellArityMismatch {
                    cell: c,
                    cell_type: cell.cell_type,
                    expected,
                    found: cell.vertices.len(),
                });
            }
            for &v in &cell.vertices {
                if v >= n {
                    return Err(MeshPartError::CellVertexOutOfRange {
                        cell: c,
                        vertex: v,
                        point_count: n,
                    });
                }
            }
        }
        Ok(())
    }
}
