//! Structured test-mesh generators.
//!
//! Experiments and tests need small machine-generated grids; this mirrors
//! the unit-square generators used to prepare mapping test meshes.

use crate::mesh::{Cell, CellType, Mesh, Point};
use crate::mesh_error::MeshPartError;

/// Cell-type choices for structured grids.
#[derive(Clone, Copy, Debug)]
pub enum StructuredCellType {
    Triangle,
    Quad,
}

/// Build an `nx` x `ny` cell grid over the unit square in the Z = 0 plane.
///
/// Points are laid out row-major, `(nx + 1) * (ny + 1)` of them; each grid
/// cell becomes one quad or two triangles.
pub fn unit_grid(nx: usize, ny: usize, cell_type: StructuredCellType) -> Result<Mesh, MeshPartError> {
    if nx == 0 || ny == 0 {
        return Err(MeshPartError::InvalidGeometry(format!(
            "grid must have at least one cell per axis, got {nx} x {ny}"
        )));
    }
    let mut points: Vec<Point> = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            points.push([i as f64 / nx as f64, j as f64 / ny as f64, 0.0]);
        }
    }

    let mut cells = Vec::new();
    for j in 0..ny {
        for i in 0..nx {
            let v00 = j * (nx + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + nx + 1;
            let v11 = v01 + 1;
            match cell_type {
                StructuredCellType::Quad => {
                    cells.push(Cell::new(CellType::Quad, vec![v00, v10, v11, v01]));
                }
                StructuredCellType::Triangle => {
                    cells.push(Cell::new(CellType::Triangle, vec![v00, v10, v01]));
                    cells.push(Cell::new(CellType::Triangle, vec![v10, v11, v01]));
                }
            }
        }
    }
    Ok(Mesh::new(points, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_triangle_grid_matches_reference_layout() {
        let mesh = unit_grid(1, 1, StructuredCellType::Triangle).unwrap();
        assert_eq!(
            mesh.points,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ]
        );
        assert_eq!(mesh.cells.len(), 2);
        assert_eq!(mesh.cells[0].vertices, vec![0, 1, 2]);
        assert_eq!(mesh.cells[1].vertices, vec![1, 3, 2]);
        mesh.validate().unwrap();
    }

    #[test]
    fn quad_grids_validate() {
        let mesh = unit_grid(4, 3, StructuredCellType::Quad).unwrap();
        assert_eq!(mesh.point_count(), 20);
        assert_eq!(mesh.cell_count(), 12);
        mesh.validate().unwrap();
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        assert!(matches!(
            unit_grid(0, 2, StructuredCellType::Quad),
            Err(MeshPartError::InvalidGeometry(_))
        ));
    }
}
