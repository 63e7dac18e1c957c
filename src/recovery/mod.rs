//! Recovery metadata for reassembling a partitioned mesh.
//!
//! The manifest is the small record persisted between the partition and
//! join phases: the original point count plus every cell that was discarded
//! because its vertices span more than one partition. Its serde form is the
//! plain JSON object `{"size": .., "cells": [[..]], "cell_types": [..]}`
//! with VTK cell type codes, so existing recovery files parse unchanged.

pub mod join;

pub use join::{join, join_partitionwise, join_recovery};

use crate::mesh::{Cell, CellType};
use crate::mesh_error::MeshPartError;
use serde::{Deserialize, Serialize};

/// Metadata required to reconstruct the original mesh from its partitions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryManifest {
    /// Point count of the pre-partition mesh.
    pub size: usize,
    /// Discarded cells, as global point indices.
    pub cells: Vec<Vec<usize>>,
    /// VTK cell type code of each discarded cell.
    pub cell_types: Vec<u8>,
}

impl RecoveryManifest {
    /// Record `discarded` cells of an original mesh with `size` points.
    pub fn new(size: usize, discarded: &[Cell]) -> Self {
        Self {
            size,
            cells: discarded.iter().map(|c| c.vertices.clone()).collect(),
            cell_types: discarded.iter().map(|c| c.cell_type.vtk_code()).collect(),
        }
    }

    /// Number of cells discarded during partitioning.
    pub fn discarded_count(&self) -> usize {
        self.cells.len()
    }

    /// Decode the discarded cells back into typed form.
    ///
    /// Validates the record invariants: paired lists, known type codes,
    /// arity matching the type, indices inside `[0, size)`.
    pub fn discarded_cells(&self) -> Result<Vec<Cell>, MeshPartError> {
        if self.cells.len() != self.cell_types.len() {
            return Err(MeshPartError::ManifestLengthMismatch {
                cells: self.cells.len(),
                cell_types: self.cell_types.len(),
            });
        }
        let mut decoded = Vec::with_capacity(self.cells.len());
        for (c, (vertices, &code)) in self.cells.iter().zip(&self.cell_types).enumerate() {
            let cell_type = CellType::from_vtk_code(code)?;
            if vertices.len() != cell_type.node_count() {
                return Err(MeshPartError::CellArityMismatch {
                    cell: c,
                    cell_type,
                    expected: cell_type.node_count(),
                    found: vertices.len(),
                });
            }
            for &v in vertices {
                if v >= self.size {
                    return Err(MeshPartError::CellVertexOutOfRange {
                        cell: c,
                        vertex: v,
                        point_count: self.size,
                    });
                }
            }
            decoded.push(Cell::new(cell_type, vertices.clone()));
        }
        Ok(decoded)
    }
}
