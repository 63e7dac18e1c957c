//! Analytic partitioning of uniform planar grids.
//!
//! Assumes the mesh is a 2D grid laid out somehow in 3D: reduce to the
//! plane, factor `num_parts` into two balanced block counts and bin every
//! point into a block by its coordinates. Returns `None` when the mesh is
//! not planar, in which case the caller falls back to the meshfree
//! strategy.

use crate::geometry::{ReducedPoints, reduce_dimension};
use crate::mesh::Mesh;
use crate::mesh_error::MeshPartError;
use crate::partition::{PartitionAssignment, PartitionerConfig};
use itertools::{Itertools, MinMaxResult};

/// Partition a planar grid into `num_parts` rectangular blocks.
pub fn partition_uniform(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
) -> Result<Option<PartitionAssignment>, MeshPartError> {
    let points = match reduce_dimension(&mesh.points) {
        ReducedPoints::Planar(points) => points,
        ReducedPoints::Spatial(_) => return Ok(None),
    };
    if points.is_empty() {
        return Ok(Some(PartitionAssignment::new(Vec::new(), cfg.num_parts)?));
    }

    let (min, max) = bounding_box(&points);
    let big_axis = if max[0] - min[0] >= max[1] - min[1] { 0 } else { 1 };
    let small_axis = 1 - big_axis;
    let (small, big) = grid_factors(cfg.num_parts);
    let small_interval = (max[small_axis] - min[small_axis]) / small as f64;
    let big_interval = (max[big_axis] - min[big_axis]) / big as f64;
    log::info!(
        "uniform partitioning of {} points into {} x {} blocks",
        points.len(),
        small,
        big
    );

    let labels = points
        .iter()
        .map(|p| {
            let small_index = bin_index(p[small_axis] - min[small_axis], small_interval, small);
            let big_index = bin_index(p[big_axis] - min[big_axis], big_interval, big);
            small_index * big + big_index
        })
        .collect();
    Ok(Some(PartitionAssignment::new(labels, cfg.num_parts)?))
}

/// Split `num_parts` into two factors of comparable magnitude.
///
/// Prime factors are fed largest-first into whichever bucket currently
/// trails, so `num_parts` need not be a perfect square; when it is one,
/// both factors equal its square root.
pub fn grid_factors(num_parts: usize) -> (usize, usize) {
    let mut small = 1;
    let mut big = 1;
    for factor in prime_factors(num_parts).into_iter().rev() {
        if big <= small {
            big *= factor;
        } else {
            small *= factor;
        }
    }
    (small, big)
}

fn prime_factors(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            n /= i;
            factors.push(i);
        } else {
            i += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn bounding_box(points: &[[f64; 2]]) -> ([f64; 2], [f64; 2]) {
    let mut min = [0.0; 2];
    let mut max = [0.0; 2];
    for axis in 0..2 {
        match points.iter().map(|p| p[axis]).minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => unreachable!("caller checks for empty input"),
            MinMaxResult::OneElement(v) => {
                min[axis] = v;
                max[axis] = v;
            }
            MinMaxResult::MinMax(lo, hi) => {
                min[axis] = lo;
                max[axis] = hi;
            }
        }
    }
    (min, max)
}

/// Linear binning clamped to `[0, bins - 1]`, absorbing points exactly on
/// the upper boundary and degenerate zero extents.
fn bin_index(offset: f64, interval: f64, bins: usize) -> usize {
    if interval <= 0.0 {
        return 0;
    }
    ((offset / interval) as usize).min(bins - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::meshgen::{StructuredCellType, unit_grid};

    #[test]
    fn perfect_squares_factor_evenly() {
        for k in 1..12 {
            assert_eq!(grid_factors(k * k), (k, k));
        }
    }

    #[test]
    fn factors_multiply_back() {
        for n in 1..60 {
            let (small, big) = grid_factors(n);
            assert_eq!(small * big, n);
            assert!(small <= big);
        }
    }

    #[test]
    fn unit_square_quarters() {
        let mesh = unit_grid(3, 3, StructuredCellType::Quad).unwrap();
        let cfg = PartitionerConfig {
            num_parts: 4,
            ..Default::default()
        };
        let assignment = partition_uniform(&mesh, &cfg).unwrap().unwrap();
        let labels = assignment.labels();
        assert_eq!(labels.len(), 16);
        // Corner points land in four different blocks.
        let corners = [labels[0], labels[3], labels[12], labels[15]];
        let mut sorted = corners.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
    }

    #[test]
    fn two_by_two_grid_splits_along_one_axis() {
        let mesh = unit_grid(1, 1, StructuredCellType::Triangle).unwrap();
        let cfg = PartitionerConfig {
            num_parts: 2,
            ..Default::default()
        };
        let assignment = partition_uniform(&mesh, &cfg).unwrap().unwrap();
        let labels = assignment.labels();
        // Points 0 and 2 share x = 0, points 1 and 3 share x = 1.
        assert_eq!(labels[0], labels[2]);
        assert_eq!(labels[1], labels[3]);
        assert_ne!(labels[0], labels[1]);
    }

    #[test]
    fn non_planar_mesh_is_inapplicable() {
        let mesh = Mesh::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.5, 0.5, 1.0],
            ],
            Vec::new(),
        );
        let cfg = PartitionerConfig {
            num_parts: 2,
            ..Default::default()
        };
        assert_eq!(partition_uniform(&mesh, &cfg).unwrap(), None);
    }
}
