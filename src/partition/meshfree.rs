//! Meshfree partitioning: k-means clustering of point coordinates.
//!
//! Works on arbitrary meshes and point clouds since it never looks at the
//! cells. Coordinates are dimension-reduced first so a flat mesh floating
//! somewhere in 3D clusters in its own plane.

use crate::geometry::{ReducedPoints, reduce_dimension};
use crate::mesh::Mesh;
use crate::mesh_error::MeshPartError;
use crate::partition::{PartitionAssignment, PartitionId, PartitionerConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Assign points to `cfg.num_parts` clusters by k-means.
pub fn partition_meshfree(
    mesh: &Mesh,
    cfg: &PartitionerConfig,
) -> Result<PartitionAssignment, MeshPartError> {
    let mut rng = SmallRng::seed_from_u64(cfg.rng_seed);
    let labels = match reduce_dimension(&mesh.points) {
        ReducedPoints::Planar(points) => kmeans(&points, cfg.num_parts, cfg.max_iters, &mut rng),
        ReducedPoints::Spatial(points) => kmeans(&points, cfg.num_parts, cfg.max_iters, &mut rng),
    };
    PartitionAssignment::new(labels, cfg.num_parts)
}

/// Lloyd's algorithm with centroids seeded from random data points.
///
/// Empty clusters are reseeded from a random point, so every returned label
/// is in `[0, k)` but clusters are not guaranteed non-empty for pathological
/// inputs (fewer distinct points than clusters).
fn kmeans<const D: usize>(
    points: &[[f64; D]],
    k: usize,
    max_iters: usize,
    rng: &mut SmallRng,
) -> Vec<PartitionId> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut centroids: Vec<[f64; D]> = (0..k)
        .map(|_| points[rng.gen_range(0..points.len())])
        .collect();
    let mut labels = vec![0usize; points.len()];

    for _ in 0..max_iters {
        let mut changed = false;
        for (i, p) in points.iter().enumerate() {
            let nearest = nearest_centroid(p, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }

        let mut sums = vec![[0.0; D]; k];
        let mut counts = vec![0usize; k];
        for (p, &label) in points.iter().zip(&labels) {
            counts[label] += 1;
            for d in 0..D {
                sums[label][d] += p[d];
            }
        }
        for (c, centroid) in centroids.iter_mut().enumerate() {
            if counts[c] == 0 {
                *centroid = points[rng.gen_range(0..points.len())];
                changed = true;
            } else {
                for d in 0..D {
                    centroid[d] = sums[c][d] / counts[c] as f64;
                }
            }
        }

        if !changed {
            break;
        }
    }
    labels
}

fn nearest_centroid<const D: usize>(p: &[f64; D], centroids: &[[f64; D]]) -> usize {
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let mut dist = 0.0;
        for d in 0..D {
            let delta = p[d] - centroid[d];
            dist += delta * delta;
        }
        if dist < best_dist {
            best = c;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    fn two_blobs() -> Mesh {
        let mut points = Vec::new();
        for i in 0..10 {
            points.push([i as f64 * 0.01, 0.0, 0.0]);
            points.push([100.0 + i as f64 * 0.01, 0.0, 0.0]);
        }
        Mesh::new(points, Vec::new())
    }

    #[test]
    fn separated_blobs_split_cleanly() {
        let cfg = PartitionerConfig {
            num_parts: 2,
            ..Default::default()
        };
        let assignment = partition_meshfree(&two_blobs(), &cfg).unwrap();
        let labels = assignment.labels();
        assert_eq!(labels.len(), 20);
        // Even indices are the left blob, odd the right one.
        let left = labels[0];
        let right = labels[1];
        assert_ne!(left, right);
        assert!(labels.iter().step_by(2).all(|&l| l == left));
        assert!(labels.iter().skip(1).step_by(2).all(|&l| l == right));
    }

    #[test]
    fn pinned_seed_is_deterministic() {
        let cfg = PartitionerConfig {
            num_parts: 3,
            rng_seed: 7,
            ..Default::default()
        };
        let mesh = two_blobs();
        let a = partition_meshfree(&mesh, &cfg).unwrap();
        let b = partition_meshfree(&mesh, &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn labels_stay_in_range() {
        let mesh = two_blobs();
        for num_parts in 2..6 {
            let cfg = PartitionerConfig {
                num_parts,
                rng_seed: 11,
                ..Default::default()
            };
            let assignment = partition_meshfree(&mesh, &cfg).unwrap();
            assert_eq!(assignment.len(), mesh.point_count());
            assert!(assignment.labels().iter().all(|&l| l < num_parts));
        }
    }

    #[test]
    fn empty_point_cloud_yields_empty_assignment() {
        let cfg = PartitionerConfig {
            num_parts: 2,
            ..Default::default()
        };
        let assignment = partition_meshfree(&Mesh::default(), &cfg).unwrap();
        assert!(assignment.is_empty());
    }
}
