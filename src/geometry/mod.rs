//! Planarity detection and in-plane coordinate reduction.
//!
//! Partitioning strategies that reason about a 2D layout (meshfree
//! clustering, uniform grids) call [`reduce_dimension`] first: if the mesh
//! is geometrically flat — however it is oriented or translated in space —
//! the points are rotated into the XY plane and returned as 2D
//! coordinates. A non-planar mesh is returned unchanged; that is a policy
//! outcome, not an error.

use crate::mesh::Point;

/// Tolerance for the plane-membership and dead-axis tests.
///
/// The source meshes are machine-generated grids, so membership is sharp in
/// practice; the tolerance absorbs rounding from the rotation itself.
pub const PLANARITY_EPS: f64 = 1e-9;

/// Result of a dimension-reduction attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum ReducedPoints {
    /// All points lie in one plane; coordinates within that plane.
    Planar(Vec<[f64; 2]>),
    /// The points span three dimensions; returned unchanged.
    Spatial(Vec<Point>),
}

impl ReducedPoints {
    pub fn is_planar(&self) -> bool {
        matches!(self, ReducedPoints::Planar(_))
    }

    pub fn len(&self) -> usize {
        match self {
            ReducedPoints::Planar(p) => p.len(),
            ReducedPoints::Spatial(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reduce a 3D point set to 2D coordinates if it is planar.
///
/// The plane is sampled from the first two and the last point; every point
/// is then tested against the plane normal within [`PLANARITY_EPS`]. Planar
/// input is translated by `-p0`, rotated so the normal aligns with the Z
/// axis (Euler–Rodrigues half-angle rotation) and stripped of the constant
/// third coordinate. Anything else comes back as [`ReducedPoints::Spatial`].
pub fn reduce_dimension(points: &[Point]) -> ReducedPoints {
    if points.len() < 3 {
        return ReducedPoints::Spatial(points.to_vec());
    }
    if let Some(planar) = drop_dead_axis(points) {
        return ReducedPoints::Planar(planar);
    }

    let p0 = points[0];
    let n = cross(sub(points[1], p0), sub(*points.last().unwrap(), p0));
    let n_len = norm(n);
    if n_len <= PLANARITY_EPS {
        // Sampled points are collinear; no usable plane.
        return ReducedPoints::Spatial(points.to_vec());
    }
    let n = scale(n, 1.0 / n_len);
    for &x in points {
        if dot(sub(x, p0), n).abs() > PLANARITY_EPS {
            return ReducedPoints::Spatial(points.to_vec());
        }
    }

    let z_unit = [0.0, 0.0, 1.0];
    let axis = cross(n, z_unit);
    let axis_len = norm(axis);
    if axis_len <= PLANARITY_EPS {
        // Normal already parallel to +/-Z: the plane is z = const, so the
        // in-plane coordinates are simply (x, y).
        return ReducedPoints::Planar(points.iter().map(|p| [p[0], p[1]]).collect());
    }

    let phi = dot(n, z_unit).clamp(-1.0, 1.0).acos();
    log::info!(
        "rotating planar mesh by {:.3} degrees into the XY plane",
        phi.to_degrees()
    );
    let axis = scale(axis, 1.0 / axis_len);
    let rot = euler_rodrigues(axis, phi);
    let planar = points
        .iter()
        .map(|&x| {
            let t = sub(x, p0);
            // Row-vector times matrix convention.
            let u = t[0] * rot[0][0] + t[1] * rot[1][0] + t[2] * rot[2][0];
            let v = t[0] * rot[0][1] + t[1] * rot[1][1] + t[2] * rot[2][1];
            [u, v]
        })
        .collect();
    ReducedPoints::Planar(planar)
}

/// Fast path: if exactly one coordinate axis is identically zero, drop it.
fn drop_dead_axis(points: &[Point]) -> Option<Vec<[f64; 2]>> {
    let mut dead = [true; 3];
    for p in points {
        for axis in 0..3 {
            if p[axis].abs() > PLANARITY_EPS {
                dead[axis] = false;
            }
        }
        if dead.iter().all(|d| !d) {
            return None;
        }
    }
    let live: Vec<usize> = (0..3).filter(|&a| !dead[a]).collect();
    if live.len() != 2 {
        return None;
    }
    Some(points.iter().map(|p| [p[live[0]], p[live[1]]]).collect())
}

fn euler_rodrigues(axis: Point, phi: f64) -> [[f64; 3]; 3] {
    let a = (phi / 2.0).cos();
    let b = (phi / 2.0).sin() * axis[0];
    let c = (phi / 2.0).sin() * axis[1];
    let d = (phi / 2.0).sin() * axis[2];
    [
        [
            a * a + b * b - c * c - d * d,
            2.0 * (b * c - a * d),
            2.0 * (b * d + a * c),
        ],
        [
            2.0 * (b * c + a * d),
            a * a + c * c - b * b - d * d,
            2.0 * (c * d - a * b),
        ],
        [
            2.0 * (b * d - a * c),
            2.0 * (c * d + a * b),
            a * a + d * d - b * b - c * c,
        ],
    ]
}

fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: Point, b: Point) -> Point {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: Point, b: Point) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: Point) -> f64 {
    dot(a, a).sqrt()
}

fn scale(a: Point, s: f64) -> Point {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_plane_points_are_returned_unchanged() {
        let pts = vec![
            [0.5, 0.5, 0.0],
            [1.5, 0.5, 0.0],
            [0.5, 1.5, 0.0],
            [1.5, 1.5, 0.0],
        ];
        match reduce_dimension(&pts) {
            ReducedPoints::Planar(p) => {
                assert_eq!(p, vec![[0.5, 0.5], [1.5, 0.5], [0.5, 1.5], [1.5, 1.5]]);
            }
            other => panic!("expected planar result, got {other:?}"),
        }
    }

    #[test]
    fn reduction_is_idempotent_for_reduced_points() {
        let pts = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ];
        let once = match reduce_dimension(&pts) {
            ReducedPoints::Planar(p) => p,
            other => panic!("expected planar result, got {other:?}"),
        };
        let reembedded: Vec<Point> = once.iter().map(|&[x, y]| [x, y, 0.0]).collect();
        let twice = match reduce_dimension(&reembedded) {
            ReducedPoints::Planar(p) => p,
            other => panic!("expected planar result, got {other:?}"),
        };
        assert_eq!(once, twice);
    }

    #[test]
    fn dead_x_axis_is_dropped() {
        let pts = vec![[0.0, 1.0, 2.0], [0.0, 3.0, 4.0], [0.0, 5.0, 6.0]];
        assert_eq!(
            reduce_dimension(&pts),
            ReducedPoints::Planar(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
        );
    }

    #[test]
    fn tilted_plane_is_flattened() {
        // Points in the x = y plane.
        let pts = vec![
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 0.5],
        ];
        let reduced = reduce_dimension(&pts);
        let planar = match reduced {
            ReducedPoints::Planar(p) => p,
            other => panic!("expected planar result, got {other:?}"),
        };
        // In-plane distances survive the rotation.
        let d = |a: [f64; 2], b: [f64; 2]| ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
        assert!((d(planar[0], planar[1]) - 2.0_f64.sqrt()).abs() < 1e-9);
        assert!((d(planar[0], planar[2]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_planar_points_come_back_unchanged() {
        let pts = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.3, 0.3, 1.0],
            [1.0, 1.0, 1.0],
        ];
        assert_eq!(reduce_dimension(&pts), ReducedPoints::Spatial(pts.clone()));
    }

    #[test]
    fn collinear_sample_falls_back_to_spatial() {
        // First, second and last point on one line: no plane to sample.
        let pts = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [5.0, 1.0, 0.0], [2.0, 2.0, 2.0]];
        assert!(!reduce_dimension(&pts).is_planar());
    }
}
