use nalgebra::{Matrix3, Vector3};

/// Vertex positions of one ellipsoid surface, as three flat arrays
/// of length `resolution * resolution` (row-major over the angle grid)
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl SurfacePoints {
    /// Number of vertices in the surface
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Compute the 3D surface of the covariance ellipsoid centred at `center`
/// and scaled by `scale` standard deviations.
///
/// The covariance is decomposed with a symmetric eigendecomposition; each
/// eigenvalue gives the squared half-length of one principal axis and its
/// eigenvector gives the axis direction. Eigenpairs are used in the order
/// the decomposition returns them — the pairing is what matters, not the
/// order, so no sorting is applied.
///
/// Caller contract: `cov` must be symmetric positive-semidefinite. A
/// non-PSD matrix produces a nonsensical surface (NaN radii), not an error.
pub fn surface_points(
    cov: &Matrix3<f64>,
    center: &Vector3<f64>,
    resolution: usize,
    scale: f64,
) -> SurfacePoints {
    assert!(resolution >= 2, "resolution must be at least 2");

    let eigen = cov.symmetric_eigen();

    // Half-lengths of the three principal axes.
    let rx = scale * eigen.eigenvalues[0].sqrt();
    let ry = scale * eigen.eigenvalues[1].sqrt();
    let rz = scale * eigen.eigenvalues[2].sqrt();

    // Spherical angle grid: theta sweeps the full circle, phi pole to pole.
    let theta = linspace(0.0, 2.0 * std::f64::consts::PI, resolution);
    let phi = linspace(0.0, std::f64::consts::PI, resolution);

    let n = resolution * resolution;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);

    for t in &theta {
        for p in &phi {
            // Unit sphere stretched into an axis-aligned ellipsoid,
            // rotated into the covariance's principal frame, then
            // translated onto the centroid.
            let local = Vector3::new(
                rx * t.cos() * p.sin(),
                ry * t.sin() * p.sin(),
                rz * p.cos(),
            );
            let world = eigen.eigenvectors * local + center;
            x.push(world.x);
            y.push(world.y);
            z.push(world.z);
        }
    }

    SurfacePoints { x, y, z }
}

/// `count` evenly spaced values covering `[start, end]` inclusive
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
