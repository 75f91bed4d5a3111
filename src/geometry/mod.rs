mod ellipsoid;
mod topology;


pub use ellipsoid::{surface_points, SurfacePoints};
pub use topology::{triangle_indices, TriangleIndices};

/// Angular resolution of ellipsoid surfaces (grid points per axis)
pub const DEFAULT_RESOLUTION: usize = 24;
