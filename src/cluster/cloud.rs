use nalgebra::Vector3;

use crate::cluster::mesh::trace_color;
use crate::figure::{Marker, MarkerLine, Scatter3d};
use crate::loader::Sample;

/// Translucency of the sample point cloud
pub const CLOUD_OPACITY: f64 = 0.25;

/// Largest rendered point size
pub const MAX_POINT_SIZE: f64 = 128.0;

/// Marker size for a sample weight.
///
/// Points are perceived through their surface, not their radius, so the
/// size is chosen to make marker *area* scale linearly with weight:
/// `sqrt(weight / pi) * 4`, clipped to `[0, 128]`.
pub fn point_size(weight: f64) -> f64 {
    ((weight / std::f64::consts::PI).sqrt() * 4.0).clamp(0.0, MAX_POINT_SIZE)
}

/// Build the static point-cloud trace for the raw samples.
///
/// Each point is colored by its own position read as RGB. The cloud is
/// positionally the first trace of the scene and is never touched by
/// animation frames.
pub fn build_sample_cloud(samples: &[Sample]) -> Scatter3d {
    let mut x = Vec::with_capacity(samples.len());
    let mut y = Vec::with_capacity(samples.len());
    let mut z = Vec::with_capacity(samples.len());
    let mut size = Vec::with_capacity(samples.len());
    let mut color = Vec::with_capacity(samples.len());

    for sample in samples {
        x.push(sample.x);
        y.push(sample.y);
        z.push(sample.z);
        size.push(point_size(sample.weight));
        color.push(trace_color(&Vector3::new(sample.x, sample.y, sample.z)));
    }

    Scatter3d {
        name: "pointcloud".to_string(),
        x,
        y,
        z,
        mode: "markers",
        hoverinfo: "none",
        marker: Marker {
            line: MarkerLine { width: 0.0 },
            size,
            color,
            opacity: CLOUD_OPACITY,
        },
    }
}
