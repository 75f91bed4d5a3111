use nalgebra::Vector3;

use crate::cluster::SceneError;
use crate::figure::{Lighting, LightPosition, Mesh3d};
use crate::geometry::{surface_points, TriangleIndices};
use crate::loader::IterationSnapshot;

/// Translucency shared by every cluster surface
pub const CLUSTER_OPACITY: f64 = 0.25;

/// Stable trace name for cluster `index`, used by both the initial meshes
/// and every frame update so the renderer can match them up
pub fn trace_name(index: usize) -> String {
    format!("cluster_{}", index)
}

/// Display color for a cluster: its centroid coordinates read as an RGB
/// triple, scaled to the 0-255 range. The same centroid always formats to
/// the same string, byte for byte, which keeps a cluster's color stable
/// across the whole animation and the reference overlay.
pub fn trace_color(centroid: &Vector3<f64>) -> String {
    format!(
        "rgb({}, {}, {})",
        centroid.x * 255.0,
        centroid.y * 255.0,
        centroid.z * 255.0
    )
}

/// Build one translucent ellipsoid mesh per cluster of `snapshot`,
/// sharing the precomputed `indices` for connectivity.
///
/// `step` only labels the error when the snapshot's centroid and
/// covariance counts disagree; no mesh is built in that case.
pub fn build_cluster_meshes(
    snapshot: &IterationSnapshot,
    indices: &TriangleIndices,
    resolution: usize,
    step: usize,
) -> Result<Vec<Mesh3d>, SceneError> {
    if snapshot.centroids.len() != snapshot.covariances.len() {
        return Err(SceneError::ClusterCountMismatch {
            step,
            centroids: snapshot.centroids.len(),
            covariances: snapshot.covariances.len(),
        });
    }

    let mut meshes = Vec::with_capacity(snapshot.centroids.len());
    for (index, (centroid, covariance)) in snapshot
        .centroids
        .iter()
        .zip(&snapshot.covariances)
        .enumerate()
    {
        let surface = surface_points(covariance, centroid, resolution, 1.0);
        meshes.push(Mesh3d {
            name: trace_name(index),
            hoverinfo: "none",
            x: surface.x,
            y: surface.y,
            z: surface.z,
            i: indices.i.clone(),
            j: indices.j.clone(),
            k: indices.k.clone(),
            color: trace_color(centroid),
            opacity: CLUSTER_OPACITY,
            lightposition: LightPosition::default(),
            lighting: Lighting::default(),
        });
    }

    Ok(meshes)
}
