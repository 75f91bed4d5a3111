use crate::cluster::{trace_color, trace_name, SceneError};
use crate::figure::{Frame, MeshUpdate};
use crate::geometry::surface_points;
use crate::loader::IterationSnapshot;

/// Build the animation frame sequence, one frame per snapshot, named
/// `"0"` through `"<num_steps>"` in step order.
///
/// Every frame re-evaluates the ellipsoid surfaces of its step and updates
/// the cluster trace slots `1..=num_clusters`. Slot 0 is the point cloud,
/// which never moves and is never part of a frame's update set. Frames
/// carry vertex positions only — connectivity stays with the initial
/// meshes — and each one is self-consistent so the timeline can jump to
/// an arbitrary frame.
pub fn build_frames(
    snapshots: &[IterationSnapshot],
    resolution: usize,
) -> Result<Vec<Frame>, SceneError> {
    let num_clusters = snapshots.first().map_or(0, |s| s.cluster_count());

    let mut frames = Vec::with_capacity(snapshots.len());
    for (step, snapshot) in snapshots.iter().enumerate() {
        if snapshot.centroids.len() != snapshot.covariances.len() {
            return Err(SceneError::ClusterCountMismatch {
                step,
                centroids: snapshot.centroids.len(),
                covariances: snapshot.covariances.len(),
            });
        }
        if snapshot.cluster_count() != num_clusters {
            return Err(SceneError::ClusterCountDrift {
                step,
                expected: num_clusters,
                found: snapshot.cluster_count(),
            });
        }

        let mut data = Vec::with_capacity(num_clusters);
        for (index, (centroid, covariance)) in snapshot
            .centroids
            .iter()
            .zip(&snapshot.covariances)
            .enumerate()
        {
            let surface = surface_points(covariance, centroid, resolution, 1.0);
            data.push(MeshUpdate::new(
                trace_name(index),
                trace_color(centroid),
                surface.x,
                surface.y,
                surface.z,
            ));
        }

        frames.push(Frame {
            name: step.to_string(),
            traces: (1..=num_clusters).collect(),
            data,
        });
    }

    Ok(frames)
}
