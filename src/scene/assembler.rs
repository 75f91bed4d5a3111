use crate::animation::build_frames;
use crate::cluster::{build_cluster_meshes, build_sample_cloud, SceneError};
use crate::figure::{Figure, Layout, Pad, SceneLayout, Slider, SliderStep, Trace};
use crate::geometry::triangle_indices;
use crate::loader::Dataset;

/// Compose the full scene for a dataset: point cloud first, then the
/// step-0 cluster meshes, then the reference overlay if one was loaded,
/// plus the frame sequence and the timeline slider.
///
/// The point cloud is positionally trace 0 and reference meshes come
/// after the animated clusters, so frame updates (slots
/// `1..=num_clusters`) never touch either.
pub fn assemble(dataset: &Dataset, resolution: usize) -> Result<Figure, SceneError> {
    // Connectivity depends only on resolution; every mesh shares it.
    let indices = triangle_indices(resolution);

    let mut data = vec![Trace::Scatter3d(build_sample_cloud(&dataset.samples))];

    if let Some(initial) = dataset.snapshots.first() {
        for mesh in build_cluster_meshes(initial, &indices, resolution, 0)? {
            data.push(Trace::Mesh3d(mesh));
        }
    }

    if let Some(reference) = &dataset.reference {
        for mesh in build_cluster_meshes(reference, &indices, resolution, 0)? {
            data.push(Trace::Mesh3d(mesh));
        }
    }

    let frames = build_frames(&dataset.snapshots, resolution)?;
    let layout = Layout {
        title: "EM Clustering".to_string(),
        sliders: vec![timeline_slider(&frames)],
        scene: SceneLayout::default(),
    };

    Ok(Figure {
        data,
        frames,
        layout,
    })
}

/// One slider notch per frame, each an instantaneous jump to that frame
fn timeline_slider(frames: &[crate::figure::Frame]) -> Slider {
    Slider {
        pad: Pad { b: 10, t: 60 },
        len: 0.9,
        x: 0.1,
        y: 0.0,
        steps: frames
            .iter()
            .enumerate()
            .map(|(k, frame)| SliderStep::select_frame(frame.name.clone(), k.to_string()))
            .collect(),
    }
}
