use super::*;
use crate::cluster::{trace_color, SceneError};
use crate::loader::IterationSnapshot;
use nalgebra::{Matrix3, Vector3};

fn snapshot(clusters: usize) -> IterationSnapshot {
    IterationSnapshot {
        centroids: (0..clusters)
            .map(|i| Vector3::new(i as f64 * 0.1, 0.5, 0.5))
            .collect(),
        covariances: vec![Matrix3::identity(); clusters],
    }
}

#[test]
fn test_one_frame_per_step_in_order() {
    let snapshots = vec![snapshot(2), snapshot(2), snapshot(2), snapshot(2)];
    let frames = build_frames(&snapshots, 4).unwrap();

    assert_eq!(frames.len(), 4);
    for (step, frame) in frames.iter().enumerate() {
        assert_eq!(frame.name, step.to_string());
    }
}

#[test]
fn test_frames_update_only_cluster_slots() {
    let snapshots = vec![snapshot(3), snapshot(3)];
    let frames = build_frames(&snapshots, 4).unwrap();

    for frame in &frames {
        assert_eq!(frame.traces, vec![1, 2, 3]);
        assert!(!frame.traces.contains(&0), "point-cloud slot must stay fixed");
        assert_eq!(frame.data.len(), 3);
    }
}

#[test]
fn test_frame_data_matches_initial_mesh_identity() {
    let resolution = 6;
    let snapshots = vec![snapshot(2), snapshot(2)];
    let frames = build_frames(&snapshots, resolution).unwrap();

    let frame = &frames[1];
    assert_eq!(frame.data[0].name, "cluster_0");
    assert_eq!(frame.data[1].name, "cluster_1");
    assert_eq!(frame.data[0].color, trace_color(&snapshots[1].centroids[0]));
    assert_eq!(frame.data[0].x.len(), resolution * resolution);
}

#[test]
fn test_unchanged_covariance_gives_identical_frames() {
    let snapshots = vec![snapshot(1), snapshot(1)];
    let frames = build_frames(&snapshots, 8).unwrap();

    assert_eq!(frames[0].data[0].x, frames[1].data[0].x);
    assert_eq!(frames[0].data[0].y, frames[1].data[0].y);
    assert_eq!(frames[0].data[0].z, frames[1].data[0].z);
}

#[test]
fn test_cluster_count_drift_rejected() {
    let snapshots = vec![snapshot(2), snapshot(3)];
    let err = build_frames(&snapshots, 4).unwrap_err();
    assert!(matches!(
        err,
        SceneError::ClusterCountDrift {
            step: 1,
            expected: 2,
            found: 3,
        }
    ));
}

#[test]
fn test_pair_mismatch_rejected() {
    let mut bad = snapshot(2);
    bad.covariances.pop();
    let err = build_frames(&[snapshot(2), bad], 4).unwrap_err();
    assert!(matches!(err, SceneError::ClusterCountMismatch { step: 1, .. }));
}

#[test]
fn test_empty_run_yields_no_frames() {
    let frames = build_frames(&[], 4).unwrap();
    assert!(frames.is_empty());
}
