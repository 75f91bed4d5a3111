use super::*;
use crate::figure::Trace;
use crate::loader::{Dataset, IterationSnapshot, Sample};
use nalgebra::{Matrix3, Vector3};

fn unit_sphere_dataset() -> Dataset {
    // One sample, one cluster, identity covariance at both steps.
    let snapshot = IterationSnapshot {
        centroids: vec![Vector3::new(0.5, 0.5, 0.5)],
        covariances: vec![Matrix3::identity()],
    };
    Dataset {
        samples: vec![Sample {
            x: 0.5,
            y: 0.5,
            z: 0.5,
            weight: 3.0,
        }],
        snapshots: vec![snapshot.clone(), snapshot],
        reference: None,
    }
}

#[test]
fn test_assemble_end_to_end() {
    let dataset = unit_sphere_dataset();
    let figure = assemble(&dataset, 8).unwrap();

    // One point-cloud trace plus one initial cluster mesh.
    assert_eq!(figure.data.len(), 2);
    assert!(matches!(figure.data[0], Trace::Scatter3d(_)));
    assert_eq!(figure.data[0].name(), "pointcloud");
    assert_eq!(figure.data[1].name(), "cluster_0");

    // The initial mesh is a unit sphere around the centroid.
    let Trace::Mesh3d(mesh) = &figure.data[1] else {
        panic!("trace 1 must be a mesh");
    };
    let center = Vector3::new(0.5, 0.5, 0.5);
    for idx in 0..mesh.x.len() {
        let p = Vector3::new(mesh.x[idx], mesh.y[idx], mesh.z[idx]);
        assert!(((p - center).norm() - 1.0).abs() < 1e-9);
    }

    // Exactly two frames, "0" and "1", describing the same sphere.
    assert_eq!(figure.frames.len(), 2);
    assert_eq!(figure.frames[0].name, "0");
    assert_eq!(figure.frames[1].name, "1");
    assert_eq!(figure.frames[0].data[0].x, figure.frames[1].data[0].x);
    assert_eq!(figure.frames[0].traces, vec![1]);
}

#[test]
fn test_assemble_rejects_mismatched_initial_snapshot() {
    let mut dataset = unit_sphere_dataset();
    dataset.snapshots[0]
        .centroids
        .push(Vector3::new(0.1, 0.1, 0.1));

    assert!(assemble(&dataset, 8).is_err());
}

#[test]
fn test_reference_overlay_is_never_animated() {
    let mut dataset = unit_sphere_dataset();
    dataset.reference = Some(IterationSnapshot {
        centroids: vec![Vector3::new(0.2, 0.2, 0.2)],
        covariances: vec![Matrix3::identity() * 0.01],
    });

    let figure = assemble(&dataset, 8).unwrap();

    // Cloud, animated cluster, reference overlay.
    assert_eq!(figure.data.len(), 3);
    // Frames still only update slot 1; the overlay at slot 2 is fixed.
    for frame in &figure.frames {
        assert_eq!(frame.traces, vec![1]);
    }
}

#[test]
fn test_slider_has_one_step_per_frame() {
    let dataset = unit_sphere_dataset();
    let figure = assemble(&dataset, 4).unwrap();

    assert_eq!(figure.layout.sliders.len(), 1);
    let slider = &figure.layout.sliders[0];
    assert_eq!(slider.steps.len(), figure.frames.len());
    for (k, step) in slider.steps.iter().enumerate() {
        assert_eq!(step.label, k.to_string());
        assert_eq!(step.args.0, vec![figure.frames[k].name.clone()]);
        assert_eq!(step.args.1.frame.duration, 0);
        assert_eq!(step.args.1.transition.easing, "linear");
    }
}

#[test]
fn test_figure_json_shape() {
    let dataset = unit_sphere_dataset();
    let figure = assemble(&dataset, 4).unwrap();
    let value = serde_json::to_value(&figure).unwrap();

    assert_eq!(value["data"][0]["type"], "scatter3d");
    assert_eq!(value["data"][1]["type"], "mesh3d");
    assert_eq!(value["frames"][0]["name"], "0");
    assert_eq!(value["frames"][0]["traces"], serde_json::json!([1]));
    assert_eq!(value["layout"]["title"], "EM Clustering");
    assert_eq!(value["layout"]["scene"]["aspectmode"], "cube");
}

#[test]
fn test_html_renderer_embeds_figure() {
    let dataset = unit_sphere_dataset();
    let figure = assemble(&dataset, 4).unwrap();

    let page = HtmlRenderer::render_to_string(&figure).unwrap();
    assert!(page.contains("Plotly.newPlot"));
    assert!(page.contains("Plotly.addFrames"));
    assert!(page.contains("\"pointcloud\""));
    assert!(page.contains("<title>EM Clustering</title>"));
}

#[test]
fn test_html_renderer_writes_file() {
    let dataset = unit_sphere_dataset();
    let figure = assemble(&dataset, 4).unwrap();

    let out = std::env::temp_dir().join(format!("clusterviz_render_{}.html", std::process::id()));
    HtmlRenderer::new(&out).render(&figure).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("Plotly.newPlot"));
    let _ = std::fs::remove_file(out);
}
