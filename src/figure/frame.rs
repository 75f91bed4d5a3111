use serde::Serialize;

/// One step of the animated timeline: a partial scene update.
///
/// `traces` lists the trace slots this frame touches (cluster meshes only
/// — slot 0, the point cloud, is never updated). `data` carries one
/// vertex-position update per touched slot, in slot order. A frame is
/// self-consistent in isolation so the timeline can jump to it directly.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub name: String,
    pub traces: Vec<usize>,
    pub data: Vec<MeshUpdate>,
}

/// Partial mesh update: new vertex positions for an existing mesh trace.
/// Connectivity is not resent; the renderer keeps the initial topology.
#[derive(Debug, Clone, Serialize)]
pub struct MeshUpdate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub color: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl MeshUpdate {
    pub fn new(name: String, color: String, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        Self {
            kind: "mesh3d",
            name,
            color,
            x,
            y,
            z,
        }
    }
}
