use serde::Serialize;

/// A named renderable object in the scene, addressable by frames
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Mesh3d(Mesh3d),
    Scatter3d(Scatter3d),
}

impl Trace {
    /// Trace name as seen by the renderer
    pub fn name(&self) -> &str {
        match self {
            Trace::Mesh3d(mesh) => &mesh.name,
            Trace::Scatter3d(cloud) => &cloud.name,
        }
    }
}

/// Triangulated surface mesh descriptor
#[derive(Debug, Clone, Serialize)]
pub struct Mesh3d {
    pub name: String,
    pub hoverinfo: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
    pub color: String,
    pub opacity: f64,
    pub lightposition: LightPosition,
    pub lighting: Lighting,
}

/// Point-cloud descriptor (marker mode scatter)
#[derive(Debug, Clone, Serialize)]
pub struct Scatter3d {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: &'static str,
    pub hoverinfo: &'static str,
    pub marker: Marker,
}

/// Per-point marker styling for a point cloud
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub line: MarkerLine,
    pub size: Vec<f64>,
    pub color: Vec<String>,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLine {
    pub width: f64,
}

/// Light source position for mesh shading
#[derive(Debug, Clone, Serialize)]
pub struct LightPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Mesh lighting parameters
#[derive(Debug, Clone, Serialize)]
pub struct Lighting {
    pub ambient: f64,
    pub diffuse: f64,
    pub roughness: f64,
    pub specular: f64,
}

impl Default for LightPosition {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 1.0,
            z: 0.5,
        }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.9,
            diffuse: 0.9,
            roughness: 0.1,
            specular: 2.0,
        }
    }
}
