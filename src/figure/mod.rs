mod frame;
mod layout;
mod trace;


pub use frame::{Frame, MeshUpdate};
pub use layout::{
    Axis, FrameArgs, FrameDuration, Layout, Pad, SceneLayout, Slider, SliderStep, Transition,
};
pub use trace::{Lighting, LightPosition, Marker, MarkerLine, Mesh3d, Scatter3d, Trace};

use serde::Serialize;

/// Complete renderer-facing document: initial traces, animation frames,
/// and scene layout. Serializes to the JSON the external renderer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub frames: Vec<Frame>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
