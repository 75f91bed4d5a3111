use serde::Serialize;

/// Scene layout: title, timeline slider, and the 3D axis configuration
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub sliders: Vec<Slider>,
    pub scene: SceneLayout,
}

/// Timeline slider bound to the frame list
#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub pad: Pad,
    pub len: f64,
    pub x: f64,
    pub y: f64,
    pub steps: Vec<SliderStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Pad {
    pub b: u32,
    pub t: u32,
}

/// One slider notch: selects a single frame by name
#[derive(Debug, Clone, Serialize)]
pub struct SliderStep {
    pub args: (Vec<String>, FrameArgs),
    pub label: String,
    pub method: &'static str,
}

impl SliderStep {
    /// Bind slider position `label` to an instantaneous jump to `frame_name`
    pub fn select_frame(frame_name: String, label: String) -> Self {
        Self {
            args: (vec![frame_name], FrameArgs::new(0)),
            label,
            method: "animate",
        }
    }
}

/// Frame-selection options for an animate action
#[derive(Debug, Clone, Serialize)]
pub struct FrameArgs {
    pub frame: FrameDuration,
    pub mode: &'static str,
    pub fromcurrent: bool,
    pub transition: Transition,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameDuration {
    pub duration: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub duration: u64,
    pub easing: &'static str,
}

impl FrameArgs {
    /// Immediate-mode frame selection; `duration` 0 gives an
    /// instantaneous scrub, nonzero a linear-eased playback step.
    pub fn new(duration: u64) -> Self {
        Self {
            frame: FrameDuration { duration },
            mode: "immediate",
            fromcurrent: true,
            transition: Transition {
                duration,
                easing: "linear",
            },
        }
    }
}

/// 3D scene axes: a [0,1] color cube labeled by channel
#[derive(Debug, Clone, Serialize)]
pub struct SceneLayout {
    pub hovermode: bool,
    pub aspectmode: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
    pub showspikes: bool,
    pub nticks: u32,
    pub range: [f64; 2],
}

impl Axis {
    fn color_channel(title: &str) -> Self {
        Self {
            title: title.to_string(),
            showspikes: false,
            nticks: 4,
            range: [0.0, 1.0],
        }
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            hovermode: false,
            aspectmode: "cube",
            xaxis: Axis::color_channel("Red"),
            yaxis: Axis::color_channel("Green"),
            zaxis: Axis::color_channel("Blue"),
        }
    }
}
