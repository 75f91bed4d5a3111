// Public API exports
pub mod animation;
pub mod cluster;
pub mod figure;
pub mod geometry;
pub mod loader;
pub mod scene;

// Re-export main types for convenience
pub use geometry::{
    surface_points, triangle_indices, SurfacePoints, TriangleIndices, DEFAULT_RESOLUTION,
};

pub use figure::{Figure, Frame, Layout, Mesh3d, MeshUpdate, Scatter3d, Trace};

pub use cluster::{
    build_cluster_meshes, build_sample_cloud, point_size, trace_color, trace_name, SceneError,
};

pub use animation::build_frames;

pub use loader::{load_dataset, Dataset, IterationSnapshot, LoaderError, Sample};

pub use scene::{assemble, HtmlRenderer, Renderer};
