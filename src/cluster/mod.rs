mod cloud;
mod error;
mod mesh;


pub use cloud::{build_sample_cloud, point_size, CLOUD_OPACITY, MAX_POINT_SIZE};
pub use error::SceneError;
pub use mesh::{build_cluster_meshes, trace_color, trace_name, CLUSTER_OPACITY};
