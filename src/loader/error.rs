use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Source directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: invalid number {token:?}")]
    InvalidNumber { path: PathBuf, token: String },

    #[error("{path}: {count} values do not reshape into rows of {width}")]
    ShapeMismatch {
        path: PathBuf,
        count: usize,
        width: usize,
    },

    #[error("Step {step}: {centroids} centroids but {covariances} covariance matrices")]
    ClusterCountMismatch {
        step: usize,
        centroids: usize,
        covariances: usize,
    },

    #[error("Step {step}: expected {expected} clusters, found {found}")]
    ClusterCountDrift {
        step: usize,
        expected: usize,
        found: usize,
    },

    #[error("Reference overlay: {centroids} centroids but {covariances} covariance matrices")]
    ReferenceCountMismatch { centroids: usize, covariances: usize },
}
