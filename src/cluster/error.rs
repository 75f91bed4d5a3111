use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
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
}
