use nalgebra::{Matrix3, Vector3};

/// One raw sample in normalized color space, plus its rendering weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub weight: f64,
}

/// Per-cluster statistics for one iteration step: centroids paired 1:1
/// by index with covariance matrices
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSnapshot {
    pub centroids: Vec<Vector3<f64>>,
    pub covariances: Vec<Matrix3<f64>>,
}

impl IterationSnapshot {
    pub fn cluster_count(&self) -> usize {
        self.centroids.len()
    }
}

/// Everything one visualization run needs, loaded fully into memory:
/// the static samples, one snapshot per step, and an optional fixed
/// reference overlay for comparison.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub samples: Vec<Sample>,
    pub snapshots: Vec<IterationSnapshot>,
    pub reference: Option<IterationSnapshot>,
}

impl Dataset {
    /// Number of iteration steps (snapshots cover steps `0..=num_steps`)
    pub fn num_steps(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn cluster_count(&self) -> usize {
        self.snapshots.first().map_or(0, |s| s.cluster_count())
    }

    /// Cap the point cloud at `max` samples, keeping the heaviest ones.
    /// Ties keep input order, heavier samples first.
    pub fn retain_heaviest(&mut self, max: usize) {
        if self.samples.len() <= max {
            return;
        }
        self.samples
            .sort_by(|a, b| b.weight.total_cmp(&a.weight));
        self.samples.truncate(max);
    }
}
