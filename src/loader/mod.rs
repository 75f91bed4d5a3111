mod dataset;
mod error;


pub use dataset::{Dataset, IterationSnapshot, Sample};
pub use error::LoaderError;

use nalgebra::{Matrix3, Vector3};
use std::fs;
use std::path::Path;

/// Load a full visualization dataset from a source directory.
///
/// Expects whitespace-delimited numeric text tables:
/// - `samples.txt` — rows of 4 floats (x, y, z, weight)
/// - `centroids_<step:03>.txt` — rows of 3 floats, one file per step `0..=steps`
/// - `covariances_<step:03>.txt` — rows of 9 floats, one 3x3 matrix per row
/// - optional `ref_centroids.txt` / `ref_covariances.txt` in the same formats;
///   the reference overlay exists only when both files are present
///
/// All shape validation happens here, before any geometry work: fixed row
/// widths, per-step centroid/covariance count agreement, and a constant
/// cluster count across steps. Any failure is fatal.
pub fn load_dataset(dir: &Path, steps: usize) -> Result<Dataset, LoaderError> {
    if !dir.is_dir() {
        return Err(LoaderError::MissingDirectory(dir.to_path_buf()));
    }

    let samples = read_rows(&dir.join("samples.txt"), 4)?
        .into_iter()
        .map(|row| Sample {
            x: row[0],
            y: row[1],
            z: row[2],
            weight: row[3],
        })
        .collect();

    let mut snapshots: Vec<IterationSnapshot> = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let centroids = read_centroids(&dir.join(format!("centroids_{:03}.txt", step)))?;
        let covariances = read_covariances(&dir.join(format!("covariances_{:03}.txt", step)))?;

        if centroids.len() != covariances.len() {
            return Err(LoaderError::ClusterCountMismatch {
                step,
                centroids: centroids.len(),
                covariances: covariances.len(),
            });
        }

        let snapshot = IterationSnapshot {
            centroids,
            covariances,
        };
        if let Some(first) = snapshots.first() {
            let expected = first.cluster_count();
            if snapshot.cluster_count() != expected {
                return Err(LoaderError::ClusterCountDrift {
                    step,
                    expected,
                    found: snapshot.cluster_count(),
                });
            }
        }
        snapshots.push(snapshot);
    }

    // Reference overlay, only when both files are there.
    let ref_centroids_path = dir.join("ref_centroids.txt");
    let ref_covariances_path = dir.join("ref_covariances.txt");
    let reference = if ref_centroids_path.is_file() && ref_covariances_path.is_file() {
        let centroids = read_centroids(&ref_centroids_path)?;
        let covariances = read_covariances(&ref_covariances_path)?;
        if centroids.len() != covariances.len() {
            return Err(LoaderError::ReferenceCountMismatch {
                centroids: centroids.len(),
                covariances: covariances.len(),
            });
        }
        Some(IterationSnapshot {
            centroids,
            covariances,
        })
    } else {
        None
    };

    Ok(Dataset {
        samples,
        snapshots,
        reference,
    })
}

fn read_centroids(path: &Path) -> Result<Vec<Vector3<f64>>, LoaderError> {
    Ok(read_rows(path, 3)?
        .into_iter()
        .map(|row| Vector3::new(row[0], row[1], row[2]))
        .collect())
}

fn read_covariances(path: &Path) -> Result<Vec<Matrix3<f64>>, LoaderError> {
    Ok(read_rows(path, 9)?
        .into_iter()
        .map(|r| {
            // Row-major 3x3.
            Matrix3::new(r[0], r[1], r[2], r[3], r[4], r[5], r[6], r[7], r[8])
        })
        .collect())
}

fn read_rows(path: &Path, width: usize) -> Result<Vec<Vec<f64>>, LoaderError> {
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(&text, width, path)
}

/// Parse a whitespace-delimited numeric table into rows of `width` floats.
/// The whole file is tokenized and reshaped, so line breaks are cosmetic;
/// a total count not divisible by `width` is a shape error.
pub(crate) fn parse_rows(
    text: &str,
    width: usize,
    path: &Path,
) -> Result<Vec<Vec<f64>>, LoaderError> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| LoaderError::InvalidNumber {
            path: path.to_path_buf(),
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.len() % width != 0 {
        return Err(LoaderError::ShapeMismatch {
            path: path.to_path_buf(),
            count: values.len(),
            width,
        });
    }

    Ok(values.chunks(width).map(|chunk| chunk.to_vec()).collect())
}
