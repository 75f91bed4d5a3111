/// Triangle connectivity for an ellipsoid surface, as three parallel
/// index arrays (one vertex index per array per triangle).
///
/// Depends only on the grid resolution: every surface built at the same
/// resolution shares one `TriangleIndices`, so animation frames only ever
/// resend vertex positions, never connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleIndices {
    pub i: Vec<u32>,
    pub j: Vec<u32>,
    pub k: Vec<u32>,
}

impl TriangleIndices {
    /// Number of triangles
    pub fn len(&self) -> usize {
        self.i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }
}

/// Triangulate a `resolution x resolution` vertex grid.
///
/// Each grid cell is split into two triangles, giving
/// `2 * (resolution - 1)^2` triangles total. Pure function of
/// `resolution`; compute once and reuse for every mesh.
pub fn triangle_indices(resolution: usize) -> TriangleIndices {
    assert!(resolution >= 2, "resolution must be at least 2");

    let count = (resolution - 1) * (resolution - 1) * 2;
    let mut i = Vec::with_capacity(count);
    let mut j = Vec::with_capacity(count);
    let mut k = Vec::with_capacity(count);

    for row in 0..resolution - 1 {
        let mut k1 = (row * resolution) as u32;
        let mut k2 = ((row + 1) * resolution) as u32;
        for _ in 0..resolution - 1 {
            i.push(k1);
            j.push(k2);
            k.push(k2 + 1);

            i.push(k2 + 1);
            j.push(k1 + 1);
            k.push(k1);

            k1 += 1;
            k2 += 1;
        }
    }

    TriangleIndices { i, j, k }
}
