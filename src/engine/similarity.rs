use super::tfidf::SparseVector;

/// Dense symmetric matrix of pairwise similarities in `[0, 1]`.
///
/// Storage is O(n²) and construction is O(n²·v); the catalog is assumed
/// small enough for both to fit, which is a stated boundary of the
/// design rather than something this type works around.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Cosine similarity of every pair of unit-length rows.
    ///
    /// Only the upper triangle is computed; the lower half mirrors it, so
    /// symmetry holds exactly. The diagonal is set outright: 1 for a
    /// non-zero row (exact self-similarity), 0 for a zero row.
    pub fn from_unit_vectors(rows: &[SparseVector]) -> Self {
        let mut matrix = Self::zeros(rows.len());
        for i in 0..rows.len() {
            let self_similarity = if rows[i].is_zero() { 0.0 } else { 1.0 };
            matrix.set(i, i, self_similarity);
            for j in (i + 1)..rows.len() {
                // unit rows can dot to fractionally above 1 in floating point
                let score = rows[i].dot(&rows[j]).min(1.0);
                matrix.set(i, j, score);
                matrix.set(j, i, score);
            }
        }
        matrix
    }

    /// Weighted sum of this matrix with another of the same size.
    pub fn blend(&self, other: &SimilarityMatrix, self_weight: f64, other_weight: f64) -> Self {
        debug_assert_eq!(self.size, other.size);
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| self_weight * a + other_weight * b)
            .collect();
        Self {
            size: self.size,
            values,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.size + column]
    }

    fn set(&mut self, row: usize, column: usize, value: f64) {
        self.values[row * self.size + column] = value;
    }

    /// All similarities of one item against the whole corpus.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}
