use crate::SemanticError;

/// Element-wise arithmetic mean of a batch of embedding vectors.
///
/// A batch of one is returned as-is, without a division pass. Every vector must
/// share the length of the first one. Sums are accumulated in `f64` so the result
/// does not drift with batch order.
pub fn average_embeddings(mut vectors: Vec<Vec<f32>>) -> Result<Vec<f32>, SemanticError> {
    match vectors.len() {
        0 => Err(SemanticError::InvalidInput(
            "cannot average an empty batch of embeddings".into(),
        )),
        1 => Ok(vectors.pop().unwrap_or_default()),
        count => {
            let dim = vectors[0].len();
            check_dimensions(&vectors, dim)?;

            let mut sums = vec![0f64; dim];
            for vector in &vectors {
                for (sum, value) in sums.iter_mut().zip(vector) {
                    *sum += f64::from(*value);
                }
            }

            let count = count as f64;
            Ok(sums.into_iter().map(|sum| (sum / count) as f32).collect())
        }
    }
}

/// Fails with [`SemanticError::DimensionMismatch`] on the first vector whose length is not `expected`.
pub fn check_dimensions(vectors: &[Vec<f32>], expected: usize) -> Result<(), SemanticError> {
    match vectors.iter().position(|v| v.len() != expected) {
        Some(index) => Err(SemanticError::DimensionMismatch {
            expected,
            found: vectors[index].len(),
            index,
        }),
        None => Ok(()),
    }
}

/// Scales `vector` to unit length. Zero vectors are left untouched.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        vector.iter_mut().for_each(|x| *x /= norm);
    }
}
