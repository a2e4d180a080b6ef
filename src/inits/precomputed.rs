use crate::{error::{ClusteringError, Result}, position::Position, primitive::Primitive, session::Centroid};

#[inline(always)]
pub(crate) fn calculate<T: Primitive>(positions: &[Position<T>], k: usize) -> Result<Vec<Centroid<T>>> {
    if positions.len() != k {
        return Err(ClusteringError::Precondition {
            operation: "StartClustering",
            reason: format!("{} precomputed centroids given, but k is {}", positions.len(), k),
        });
    }
    Ok(positions.iter().cloned().map(Centroid::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_given_positions_in_order() {
        let seeds = vec![Position::new(0.0, 0.0, 0.0), Position::new(10.0, 0.0, 0.0)];
        let centroids = calculate(&seeds, 2).unwrap();
        assert_eq!(centroids[0].position, seeds[0]);
        assert_eq!(centroids[1].position, seeds[1]);
    }

    #[test]
    fn rejects_count_mismatch() {
        let seeds = vec![Position::new(0.0f32, 0.0, 0.0)];
        assert!(matches!(calculate(&seeds, 3), Err(ClusteringError::Precondition { .. })));
    }
}
