use crate::{error::{ClusteringError, Result}, primitive::Primitive, session::{Centroid, Point}};
use rayon::prelude::*;
use tracing::trace;

/// Index of the nearest centroid. Ties go to the lowest index, because only a strictly
/// smaller distance replaces the current best.
#[inline(always)]
fn nearest_centroid<T: Primitive>(point: &Point<T>, centroids: &[Centroid<T>]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = T::infinity();
    for (idx, c) in centroids.iter().enumerate() {
        let dist = point.position.squared_distance(&c.position);
        if dist < best_dist {
            best_idx = idx;
            best_dist = dist;
        }
    }
    best_idx
}

/// Label every point with its nearest centroid and rebuild each centroid's member list.
///
/// ## Errors
/// [`ClusteringError::Precondition`] if **centroids** is empty. Nothing is touched in that case.
pub(crate) fn assign_points<T: Primitive>(points: &mut [Point<T>], centroids: &mut [Centroid<T>]) -> Result<()> {
    if centroids.is_empty() {
        return Err(ClusteringError::Precondition {
            operation: "assignment",
            reason: "there are no centroids to assign to".to_string(),
        });
    }

    {
        let centroids = &*centroids;
        // manually calculate work-packet size, rayon would otherwise split the (small) point set very finely
        let work_packet_size = (points.len() / rayon::current_num_threads()).max(1);
        points.par_iter_mut()
            .with_min_len(work_packet_size)
            .for_each(|p| p.cluster = Some(nearest_centroid(p, centroids)));
    }

    centroids.iter_mut().for_each(|c| c.members.clear());
    for (idx, p) in points.iter().enumerate() {
        if let Some(c) = p.cluster {
            centroids[c].members.push(idx);
        }
    }
    trace!(points = points.len(), centroids = centroids.len(), "assignment step done");
    Ok(())
}
