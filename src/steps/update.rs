use crate::{position::Position, primitive::Primitive, session::{Centroid, Point}};
use tracing::trace;

/// Arithmetic mean of the given members, or `None` for an empty member list.
fn mean_position<T: Primitive>(points: &[Point<T>], members: &[usize]) -> Option<Position<T>> {
    if members.is_empty() {
        return None;
    }
    let mut sum = Position::<T>::origin();
    for p in members.iter().map(|&idx| &points[idx].position) {
        sum.x += p.x;
        sum.y += p.y;
        sum.z += p.z;
    }
    let cnt = T::from_f64(members.len() as f64);
    Some(Position::new(sum.x / cnt, sum.y / cnt, sum.z / cnt))
}

/// Move every non-empty centroid onto the mean of its members from the last assignment step.
/// Centroids without members stay where they are.
///
/// ## Returns
/// `true` if any centroid was displaced by more than **threshold**
pub(crate) fn update_centroids<T: Primitive>(points: &[Point<T>], centroids: &mut [Centroid<T>], threshold: T) -> bool {
    let mut any_moved = false;
    for (idx, c) in centroids.iter_mut().enumerate() {
        if let Some(new_position) = mean_position(points, &c.members) {
            let displacement = c.position.distance(&new_position);
            trace!(centroid = idx, %displacement, "centroid updated");
            any_moved |= displacement > threshold;
            c.position = new_position;
        }
    }
    any_moved
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::*;
    use crate::steps::assignment::assign_points;

    #[test] fn pairs_move_to_midpoints_f32() { pairs_move_to_midpoints::<f32>(); }
    #[test] fn pairs_move_to_midpoints_f64() { pairs_move_to_midpoints::<f64>(); }

    fn pairs_move_to_midpoints<T: Primitive>() {
        let threshold = T::from_f64(0.01);
        let mut points = two_pairs::<T>();
        let mut centroids = centroids_at::<T>(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]);
        assign_points(&mut points, &mut centroids).unwrap();

        assert!(update_centroids(&points, &mut centroids, threshold));
        assert_eq!(centroids[0].position, Position::new(T::zero(), T::zero(), T::from_f64(0.5)));
        assert_eq!(centroids[1].position, Position::new(T::from_f64(10.0), T::zero(), T::from_f64(0.5)));

        // Same assignment again -> the means do not change
        assign_points(&mut points, &mut centroids).unwrap();
        assert!(!update_centroids(&points, &mut centroids, threshold));
    }

    #[test]
    fn empty_centroid_never_moves() {
        let mut points = two_pairs::<f64>();
        let mut centroids = centroids_at::<f64>(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [100.0, 100.0, 100.0]]);
        assign_points(&mut points, &mut centroids).unwrap();
        assert!(centroids[2].members().is_empty());

        update_centroids(&points, &mut centroids, 0.01);
        assert_eq!(centroids[2].position, Position::new(100.0, 100.0, 100.0));
    }

    #[test]
    fn displacement_at_threshold_is_not_movement() {
        let points = vec![Point { position: Position::new(0.5, 0.0, 0.0), cluster: Some(0) }];
        let mut centroids = centroids_at::<f64>(&[[0.0, 0.0, 0.0]]);
        centroids[0].members = vec![0];
        assert!(!update_centroids(&points, &mut centroids, 0.5));
        assert_approx_eq!(centroids[0].position.x, 0.5);
    }

    #[test] fn mean_of_members_f32() { mean_of_members::<f32>(); }
    #[test] fn mean_of_members_f64() { mean_of_members::<f64>(); }

    fn mean_of_members<T: Primitive>() {
        let points = two_pairs::<T>();
        let mean = mean_position(&points, &[0, 1]).unwrap();
        assert_eq!(mean, Position::new(T::zero(), T::zero(), T::from_f64(0.5)));
        assert!(mean_position(&points, &[]).is_none());
    }
}
