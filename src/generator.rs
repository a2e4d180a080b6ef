use crate::{position::Position, primitive::Primitive, session::Point};
use rand::Rng;
use tracing::trace;

/// Draw one coordinate with every axis independently uniform in `[-extent, extent]`.
pub(crate) fn random_position<T: Primitive, R: Rng + ?Sized>(extent: T, rnd: &mut R) -> Position<T> {
    Position::new(
        rnd.gen_range(-extent..=extent),
        rnd.gen_range(-extent..=extent),
        rnd.gen_range(-extent..=extent),
    )
}

/// Produce a fresh, unlabeled point set.
///
/// ## Arguments
/// - **count**: Amount of points (already clamped by the caller's configuration)
/// - **extent**: Half side length of the symmetric cube the points are drawn from
/// - **rnd**: Random number generator to draw from
pub(crate) fn generate_points<T: Primitive, R: Rng + ?Sized>(count: usize, extent: T, rnd: &mut R) -> Vec<Point<T>> {
    trace!(count, %extent, "drawing uniform points");
    (0..count)
        .map(|_| Point::unassigned(random_position(extent, rnd)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test] fn points_stay_in_cube_f32() { points_stay_in_cube::<f32>(); }
    #[test] fn points_stay_in_cube_f64() { points_stay_in_cube::<f64>(); }

    fn points_stay_in_cube<T: Primitive>() {
        let mut rnd = StdRng::seed_from_u64(1337);
        let extent = T::from_f64(4.0);
        let points = generate_points(500, extent, &mut rnd);

        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| p.position.within_cube(extent)));
        assert!(points.iter().all(|p| p.cluster.is_none()));
    }

    #[test]
    fn axes_are_drawn_independently() {
        let mut rnd = StdRng::seed_from_u64(7);
        let points = generate_points(200, 2.0f64, &mut rnd);
        // Identical axes on every point would mean one draw was reused for all three.
        assert!(points.iter().any(|p| p.position.x != p.position.y));
        assert!(points.iter().any(|p| p.position.y != p.position.z));
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let mut rnd = StdRng::seed_from_u64(1);
        assert!(generate_points(0, 1.0f32, &mut rnd).is_empty());
    }
}
