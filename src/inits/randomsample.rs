use crate::{primitive::Primitive, session::{Centroid, Point}};
use rand::Rng;

/// Copies the coordinates of `k` points drawn with replacement. Callers guarantee a non-empty point set.
#[inline(always)] pub(crate) fn calculate<T: Primitive, R: Rng + ?Sized>(points: &[Point<T>], k: usize, rnd: &mut R) -> Vec<Centroid<T>> {
	(0..k)
		.map(|_| points[rnd.gen_range(0..points.len())].position)
		.map(Centroid::new)
		.collect()
}
