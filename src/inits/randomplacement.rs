use crate::{generator::random_position, primitive::Primitive, session::Centroid};
use rand::Rng;

#[inline(always)] pub(crate) fn calculate<T: Primitive, R: Rng + ?Sized>(k: usize, extent: T, rnd: &mut R) -> Vec<Centroid<T>> {
	(0..k)
		.map(|_| Centroid::new(random_position(extent, rnd)))
		.collect()
}
