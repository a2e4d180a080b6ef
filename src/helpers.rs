use std::ops::RangeInclusive;

/// Clamp a requested point count into the configured range.
pub(crate) fn clamp_count(count: usize, range: &RangeInclusive<usize>) -> usize {
    count.max(*range.start()).min(*range.end())
}

#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use crate::{ClusteringConfig, Controller, InitMethod, Point, Position, Primitive};
	use crate::session::Centroid;
	use rand::prelude::*;

	fn at<T: Primitive>([x, y, z]: [f64; 3]) -> Position<T> {
		Position::new(T::from_f64(x), T::from_f64(y), T::from_f64(z))
	}

	/// Two well separated pairs: (0,0,0), (0,0,1) and (10,0,0), (10,0,1).
	pub fn two_pairs<T: Primitive>() -> Vec<Point<T>> {
		[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [10.0, 0.0, 0.0], [10.0, 0.0, 1.0]].iter()
			.map(|&c| Point::unassigned(at(c)))
			.collect()
	}

	pub fn centroids_at<T: Primitive>(coords: &[[f64; 3]]) -> Vec<Centroid<T>> {
		coords.iter().map(|&c| Centroid::new(at(c))).collect()
	}

	pub fn seeded_points<T: Primitive>(count: usize, extent: f64, seed: u64) -> Vec<Point<T>> {
		let mut rnd = StdRng::seed_from_u64(seed);
		crate::generator::generate_points(count, T::from_f64(extent), &mut rnd)
	}

	/// Controller loaded with [`two_pairs`] and seeded at (0,0,0) and (10,0,0).
	pub fn two_pairs_controller<'a, T: Primitive>() -> Controller<'a, T> {
		let conf = ClusteringConfig::build()
			.cluster_count(2)
			.init_method(InitMethod::Precomputed(vec![at([0.0, 0.0, 0.0]), at([10.0, 0.0, 0.0])]))
			.random_generator(StdRng::seed_from_u64(1))
			.build()
			.unwrap();
		let mut controller = Controller::new(conf);
		controller.load_points(two_pairs::<T>().into_iter().map(|p| p.position).collect());
		controller
	}

	/// Controller over `count` random points with a seeded generator.
	pub fn seeded_controller<'a, T: Primitive>(count: usize, k: usize, seed: u64) -> Controller<'a, T> {
		let conf = ClusteringConfig::build()
			.point_count(count)
			.cluster_count(k)
			.random_generator(StdRng::seed_from_u64(seed))
			.build()
			.unwrap();
		let mut controller = Controller::new(conf);
		controller.generate_data();
		controller
	}
}
