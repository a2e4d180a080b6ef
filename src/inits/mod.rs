//! Centroid initialization policies.

pub(crate) mod precomputed;
pub(crate) mod randomplacement;
pub(crate) mod randomsample;

use crate::{error::Result, position::Position, primitive::Primitive, session::{Centroid, Point}};
use rand::RngCore;

/// Policy used to seed the `k` centroids when a run starts.
#[derive(Clone, Debug, PartialEq)]
pub enum InitMethod<T: Primitive = f64> {
    /// Random-Sample (with replacement)
    ///
    /// ## Description
    /// Each of the k centroids copies the coordinate of a uniformly drawn point. Points are drawn
    /// with replacement, so two centroids may start on the same spot.
    RandomSample,
    /// Random-Placement
    ///
    /// ## Description
    /// Each centroid is placed independently and uniformly inside the same cube the points
    /// were generated in. Centroids can therefore start far away from any point.
    RandomPlacement,
    /// Precomputed
    ///
    /// ## Description
    /// Use the given coordinates as they are. The list must contain exactly k entries.
    Precomputed(Vec<Position<T>>),
}
impl<T: Primitive> Default for InitMethod<T> {
    fn default() -> Self { InitMethod::RandomSample }
}
impl<T: Primitive> InitMethod<T> {
    /// Produce `k` centroids with empty member lists.
    pub(crate) fn seed(&self, points: &[Point<T>], k: usize, extent: T, rnd: &mut dyn RngCore) -> Result<Vec<Centroid<T>>> {
        match self {
            InitMethod::RandomSample => Ok(randomsample::calculate(points, k, rnd)),
            InitMethod::RandomPlacement => Ok(randomplacement::calculate(k, extent, rnd)),
            InitMethod::Precomputed(positions) => precomputed::calculate(positions, k),
        }
    }
}
