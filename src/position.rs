use crate::primitive::Primitive;
use serde::{Deserialize, Serialize};

/// A coordinate in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position<T: Primitive = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}
impl<T: Primitive> Position<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Squared euclidean distance. Cheaper than [`Position::distance`] and
    /// sufficient wherever only the ordering of distances matters.
    #[inline(always)]
    pub fn squared_distance(&self, other: &Self) -> T {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }

    #[inline(always)]
    pub fn distance(&self, other: &Self) -> T {
        self.squared_distance(other).sqrt()
    }

    /// `true` if every axis lies within `[-extent, extent]`.
    pub fn within_cube(&self, extent: T) -> bool {
        [self.x, self.y, self.z].iter().all(|v| v.abs() <= extent)
    }
}
impl<T: Primitive> From<[T; 3]> for Position<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn distances_f32() { distances::<f32>(); }
    #[test] fn distances_f64() { distances::<f64>(); }

    fn distances<T: Primitive>() {
        let a = Position::<T>::origin();
        let b = Position::from([T::from_f64(1.0), T::from_f64(2.0), T::from_f64(2.0)]);
        assert_eq!(a.squared_distance(&b), T::from_f64(9.0));
        assert_eq!(a.distance(&b), T::from_f64(3.0));
        assert_eq!(b.distance(&a), a.distance(&b));
        assert_eq!(b.distance(&b), T::zero());
    }

    #[test]
    fn cube_membership() {
        let extent = 2.0;
        assert!(Position::new(2.0, -2.0, 0.0).within_cube(extent));
        assert!(!Position::new(0.0, 0.0, 2.0001).within_cube(extent));
        assert!(!Position::new(-2.5, 0.0, 0.0).within_cube(extent));
    }
}
