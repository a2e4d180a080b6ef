use num::Float;
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::AddAssign,
};

/// Float primitive the whole crate is generic over.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Primitive: Float + AddAssign + Sum + SampleUniform
                + Default + Display + Debug + Sync + Send + 'static {
    /// Convert a configuration constant into this primitive.
    fn from_f64(value: f64) -> Self;
}
impl Primitive for f32 {
    fn from_f64(value: f64) -> Self { value as f32 }
}
impl Primitive for f64 {
    fn from_f64(value: f64) -> Self { value }
}
