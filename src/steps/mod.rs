//! The two halves of a Lloyd iteration.

pub(crate) mod assignment;
pub(crate) mod update;
