//! Error types for clustering transitions.
//!
//! Every error is recoverable: a transition that fails leaves the session
//! exactly as it was before the call.

use crate::api::Transition;
use crate::session::AlgorithmState;
use thiserror::Error;

/// Errors reported by the [`Controller`](crate::Controller) and its building blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusteringError {
    /// Operation invoked on empty or otherwise invalid input.
    ///
    /// Raised when starting a run without points, assigning against zero
    /// centroids, or seeding with a precomputed centroid list whose length
    /// differs from the captured cluster count.
    #[error("precondition failed for {operation}: {reason}")]
    Precondition {
        /// Operation that was refused
        operation: &'static str,
        /// What was missing
        reason: String,
    },

    /// The state machine does not permit this transition from its current state.
    #[error("{transition} is not permitted while the session is {state}")]
    InvalidTransition {
        /// Requested transition
        transition: Transition,
        /// State the session was in
        state: AlgorithmState,
    },

    /// A configuration value lies outside its documented range.
    #[error("invalid value for {param}: {value} ({constraint})")]
    InvalidParameter {
        /// Parameter name
        param: &'static str,
        /// Rejected value, rendered
        value: String,
        /// Constraint description
        constraint: &'static str,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClusteringError>;
