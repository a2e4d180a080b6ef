use crate::{position::Position, primitive::Primitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A data point together with its current cluster label.
///
/// ## Fields
/// - **position**: Coordinate of the point
/// - **cluster**: Index of the centroid this point is assigned to, or `None` while unassigned
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point<T: Primitive = f64> {
    pub position: Position<T>,
    pub cluster: Option<usize>,
}
impl<T: Primitive> Point<T> {
    pub fn unassigned(position: Position<T>) -> Self {
        Self { position, cluster: None }
    }
}

/// A cluster center, plus the indices of the points assigned to it by the most recent
/// assignment step. The member list is rebuilt on every assignment and is not carried
/// across steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid<T: Primitive = f64> {
    pub position: Position<T>,
    pub(crate) members: Vec<usize>,
}
impl<T: Primitive> Centroid<T> {
    pub fn new(position: Position<T>) -> Self {
        Self { position, members: Vec::new() }
    }

    /// Indices (into the session's point list) of the points currently assigned to this centroid.
    pub fn members(&self) -> &[usize] {
        &self.members
    }
}

/// Lifecycle of a clustering run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmState {
    /// No centroids yet, or data was freshly generated / reset.
    Initial,
    /// Centroids exist and at least one assignment step has run.
    Running,
    /// The last update step moved no centroid beyond the convergence threshold.
    Converged,
}
impl fmt::Display for AlgorithmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmState::Initial => "Initial",
            AlgorithmState::Running => "Running",
            AlgorithmState::Converged => "Converged",
        };
        f.write_str(name)
    }
}


/// Complete mutable state of one clustering session. Only the [`Controller`](crate::Controller)
/// mutates it; everybody else gets a shared borrow or an owned [`Snapshot`].
///
/// ## Invariants
/// - In `Running` or `Converged`, every point carries a cluster index into **centroids**
/// - In `Running` or `Converged`, `centroids.len() == k`
/// - In `Initial`, there are no centroids and no point carries a label
///
/// ## Fields
/// - **points**: The data set, in generation order
/// - **centroids**: Current cluster centers
/// - **iteration**: Number of steps executed in the current run
/// - **state**: Current [`AlgorithmState`]
/// - **k**: Cluster count captured when the current run started (`None` in `Initial`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusteringSession<T: Primitive = f64> {
    pub(crate) points: Vec<Point<T>>,
    pub(crate) centroids: Vec<Centroid<T>>,
    pub(crate) iteration: usize,
    pub(crate) state: AlgorithmState,
    pub(crate) k: Option<usize>,
}

/// Owned, immutable copy of a session handed to presentation adapters.
pub type Snapshot<T = f64> = ClusteringSession<T>;

impl<T: Primitive> Default for ClusteringSession<T> {
    fn default() -> Self {
        Self::with_points(Vec::new())
    }
}
impl<T: Primitive> ClusteringSession<T> {
    pub(crate) fn with_points(points: Vec<Point<T>>) -> Self {
        Self {
            points,
            centroids: Vec::new(),
            iteration: 0,
            state: AlgorithmState::Initial,
            k: None,
        }
    }

    /// Drop the current run but keep the point set.
    pub(crate) fn clear_run(&mut self) {
        self.points.iter_mut().for_each(|p| p.cluster = None);
        self.centroids.clear();
        self.iteration = 0;
        self.state = AlgorithmState::Initial;
        self.k = None;
    }

    pub fn points(&self) -> &[Point<T>] { &self.points }
    pub fn centroids(&self) -> &[Centroid<T>] { &self.centroids }
    pub fn iteration(&self) -> usize { self.iteration }
    pub fn state(&self) -> AlgorithmState { self.state }
    pub fn k(&self) -> Option<usize> { self.k }

    /// The total sum of squared distances from all assigned points to their centroids.
    /// Unassigned points do not contribute.
    pub fn distsum(&self) -> T {
        self.points.iter()
            .filter_map(|p| p.cluster.and_then(|c| self.centroids.get(c)).map(|c| (p, c)))
            .map(|(p, c)| p.position.squared_distance(&c.position))
            .sum()
    }
}
