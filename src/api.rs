use crate::{
    error::{ClusteringError, Result},
    generator, helpers,
    inits::InitMethod,
    position::Position,
    primitive::Primitive,
    session::{AlgorithmState, ClusteringSession, Point, Snapshot},
    steps::{assignment, update},
};
use rand::RngCore;
use std::{fmt, ops::RangeInclusive};
use tracing::{debug, info, warn};

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusteringSession<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusteringSession<T>, usize, bool);

/// This is a structure holding the configuration of a clustering session: how many points to generate
/// and where, how many clusters to look for, when a run counts as converged, the random number generator
/// to use, and a couple of callbacks that can be set to get status information from a running session.
///
/// For a more detailed information about all possible options, have a look at [`ClusteringConfigBuilder`].
pub struct ClusteringConfig<'a, T: Primitive = f64> {
    /// Amount of points the next [`Controller::generate_data`] produces (always inside **point_count_range**)
    pub(crate) point_count: usize,
    pub(crate) point_count_range: RangeInclusive<usize>,
    /// Points (and randomly placed centroids) are drawn from `[-extent, extent]` on every axis
    pub(crate) extent: T,
    /// Cluster count the next run will capture
    pub(crate) k: usize,
    /// A centroid displaced by no more than this counts as unmoved
    pub(crate) convergence_threshold: T,
    pub(crate) init_method: InitMethod<T>,
    /// Callback that is called, when a run was started
    /// ## Arguments
    /// - **session**: Current [`ClusteringSession`] after initialization and the first assignment
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each step
    /// ## Arguments
    /// - **session**: Current [`ClusteringSession`] after the step
    /// - **iteration**: Number of the step that just finished
    /// - **moved**: Whether any centroid moved beyond the convergence threshold
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<dyn RngCore>,
}
impl<'a, T: Primitive> Default for ClusteringConfig<'a, T> {
    fn default() -> Self {
        Self {
            point_count: 300,
            point_count_range: 10..=1000,
            extent: T::from_f64(2.0),
            k: 3,
            convergence_threshold: T::from_f64(0.01),
            init_method: InitMethod::default(),
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(rand::thread_rng()),
        }
    }
}
impl<'a, T: Primitive> ClusteringConfig<'a, T> {
    /// Use the [`ClusteringConfigBuilder`] to build a [`ClusteringConfig`] instance.
    pub fn build() -> ClusteringConfigBuilder<'a, T> {
        ClusteringConfigBuilder { config: ClusteringConfig::default() }
    }

    pub fn point_count(&self) -> usize { self.point_count }
    pub fn point_count_range(&self) -> &RangeInclusive<usize> { &self.point_count_range }
    pub fn extent(&self) -> T { self.extent }
    pub fn cluster_count(&self) -> usize { self.k }
    pub fn convergence_threshold(&self) -> T { self.convergence_threshold }
    pub fn init_method(&self) -> &InitMethod<T> { &self.init_method }
}
impl<'a, T: Primitive> fmt::Debug for ClusteringConfig<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusteringConfig")
            .field("point_count", &self.point_count)
            .field("point_count_range", &self.point_count_range)
            .field("extent", &self.extent)
            .field("k", &self.k)
            .field("convergence_threshold", &self.convergence_threshold)
            .field("init_method", &self.init_method)
            .finish_non_exhaustive()
    }
}

fn validate_cluster_count(k: usize) -> Result<()> {
    if k == 0 {
        return Err(ClusteringError::InvalidParameter {
            param: "cluster_count", value: k.to_string(), constraint: "must be at least 1",
        });
    }
    Ok(())
}

fn validate_extent<T: Primitive>(extent: T) -> Result<()> {
    // the sampled interval is 2 * extent wide and must stay finite
    if !(extent > T::zero() && (extent + extent).is_finite()) {
        return Err(ClusteringError::InvalidParameter {
            param: "extent", value: extent.to_string(), constraint: "must be greater than 0 and twice it finite",
        });
    }
    Ok(())
}

pub struct ClusteringConfigBuilder<'a, T: Primitive = f64> {
    config: ClusteringConfig<'a, T>
}
impl<'a, T: Primitive> ClusteringConfigBuilder<'a, T> {
    /// Set the amount of points to generate. Clamped into the point count range on [`build`](Self::build).
    /// ## Default
    /// `300`
    pub fn point_count(mut self, point_count: usize) -> Self {
        self.config.point_count = point_count; self
    }
    /// Set the range point counts are clamped into.
    /// ## Default
    /// `10..=1000`
    pub fn point_count_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.config.point_count_range = range; self
    }
    /// Set the half side length of the cube points are generated in.
    /// ## Default
    /// `2.0` (every axis in `[-2, 2]`)
    pub fn extent(mut self, extent: T) -> Self {
        self.config.extent = extent; self
    }
    /// Set the amount of clusters (k) the next run should look for.
    /// ## Default
    /// `3`
    pub fn cluster_count(mut self, k: usize) -> Self {
        self.config.k = k; self
    }
    /// Set the displacement a centroid must exceed during an update step to count as moved.
    /// ## Default
    /// `0.01`
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.config.convergence_threshold = threshold; self
    }
    /// Set the centroid initialization policy. For more information, see documentation of [`InitMethod`].
    /// ## Default
    /// [`InitMethod::RandomSample`]
    pub fn init_method(mut self, init_method: InitMethod<T>) -> Self {
        self.config.init_method = init_method; self
    }
    /// Set the callback that should be called after a run was started.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each step of a running session.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator used for point generation and centroid initialization.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(rnd); self
    }
    /// Validate and return the configuration.
    ///
    /// ## Errors
    /// [`ClusteringError::InvalidParameter`] for a cluster count of 0, a non-positive or overflowing extent, a negative
    /// convergence threshold or an empty point count range.
    pub fn build(mut self) -> Result<ClusteringConfig<'a, T>> {
        let range = &self.config.point_count_range;
        if range.start() > range.end() {
            return Err(ClusteringError::InvalidParameter {
                param: "point_count_range", value: format!("{:?}", range), constraint: "start must not exceed end",
            });
        }
        validate_cluster_count(self.config.k)?;
        validate_extent(self.config.extent)?;
        let threshold = self.config.convergence_threshold;
        if !(threshold.is_finite() && threshold >= T::zero()) {
            return Err(ClusteringError::InvalidParameter {
                param: "convergence_threshold", value: threshold.to_string(), constraint: "must be finite and not negative",
            });
        }
        self.config.point_count = helpers::clamp_count(self.config.point_count, &self.config.point_count_range);
        Ok(self.config)
    }
}


/// Transitions that can be refused, depending on the session state. GenerateData and ResetClustering
/// are accepted in every state and have no entry here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    StartClustering,
    Step,
}
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result of a successful [`Controller::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// At least one centroid moved beyond the threshold, the run continues.
    Moved { iteration: usize },
    /// No centroid moved beyond the threshold. The run is finished after **iterations** steps.
    Converged { iterations: usize },
}
impl StepOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, StepOutcome::Converged { .. })
    }
}


/// Entrypoint of this crate's API-Surface.
///
/// The controller exclusively owns one [`ClusteringSession`] and exposes the transitions of the
/// clustering state machine:
///
/// | Transition | From | To |
/// |---|---|---|
/// | [`generate_data`](Self::generate_data) / [`load_points`](Self::load_points) | any | `Initial` |
/// | [`start_clustering`](Self::start_clustering) | `Initial`, `Converged` | `Running` |
/// | [`step`](Self::step) | `Initial` (starts implicitly), `Running` | `Running`, `Converged` |
/// | [`reset_clustering`](Self::reset_clustering) | any | `Initial` |
///
/// Every transition either completes or returns an error without touching the session.
/// Presentation adapters read the session through [`session`](Self::session) or
/// [`snapshot`](Self::snapshot) after each transition.
///
/// ## Example
/// ```rust
/// use kmeans_stepper::*;
///
/// let conf = ClusteringConfig::<f64>::build()
///     .point_count(200)
///     .cluster_count(4)
///     .build()
///     .unwrap();
/// let mut controller = Controller::new(conf);
/// controller.generate_data();
/// controller.start_clustering().unwrap();
/// while !controller.step().unwrap().is_converged() {}
/// assert_eq!(controller.session().state(), AlgorithmState::Converged);
/// ```
pub struct Controller<'a, T: Primitive = f64> {
    config: ClusteringConfig<'a, T>,
    session: ClusteringSession<T>,
}
impl<'a, T: Primitive> Controller<'a, T> {
    /// Create a controller with an empty point set in state `Initial`.
    /// Call [`generate_data`](Self::generate_data) to fill it.
    pub fn new(config: ClusteringConfig<'a, T>) -> Self {
        Self { config, session: ClusteringSession::default() }
    }

    pub fn config(&self) -> &ClusteringConfig<'a, T> { &self.config }

    /// Borrow the current session read-only.
    pub fn session(&self) -> &ClusteringSession<T> { &self.session }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Snapshot<T> { self.session.clone() }

    /// Change the cluster count for the next run. An active run keeps the k it was started with.
    pub fn set_cluster_count(&mut self, k: usize) -> Result<()> {
        validate_cluster_count(k)?;
        if self.session.state == AlgorithmState::Running {
            debug!(k, active_k = ?self.session.k, "cluster count changed, takes effect on next start");
        }
        self.config.k = k;
        Ok(())
    }

    /// Change the amount of points the next [`generate_data`](Self::generate_data) produces.
    ///
    /// ## Returns
    /// The count actually stored, after clamping into the configured range.
    pub fn set_point_count(&mut self, count: usize) -> usize {
        self.config.point_count = helpers::clamp_count(count, &self.config.point_count_range);
        if self.config.point_count != count {
            debug!(requested = count, clamped = self.config.point_count, "point count clamped");
        }
        self.config.point_count
    }

    /// Change the cube points are generated in, for the next [`generate_data`](Self::generate_data).
    pub fn set_extent(&mut self, extent: T) -> Result<()> {
        validate_extent(extent)?;
        self.config.extent = extent;
        Ok(())
    }

    /// GenerateData: replace the point set with freshly drawn points and drop any run.
    pub fn generate_data(&mut self) {
        let points = generator::generate_points(self.config.point_count, self.config.extent, &mut *self.config.rnd);
        info!(count = points.len(), extent = %self.config.extent, from = %self.session.state, "generated data");
        self.session = ClusteringSession::with_points(points);
    }

    /// GenerateData with caller supplied coordinates instead of random ones.
    pub fn load_points(&mut self, positions: Vec<Position<T>>) {
        info!(count = positions.len(), from = %self.session.state, "loaded data");
        self.session = ClusteringSession::with_points(positions.into_iter().map(Point::unassigned).collect());
    }

    /// StartClustering: capture k, seed the centroids and run the first assignment step.
    ///
    /// ## Errors
    /// - [`ClusteringError::InvalidTransition`] while a run is `Running`
    /// - [`ClusteringError::Precondition`] for an empty point set or a precomputed seed list of the wrong length
    pub fn start_clustering(&mut self) -> Result<()> {
        if self.session.state == AlgorithmState::Running {
            return Err(self.reject(Transition::StartClustering));
        }
        if self.session.points.is_empty() {
            warn!("cannot start clustering without points");
            return Err(ClusteringError::Precondition {
                operation: "StartClustering",
                reason: "point set is empty".to_string(),
            });
        }

        // k is read exactly once per run
        let k = self.config.k;
        let mut centroids = self.config.init_method.seed(&self.session.points, k, self.config.extent, &mut *self.config.rnd)?;
        let mut points = self.session.points.clone();
        assignment::assign_points(&mut points, &mut centroids)?;

        let session = &mut self.session;
        session.points = points;
        session.centroids = centroids;
        session.iteration = 0;
        session.state = AlgorithmState::Running;
        session.k = Some(k);
        info!(k, points = session.points.len(), "clustering started");

        (self.config.init_done)(&self.session);
        Ok(())
    }

    /// Step: one update step followed by one assignment step.
    ///
    /// From `Initial`, the run is started first. When the update step moved no centroid beyond the
    /// convergence threshold, the session becomes `Converged` and the run is finished.
    ///
    /// ## Errors
    /// - [`ClusteringError::InvalidTransition`] on a `Converged` session
    /// - Any error of [`start_clustering`](Self::start_clustering) when starting implicitly
    pub fn step(&mut self) -> Result<StepOutcome> {
        let state = self.session.state;
        match state {
            AlgorithmState::Converged => return Err(self.reject(Transition::Step)),
            AlgorithmState::Initial => {
                debug!("step requested in Initial, starting implicitly");
                self.start_clustering()?;
            }
            AlgorithmState::Running => {}
        }

        let mut points = self.session.points.clone();
        let mut centroids = self.session.centroids.clone();
        let moved = update::update_centroids(&points, &mut centroids, self.config.convergence_threshold);
        assignment::assign_points(&mut points, &mut centroids)?;

        let session = &mut self.session;
        session.points = points;
        session.centroids = centroids;
        session.iteration += 1;
        let iteration = session.iteration;
        let outcome = if moved {
            debug!(iteration, distsum = %session.distsum(), "step done");
            StepOutcome::Moved { iteration }
        } else {
            session.state = AlgorithmState::Converged;
            info!(iterations = iteration, distsum = %session.distsum(), "clustering converged");
            StepOutcome::Converged { iterations: iteration }
        };

        (self.config.iteration_done)(&self.session, iteration, moved);
        Ok(outcome)
    }

    /// Keep stepping until the run converges, or **max_iter** steps were taken by this call.
    ///
    /// ## Returns
    /// The outcome of the last step taken
    pub fn run_to_convergence(&mut self, max_iter: usize) -> Result<StepOutcome> {
        if max_iter == 0 {
            return Err(ClusteringError::InvalidParameter {
                param: "max_iter", value: max_iter.to_string(), constraint: "must be at least 1",
            });
        }
        let mut outcome = self.step()?;
        for _ in 1..max_iter {
            if outcome.is_converged() {
                break;
            }
            outcome = self.step()?;
        }
        Ok(outcome)
    }

    /// ResetClustering: keep the points, drop centroids, labels and iteration count.
    pub fn reset_clustering(&mut self) {
        info!(from = %self.session.state, "clustering reset");
        self.session.clear_run();
    }

    fn reject(&self, transition: Transition) -> ClusteringError {
        warn!(%transition, state = %self.session.state, "transition rejected");
        ClusteringError::InvalidTransition { transition, state: self.session.state }
    }
}
