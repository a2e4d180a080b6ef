//! # kmeans_stepper - API documentation
//!
//! kmeans_stepper is a small rust library driving k-means clustering one user-visible step at a time,
//! for interactive 3D visualizations of the algorithm.
//!
//! ## Design target
//! Instead of computing a final clustering as fast as possible, the crate exposes the algorithm as a
//! state machine. A host (a GUI, a web frontend, a terminal demo) issues transitions on a [`Controller`]
//! and repaints from the session after each one. Point counts are in the hundreds, so every transition
//! simply runs to completion before returning.
//!
//! ## States and transitions
//! - **Initial**: points exist (or not), no centroids. Reached by [`Controller::generate_data`],
//!   [`Controller::load_points`] and [`Controller::reset_clustering`].
//! - **Running**: reached by [`Controller::start_clustering`], which captures k, seeds the centroids
//!   and runs one assignment step. Each [`Controller::step`] then runs an update step followed by an
//!   assignment step.
//! - **Converged**: the last update step moved no centroid by more than the convergence threshold.
//!   Stepping again is an error, start a new run instead.
//!
//! ## Supported centroid initializations
//! See [`InitMethod`]: sampling from the points, random placement inside the data cube, or
//! precomputed coordinates.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_stepper::*;
//!
//! fn main() -> kmeans_stepper::error::Result<()> {
//!     let conf = ClusteringConfig::<f64>::build()
//!         .point_count(300)
//!         .cluster_count(3)
//!         .build()?;
//!     let mut controller = Controller::new(conf);
//!
//!     controller.generate_data();
//!     controller.start_clustering()?;
//!     loop {
//!         let outcome = controller.step()?;
//!         let scene = Scene::from_session(controller.session());
//!         println!("{:?}: {} segments, error {:.3}", outcome, scene.segments.len(), controller.session().distsum());
//!         if outcome.is_converged() {
//!             break;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans_stepper::*;
//!
//! fn main() {
//!     let conf = ClusteringConfig::<f64>::build()
//!         .init_done(&|s| println!("Started with k = {:?}", s.k()))
//!         .iteration_done(&|s, nr, moved|
//!             println!("Iteration {} - Error: {:.2} | moved: {}", nr, s.distsum(), moved))
//!         .build()
//!         .unwrap();
//!
//!     let mut controller = Controller::new(conf);
//!     controller.generate_data();
//!     let outcome = controller.run_to_convergence(1000).unwrap();
//!     println!("{:?}", outcome);
//! }
//! ```

#[macro_use] mod helpers;
mod primitive;
mod position;
mod session;
pub mod error;
mod generator;
mod inits;
mod steps;
mod api;
mod scene;

pub use api::{ClusteringConfig, ClusteringConfigBuilder, Controller, StepOutcome, Transition};
pub use error::ClusteringError;
pub use inits::InitMethod;
pub use position::Position;
pub use primitive::Primitive;
pub use scene::{cluster_color, Marker, Rgb, Scene, SceneRenderer, Segment};
pub use scene::{CENTROID_COLOR, CENTROID_SIZE, CLUSTER_PALETTE, POINT_SIZE, SEGMENT_COLOR, SEGMENT_OPACITY, UNASSIGNED_COLOR};
pub use session::{AlgorithmState, Centroid, ClusteringSession, Point, Snapshot};
