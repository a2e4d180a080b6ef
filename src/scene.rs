//! Data contract between a clustering session and whatever draws it.
//!
//! A [`Scene`] is a flat list of visual primitives derived from a session: one marker per
//! point (colored by cluster), one marker per centroid, and one segment from every assigned
//! point to its centroid. A [`SceneRenderer`] consumes scenes; it never feeds anything back
//! into the session.

use crate::{position::Position, primitive::Primitive, session::ClusteringSession};
use serde::{Deserialize, Serialize};

/// 24 bit `0xRRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u32);
impl Rgb {
    /// Channels scaled into `[0, 1]`, as most graphics APIs expect them.
    pub fn to_unit(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

/// Colors cycled through by cluster index.
pub const CLUSTER_PALETTE: [Rgb; 6] = [
    Rgb(0xff0000), Rgb(0x00ff00), Rgb(0x0000ff), Rgb(0xffff00), Rgb(0x00ffff), Rgb(0xff00ff),
];
pub const UNASSIGNED_COLOR: Rgb = Rgb(0x808080);
pub const CENTROID_COLOR: Rgb = Rgb(0x000000);
pub const SEGMENT_COLOR: Rgb = Rgb(0xaaaaaa);
pub const SEGMENT_OPACITY: f32 = 0.5;
pub const POINT_SIZE: f32 = 0.1;
pub const CENTROID_SIZE: f32 = 0.2;

/// Color of a point marker with the given label.
pub fn cluster_color(cluster: Option<usize>) -> Rgb {
    match cluster {
        Some(c) => CLUSTER_PALETTE[c % CLUSTER_PALETTE.len()],
        None => UNASSIGNED_COLOR,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker<T: Primitive = f64> {
    pub position: Position<T>,
    pub color: Rgb,
    pub size: f32,
}

/// Line from a point to the centroid it is assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment<T: Primitive = f64> {
    pub from: Position<T>,
    pub to: Position<T>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene<T: Primitive = f64> {
    pub points: Vec<Marker<T>>,
    pub centroids: Vec<Marker<T>>,
    pub segments: Vec<Segment<T>>,
}
impl<T: Primitive> Scene<T> {
    /// Derive all visual primitives of a session.
    pub fn from_session(session: &ClusteringSession<T>) -> Self {
        let centroids = session.centroids();
        let points = session.points().iter()
            .map(|p| Marker { position: p.position, color: cluster_color(p.cluster), size: POINT_SIZE })
            .collect();
        let segments = session.points().iter()
            .filter_map(|p| p.cluster.and_then(|c| centroids.get(c)).map(|c| Segment { from: p.position, to: c.position }))
            .collect();
        let centroids = centroids.iter()
            .map(|c| Marker { position: c.position, color: CENTROID_COLOR, size: CENTROID_SIZE })
            .collect();
        Self { points, centroids, segments }
    }
}

/// Presentation side of a clustering session.
///
/// Implementations repaint the latest scene from their render loop and own camera handling.
/// Nothing a renderer does has an effect on the session.
pub trait SceneRenderer<T: Primitive = f64> {
    /// Replace whatever is currently shown with **scene**.
    fn render(&mut self, scene: &Scene<T>);

    /// Move the camera back to its initial framing.
    fn reset_camera(&mut self) {}
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::*;

    #[test]
    fn palette_cycles_and_grey_for_unassigned() {
        assert_eq!(cluster_color(None), UNASSIGNED_COLOR);
        assert_eq!(cluster_color(Some(0)), Rgb(0xff0000));
        assert_eq!(cluster_color(Some(5)), Rgb(0xff00ff));
        assert_eq!(cluster_color(Some(6)), cluster_color(Some(0)));
        assert_eq!(Rgb(0x808080).to_unit(), [128.0 / 255.0; 3]);
    }

    #[test]
    fn initial_session_has_no_segments() {
        let controller = two_pairs_controller::<f64>();
        let scene = Scene::from_session(controller.session());
        assert_eq!(scene.points.len(), 4);
        assert!(scene.points.iter().all(|m| m.color == UNASSIGNED_COLOR));
        assert!(scene.centroids.is_empty());
        assert!(scene.segments.is_empty());
    }

    #[test]
    fn running_session_links_points_to_centroids() {
        let mut controller = two_pairs_controller::<f32>();
        controller.start_clustering().unwrap();
        let scene = Scene::from_session(controller.session());

        assert_eq!(scene.centroids.len(), 2);
        assert!(scene.centroids.iter().all(|m| m.color == CENTROID_COLOR && m.size == CENTROID_SIZE));
        assert_eq!(scene.segments.len(), 4);
        assert_eq!(scene.points[0].color, CLUSTER_PALETTE[0]);
        assert_eq!(scene.points[3].color, CLUSTER_PALETTE[1]);
        assert_eq!(scene.segments[3].to, controller.session().centroids()[1].position);
    }

    #[derive(Default)]
    struct CountingRenderer { frames: usize, resets: usize, last_segments: usize }
    impl SceneRenderer for CountingRenderer {
        fn render(&mut self, scene: &Scene) {
            self.frames += 1;
            self.last_segments = scene.segments.len();
        }
        fn reset_camera(&mut self) { self.resets += 1; }
    }

    #[test]
    fn renderer_only_reads() {
        let mut controller = two_pairs_controller::<f64>();
        let mut renderer = CountingRenderer::default();
        controller.start_clustering().unwrap();
        let before = controller.snapshot();

        renderer.render(&Scene::from_session(controller.session()));
        renderer.reset_camera();
        renderer.render(&Scene::from_session(controller.session()));
        assert_eq!((renderer.frames, renderer.resets, renderer.last_segments), (2, 1, 4));
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn scene_serializes_for_external_frontends() {
        let mut controller = two_pairs_controller::<f64>();
        controller.start_clustering().unwrap();
        let json = serde_json::to_value(Scene::from_session(controller.session())).unwrap();
        assert_eq!(json["points"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["centroids"][1]["position"]["x"], 10.0);
        assert_eq!(json["points"][0]["color"], 0xff0000);
    }
}
