//! Steps through a k-means run in the terminal, printing one frame per transition.
//!
//! Usage: `cargo run --example step_through -- [--points N] [--k N] [--seed N] [--json]`

use kmeans_stepper::*;
use rand::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Renders a scene as a per-cluster summary table.
struct TextRenderer {
    frame: usize,
}
impl SceneRenderer for TextRenderer {
    fn render(&mut self, scene: &Scene) {
        self.frame += 1;
        println!("--- frame {} ---", self.frame);
        for (idx, c) in scene.centroids.iter().enumerate() {
            let color = cluster_color(Some(idx));
            let same_color = scene.points.iter().filter(|m| m.color == color).count();
            println!(
                "  cluster {} #{:06x}  at ({:+.3}, {:+.3}, {:+.3})  {} markers in this color",
                idx, color.0, c.position.x, c.position.y, c.position.z, same_color
            );
        }
        let unassigned = scene.points.iter().filter(|m| m.color == UNASSIGNED_COLOR).count();
        if unassigned > 0 {
            println!("  {} unassigned points", unassigned);
        }
    }

    fn reset_camera(&mut self) {
        self.frame = 0;
    }
}

fn arg_value(args: &[String], name: &str) -> Option<u64> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    let seed = arg_value(&args, "--seed").unwrap_or(1337);
    let conf = ClusteringConfig::<f64>::build()
        .point_count(arg_value(&args, "--points").unwrap_or(300) as usize)
        .cluster_count(arg_value(&args, "--k").unwrap_or(3) as usize)
        .random_generator(StdRng::seed_from_u64(seed))
        .build()?;

    let mut controller = Controller::new(conf);
    let mut renderer = TextRenderer { frame: 0 };

    controller.generate_data();
    renderer.render(&Scene::from_session(controller.session()));
    controller.start_clustering()?;
    renderer.render(&Scene::from_session(controller.session()));

    loop {
        let outcome = controller.step()?;
        renderer.render(&Scene::from_session(controller.session()));
        println!("  error: {:.4}", controller.session().distsum());
        if let StepOutcome::Converged { iterations } = outcome {
            println!("converged after {} iterations", iterations);
            break;
        }
    }

    // the run is finished, another step is refused
    if let Err(err) = controller.step() {
        println!("next step: {}", err);
    }

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&Scene::from_session(controller.session()))?);
    }
    Ok(())
}
