mod graphics; // on-screen path viewer
mod io;       // mission input and path output files
mod settings; // layered configuration

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{self, EnvFilter};
use uav_navigation::{FlightContext, GraphSearch, Uav};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("UAV path planner started.");

    let mut settings = settings::load_config().context("Failed to load configuration")?;
    let mut args = std::env::args().skip(1);
    if let Some(input) = args.next() {
        settings.io.input = input.into();
    }
    if let Some(output) = args.next() {
        settings.io.output = output.into();
    }

    let mission = io::read_input(&settings.io.input)?;
    let search = GraphSearch::new(settings.planner).context("Invalid planner configuration")?;
    let uav = Uav::new(
        mission.start,
        mission.heading,
        mission.max_turn_angle,
        mission.step_size,
    )
    .with_strategy(search);
    info!(%uav, target = %mission.target, "Calculating path");

    let path = uav
        .calculate_path(mission.target)
        .context("Path calculation failed")?;
    if path.is_empty() {
        warn!(target = %mission.target, "No path found; writing an empty path file");
    } else {
        info!(waypoints = path.len(), "Path found");
    }

    io::write_path(&settings.io.output, &path)?;
    info!(
        output = %settings.io.output.display(),
        "Path calculation completed successfully."
    );

    if settings.viewer.enabled {
        let scene = graphics::Scene {
            start: uav.position(),
            heading: uav.heading(),
            target: mission.target,
            path,
            max_scale: settings.viewer.scale,
        };
        macroquad::Window::from_config(graphics::window_conf(), graphics::run_path_view(scene));
    }

    Ok(())
}
