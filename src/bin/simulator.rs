use clap::Parser;
use kiss3d::window::Window;
use tracing::info;

use rust_grav::cli::{init_logging, SimArgs};
use rust_grav::gui::Simulation;

/// Interactive gravity sandbox.
///
/// Controls:
/// - Space: pause / resume
/// - A: toggle add mode, then click and drag to throw a new body
/// - B: switch between merging and bouncing collisions
/// - 1, 2, 3: load the orbit, two-body and three-body presets
/// - `.` / `,`: double / halve the gravitational constant
/// - Delete: remove every body
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    sim: SimArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.sim.log_level)?;

    let universe = args.sim.build_universe()?;
    info!("Starting with {} bodies", universe.len());

    let mut window = Window::new_with_size(
        "Gravity Sandbox",
        args.sim.width as u32,
        args.sim.height as u32,
    );
    window.set_framerate_limit(Some(60));

    let simulation = Simulation::new(universe, &args.sim.config());
    window.render_loop(simulation);
    Ok(())
}
