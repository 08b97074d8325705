use clap::Parser;
use tracing::info;

use rust_grav::cli::{init_logging, SimArgs};

/// Runs a universe without a window and reports where everything ended up.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    sim: SimArgs,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    steps: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.sim.log_level)?;

    let mut universe = args.sim.build_universe()?;
    let initial_count = universe.len();
    for _ in 0..args.steps {
        universe.step();
    }
    info!(
        "Simulated {} steps, {} of {} bodies left",
        universe.steps(),
        universe.len(),
        initial_count
    );

    for body in universe.bodies() {
        let (p, v) = (body.position(), body.velocity());
        println!("Body {}", body.id.0);
        println!("- Position: ({:.3}, {:.3})", p.x, p.y);
        println!("- Velocity: ({:.3}, {:.3})", v.x, v.y);
        println!("- Speed: {:.3}", v.norm());
        println!("- Radius: {}", body.radius());
        println!("- Mass: {}", body.mass());
        println!();
    }
    Ok(())
}
