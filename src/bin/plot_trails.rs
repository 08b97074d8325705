use clap::Parser;
use plotters::prelude::*;
use tracing::info;

use rust_grav::cli::{init_logging, SimArgs};
use rust_grav::model::Universe;

/// Runs a universe without a window and plots every body's trail to a PNG.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    sim: SimArgs,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Where to write the image
    #[arg(long, default_value = "trails.png")]
    output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.sim.log_level)?;

    let mut universe = args.sim.build_universe()?;
    for _ in 0..args.steps {
        universe.step();
    }

    draw_plot(&args.output, &universe, args.sim.width, args.sim.height)?;
    info!("Wrote {} trails to {}", universe.len(), args.output);
    Ok(())
}

fn draw_plot(
    name: &str,
    universe: &Universe,
    width: f64,
    height: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(name, (width as u32, height as u32)).into_drawing_area();
    root.fill(&BLACK)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .build_cartesian_2d(0.0..width, 0.0..height)?;

    // Universe coordinates have y pointing down, the chart has it pointing up
    for body in universe.bodies() {
        let c = body.color();
        let color = RGBColor(
            c.r.clamp(0, 255) as u8,
            c.g.clamp(0, 255) as u8,
            c.b.clamp(0, 255) as u8,
        );
        chart.draw_series(LineSeries::new(
            body.trail().map(|p| (p.x, height - p.y)),
            &color,
        ))?;

        let p = body.position();
        chart.draw_series(std::iter::once(Circle::new(
            (p.x, height - p.y),
            body.radius() as u32,
            color.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}
